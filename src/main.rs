use bin_sequence::adapters::random;
use bin_sequence::utils::logger;
use bin_sequence::{BitStringGenerator, CliConfig, Policy};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // Diagnostics go to stderr; RUST_LOG raises the level.
    logger::init_cli_logger(false);
    tracing::debug!("CLI config: {:?}", config);

    let result = random::default_source().and_then(|source| {
        let mut generator = BitStringGenerator::new(source, Policy::Wide);
        generator.run_stdout()
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code().max(1));
    }
}
