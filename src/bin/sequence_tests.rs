use anyhow::Context;
use bin_sequence::core::analysis;
use bin_sequence::utils::{logger, validation::Validate};
use bin_sequence::{AnalysisConfig, SequenceError};
use clap::Parser;

#[derive(Parser)]
#[command(name = "sequence-tests")]
#[command(about = "Frequency, runs and longest-run checks for binary sequences")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sequence-tests.toml")]
    config: String,

    /// Print the reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write diagnostics to stderr as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = AnalysisConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let reports = analysis::analyze_file(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.to_text());
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("📁 Loading configuration from: {}", args.config);

    if let Err(e) = run(&args) {
        tracing::error!("❌ Sequence tests failed: {:#}", e);

        let exit_code = match e.downcast_ref::<SequenceError>() {
            Some(err) => {
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                err.severity().exit_code().max(1)
            }
            None => {
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}
