pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Command line of the `bin-sequence` generator. It takes no arguments;
/// clap only adds `--help` and `--version` and rejects anything else.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "bin-sequence", version)]
#[command(about = "Print a random 128-bit binary sequence")]
pub struct CliConfig {}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_generator_cli_takes_no_arguments() {
        assert!(CliConfig::try_parse_from(["bin-sequence"]).is_ok());
        assert!(CliConfig::try_parse_from(["bin-sequence", "--verbose"]).is_err());
        assert!(CliConfig::try_parse_from(["bin-sequence", "extra"]).is_err());
    }
}
