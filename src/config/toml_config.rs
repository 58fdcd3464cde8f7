use crate::utils::error::{Result, SequenceError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration of the `sequence-tests` tool.
///
/// ```toml
/// [analysis]
/// input = "sequences.json"
/// block_size = 8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub analysis: AnalysisSection,

    /// Directory of the config file; relative inputs are resolved against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub input: String,
    #[serde(default = "default_block_size")]
    pub block_size: usize,
}

fn default_block_size() -> usize {
    8
}

impl AnalysisConfig {
    /// Loads the config and remembers its directory for relative inputs.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SequenceError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.as_ref().parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SequenceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SequenceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> PathBuf {
        let input = Path::new(&self.analysis.input);
        match &self.base_dir {
            Some(base) if input.is_relative() => base.join(input),
            _ => input.to_path_buf(),
        }
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        validate_path("analysis.input", &self.analysis.input)?;
        validate_positive_number("analysis.block_size", self.analysis.block_size, 1)?;
        Ok(())
    }
}
