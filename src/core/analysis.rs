//! Statistical checks for binary sequences: the frequency (monobit) test,
//! the runs test and the longest run of ones per block.

use crate::config::toml_config::AnalysisConfig;
use crate::utils::error::{Result, SequenceError};
use crate::utils::validation::{validate_bit_string, validate_positive_number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub name: String,
    pub frequency_test_statistic: f64,
    pub runs_test_statistic: f64,
    pub longest_run_ones: Vec<usize>,
}

/// `|S_n| / sqrt(n)` where `S_n` counts +1 for every '1' and -1 for every '0'.
pub fn frequency_test(bits: &str) -> Result<f64> {
    validate_bit_string("sequence", bits)?;

    let sum: i64 = bits.bytes().map(|b| if b == b'1' { 1 } else { -1 }).sum();
    Ok(sum.unsigned_abs() as f64 / (bits.len() as f64).sqrt())
}

/// Total number of runs, or `0.0` when the share of ones is too far from one
/// half (`|p - 0.5| > 2 / sqrt(n)`) for the runs count to be meaningful.
pub fn runs_test(bits: &str) -> Result<f64> {
    validate_bit_string("sequence", bits)?;

    let bytes = bits.as_bytes();
    let n = bytes.len() as f64;
    let runs = 1 + bytes.windows(2).filter(|w| w[0] != w[1]).count();

    let proportion = bytes.iter().filter(|b| **b == b'1').count() as f64 / n;
    let tau = 2.0 / n.sqrt();
    if (proportion - 0.5).abs() > tau {
        tracing::debug!(proportion, tau, "runs test prerequisite failed");
        return Ok(0.0);
    }

    Ok(runs as f64)
}

/// Longest run of consecutive '1' in each block of `block_size` bits. The
/// last block may be shorter.
pub fn longest_run_ones(bits: &str, block_size: usize) -> Result<Vec<usize>> {
    validate_bit_string("sequence", bits)?;
    validate_positive_number("block_size", block_size, 1)?;

    Ok(bits
        .as_bytes()
        .chunks(block_size)
        .map(|block| {
            block
                .split(|b| *b == b'0')
                .map(<[u8]>::len)
                .max()
                .unwrap_or(0)
        })
        .collect())
}

pub fn analyze(name: &str, bits: &str, block_size: usize) -> Result<SequenceReport> {
    validate_bit_string(name, bits)?;

    Ok(SequenceReport {
        name: name.to_string(),
        frequency_test_statistic: frequency_test(bits)?,
        runs_test_statistic: runs_test(bits)?,
        longest_run_ones: longest_run_ones(bits, block_size)?,
    })
}

/// Analyzes every sequence of a JSON object `{ "name": "0101...", ... }`,
/// in the order the names appear in the input.
pub fn analyze_json_str(content: &str, block_size: usize) -> Result<Vec<SequenceReport>> {
    let sequences: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
    if sequences.is_empty() {
        return Err(SequenceError::ValidationError {
            message: "No sequences found in input".to_string(),
        });
    }

    sequences
        .iter()
        .map(|(name, value)| {
            let bits = value.as_str().ok_or_else(|| SequenceError::ValidationError {
                message: format!("Sequence '{}' is not a string", name),
            })?;
            analyze(name, bits, block_size)
        })
        .collect()
}

pub fn analyze_file(config: &AnalysisConfig) -> Result<Vec<SequenceReport>> {
    let path = config.input_path();
    tracing::info!("Reading sequences from {}", path.display());

    let content = std::fs::read_to_string(&path)?;
    let reports = analyze_json_str(&content, config.analysis.block_size)?;

    tracing::info!("Analyzed {} sequences", reports.len());
    Ok(reports)
}

impl SequenceReport {
    /// Plain-text block printed by the `sequence-tests` binary. Statistics
    /// always carry a fractional part (`0.0`, not `0`).
    pub fn to_text(&self) -> String {
        format!(
            "Results for {}:\nFrequency Test Statistic: {:?}\nRuns Test Statistic: {:?}\nLongest Run of Ones: {:?}\n",
            self.name, self.frequency_test_statistic, self.runs_test_statistic, self.longest_run_ones
        )
    }
}
