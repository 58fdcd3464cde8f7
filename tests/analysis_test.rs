use bin_sequence::adapters::random::seeded_source;
use bin_sequence::core::analysis::{analyze, analyze_file, analyze_json_str};
use bin_sequence::utils::validation::Validate;
use bin_sequence::{AnalysisConfig, BitStringGenerator, Policy, SequenceError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_analyze_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();

    let mut sequences = serde_json::Map::new();
    for (name, policy) in [("wide", Policy::Wide), ("bytewise", Policy::Bytewise)] {
        let bits = BitStringGenerator::new(seeded_source(9), policy)
            .generate()
            .unwrap();
        sequences.insert(name.to_string(), serde_json::Value::String(bits.into_string()));
    }
    fs::write(
        temp_dir.path().join("sequences.json"),
        serde_json::Value::Object(sequences).to_string(),
    )
    .unwrap();

    let config_path = temp_dir.path().join("sequence-tests.toml");
    fs::write(
        &config_path,
        "[analysis]\ninput = \"sequences.json\"\nblock_size = 8\n",
    )
    .unwrap();

    let config = AnalysisConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();
    let reports = analyze_file(&config).unwrap();

    assert_eq!(reports.len(), 2);
    // Reports follow the order of the JSON file, not name order.
    assert_eq!(reports[0].name, "wide");
    assert_eq!(reports[1].name, "bytewise");
    for report in &reports {
        assert_eq!(report.longest_run_ones.len(), 16);
        assert!(report.longest_run_ones.iter().all(|run| *run <= 8));
        assert!(report.frequency_test_statistic >= 0.0);
    }
}

#[test]
fn test_all_zero_sequence_statistics() {
    let zeros = "0".repeat(128);
    let report = analyze("zeros", &zeros, 8).unwrap();

    // |-128| / sqrt(128) = sqrt(128)
    assert!((report.frequency_test_statistic - 128f64.sqrt()).abs() < 1e-9);
    assert_eq!(report.runs_test_statistic, 0.0);
    assert_eq!(report.longest_run_ones, vec![0; 16]);
}

#[test]
fn test_alternating_sequence_statistics() {
    let alternating = "01".repeat(64);
    let report = analyze("alt", &alternating, 8).unwrap();

    assert_eq!(report.frequency_test_statistic, 0.0);
    assert_eq!(report.runs_test_statistic, 128.0);
    assert_eq!(report.longest_run_ones, vec![1; 16]);
}

#[test]
fn test_invalid_json_input() {
    let err = analyze_json_str("[\"0101\"]", 8).unwrap_err();
    assert!(matches!(err, SequenceError::SerializationError(_)));

    let err = analyze_json_str("{}", 8).unwrap_err();
    assert!(matches!(err, SequenceError::ValidationError { .. }));

    let err = analyze_json_str(r#"{"bad": "0120"}"#, 8).unwrap_err();
    assert!(matches!(err, SequenceError::ValidationError { .. }));
}

#[test]
fn test_missing_input_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sequence-tests.toml");
    fs::write(&config_path, "[analysis]\ninput = \"missing.json\"\n").unwrap();

    let config = AnalysisConfig::from_file(&config_path).unwrap();
    let err = analyze_file(&config).unwrap_err();
    assert!(matches!(err, SequenceError::IoError(_)));
}
