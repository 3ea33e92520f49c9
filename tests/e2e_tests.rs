//! End-to-end integration tests
//!
//! These tests validate the complete pipeline using predefined CSV fixtures.
//! Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Registers people, applies expenses and settles the group
//! 3. Writes the selected output format
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The trip example, as transfers and as a full matrix
//! - Equal splits in both directions
//! - Truncation residuals from uneven splits
//! - Rejected records (unknown people, malformed splits, bad costs)
//! - Several overlapping expenses
//! - An empty group

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use settle_up::cli::OutputFormat;
    use settle_up::pipeline;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a test fixture by processing input.csv and comparing with expected.csv
    fn run_test_fixture(fixture_name: &str, format: OutputFormat) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        pipeline::process(Path::new(&input_path), format, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (format: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, format, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("trip_transfers", OutputFormat::Transfers)]
    #[case("trip_matrix", OutputFormat::Matrix)]
    #[case("round_trip_balances", OutputFormat::Balances)]
    #[case("round_trip_transfers", OutputFormat::Transfers)]
    #[case("truncation_residual", OutputFormat::Transfers)]
    #[case("malformed_records", OutputFormat::Transfers)]
    #[case("multiple_expenses", OutputFormat::Transfers)]
    #[case("empty_group", OutputFormat::Transfers)]
    fn test_fixtures(#[case] fixture: &str, #[case] format: OutputFormat) {
        run_test_fixture(fixture, format);
    }
}
