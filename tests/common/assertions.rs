//! Assertion helpers for archives and event streams.

use std::fs::File;
use std::path::Path;

/// Entry names of a zip archive, in archive order
pub fn zip_entry_names(path: &Path) -> Vec<String> {
    let file = File::open(path)
        .unwrap_or_else(|e| panic!("cannot open archive {}: {e}", path.display()));
    let mut archive = zip::ZipArchive::new(file).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Read a JSON file into a value
pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap()
}

/// Assert that output contains the expected text
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($expected),
            "Expected output to contain '{}'.\nExit code: {}\nOutput:\n{}",
            $expected,
            $result.exit_code,
            output
        );
    };
}

/// Assert the process exit code with the full output on failure
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code,
            $code,
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}
