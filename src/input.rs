//! Line-oriented input files.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Read trimmed, non-blank lines from any reader.
///
/// Lines are split on raw bytes and decoded lossily, so text that is not
/// UTF-8 reaches the classifier (and is reported invalid) instead of failing
/// the read. Only real I/O errors are returned.
pub fn read_lines_from<R: Read>(reader: R) -> Result<Vec<String>, Box<dyn Error>> {
    let mut lines = Vec::new();
    for raw in BufReader::new(reader).split(b'\n') {
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Read trimmed, non-blank lines from the file at `path`.
///
/// # Arguments
/// * `path` - File to read
/// * `kind` - What the file holds, used in the error message ("IP", "subnet")
pub fn read_lines(path: &str, kind: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("Error reading {kind} file {path}: {e}"))?;
    let lines =
        read_lines_from(file).map_err(|e| format!("Error reading {kind} file {path}: {e}"))?;
    log::info!("Read {} lines from {kind} file {path}", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_trims_and_skips_blank() {
        let input = "  10.0.0.1  \n\n\t\n10.0.0.0/24\r\n   \n";
        let lines = read_lines_from(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["10.0.0.1", "10.0.0.0/24"]);
    }

    #[test]
    fn test_read_lines_keeps_non_utf8_line() {
        let input: &[u8] = b"10.0.0.5\n\xe9t\xe9\n10.0.1.5\n";
        let lines = read_lines_from(input).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "10.0.0.5");
        assert_eq!(lines[1], "\u{FFFD}t\u{FFFD}");
        assert_eq!(lines[2], "10.0.1.5");
        assert!(!crate::models::is_valid_ip(&lines[1]));
    }

    #[test]
    fn test_read_lines_empty() {
        let lines = read_lines_from("".as_bytes()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_lines_missing_file() {
        let err = read_lines("src/tests/test_data/does_not_exist.txt", "IP").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Error reading IP file src/tests/test_data/does_not_exist.txt"));
    }

    #[test]
    fn test_read_lines_fixture() {
        let lines = read_lines("src/tests/test_data/subnets_01.txt", "subnet").unwrap();
        assert_eq!(lines, vec!["10.0.0.0/24"]);
    }
}
