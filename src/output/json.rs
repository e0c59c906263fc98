//! JSON output for check results.

use crate::processing::Report;
use std::error::Error;

/// Render the emitted candidates as a pretty-printed JSON array.
pub fn json_lines(report: &Report) -> Result<Vec<String>, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&report.results)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use crate::processing::{Classified, Status};

    #[test]
    fn test_json_lines() {
        let report = Report {
            results: vec![Classified {
                entry: "10.0.0.5".to_string(),
                kind: EntryKind::Address,
                status: Status::Found,
            }],
            ..Default::default()
        };
        let json = json_lines(&report).unwrap().join("\n");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "entry": "10.0.0.5", "kind": "address", "status": "found" }])
        );
    }

    #[test]
    fn test_json_lines_empty() {
        assert_eq!(json_lines(&Report::default()).unwrap(), vec!["[]"]);
    }
}
