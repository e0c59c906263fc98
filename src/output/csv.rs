//! CSV output formatting for check results.

use crate::processing::{Classified, Report};

/// Header row for [`csv_lines`].
pub const CSV_HEADER: &str = r#""entry","kind","status""#;

/// Quote a CSV field, doubling any embedded double quotes.
///
/// Every field is quoted so spreadsheet imports never split an entry.
pub fn escape_csv_field(input: &str) -> String {
    format!("\"{}\"", input.replace('"', "\"\""))
}

fn csv_row(row: &Classified) -> String {
    format!(
        "{entry},{kind},{status}",
        entry = escape_csv_field(&row.entry),
        kind = escape_csv_field(&row.kind.to_string()),
        status = escape_csv_field(&row.status.to_string()),
    )
}

/// Render the emitted candidates as CSV, header first.
pub fn csv_lines(report: &Report) -> Vec<String> {
    log::debug!("csv_lines() rows={}", report.results.len());
    std::iter::once(CSV_HEADER.to_string())
        .chain(report.results.iter().map(csv_row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use crate::processing::Status;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("10.0.0.1"), "\"10.0.0.1\"");
        assert_eq!(escape_csv_field("a\"b"), "\"a\"\"b\"");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_csv_lines() {
        let report = Report {
            results: vec![
                Classified {
                    entry: "10.0.0.0/25".to_string(),
                    kind: EntryKind::Subnet,
                    status: Status::Found,
                },
                Classified {
                    entry: "300.1.1.1".to_string(),
                    kind: EntryKind::Invalid,
                    status: Status::Invalid,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            csv_lines(&report),
            vec![
                r#""entry","kind","status""#,
                r#""10.0.0.0/25","subnet","found""#,
                r#""300.1.1.1","invalid","invalid""#,
            ]
        );
    }

    #[test]
    fn test_csv_lines_empty_report() {
        assert_eq!(csv_lines(&Report::default()), vec![CSV_HEADER]);
    }
}
