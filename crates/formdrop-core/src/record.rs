//! CSV record serialization for form submissions.
//!
//! A record is a two-line UTF-8 text blob: the fixed header followed by
//! exactly one data line. Field values are escaped so no raw comma or
//! newline can break the delimiter structure; the replacement is lossy by
//! design and idempotent under re-escaping.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::Submission;

/// Fixed header line, byte-identical across all records.
pub const CSV_HEADER: &str = "name,email,contact,branch,position,timestamp";

/// A serialized submission. Immutable once built; pure function of the
/// submission and the server-assigned timestamp passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    row: String,
    timestamp: DateTime<Utc>,
}

/// Replace every comma, then every newline (CR or LF), with a single space.
///
/// Exact original content containing those characters is not round-trippable
/// from the stored record.
pub fn escape_field(value: &str) -> String {
    value
        .replace(',', " ")
        .replace('\n', " ")
        .replace('\r', " ")
}

impl CsvRecord {
    /// Serialize a submission with the given server-assigned timestamp.
    pub fn new(submission: &Submission, timestamp: DateTime<Utc>) -> Self {
        let row = format!(
            "{},{},{},{},{},{}",
            escape_field(&submission.name),
            escape_field(&submission.email),
            escape_field(&submission.contact),
            escape_field(&submission.branch),
            escape_field(&submission.position),
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        CsvRecord { row, timestamp }
    }

    /// The timestamp assigned at serialization time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Header plus one data line, each newline-terminated.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{}\n{}\n", CSV_HEADER, self.row).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn submission(name: &str) -> Submission {
        let fields: HashMap<String, String> = [
            ("name", name),
            ("email", "j@x.com"),
            ("contact", "123"),
            ("branch", "CS"),
            ("position", "Intern"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Submission::from_fields(&fields).unwrap()
    }

    #[test]
    fn record_has_two_lines_and_six_columns() {
        let record = CsvRecord::new(&submission("Joe"), Utc::now());
        let text = String::from_utf8(record.to_bytes()).unwrap();
        let lines: Vec<&str> = text.trim_end().split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1].split(',').count(), 6);
    }

    #[test]
    fn commas_in_values_become_spaces() {
        let record = CsvRecord::new(&submission("Jo,e"), Utc::now());
        let text = String::from_utf8(record.to_bytes()).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("Jo e,j@x.com,123,CS,Intern,"));
    }

    #[test]
    fn newlines_in_values_become_spaces() {
        let record = CsvRecord::new(&submission("line1\nline2\r\nline3"), Utc::now());
        let text = String::from_utf8(record.to_bytes()).unwrap();
        assert_eq!(text.trim_end().lines().count(), 2);
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("line1 line2  line3,"));
    }

    #[test]
    fn escaping_is_idempotent() {
        let once = escape_field("a,b\nc\rd");
        let twice = escape_field(&once);
        assert_eq!(once, twice);
        assert!(!once.contains(',') && !once.contains('\n') && !once.contains('\r'));
    }

    #[test]
    fn timestamp_column_is_rfc3339() {
        let now = Utc::now();
        let record = CsvRecord::new(&submission("Joe"), now);
        let text = String::from_utf8(record.to_bytes()).unwrap();
        let row = text.lines().nth(1).unwrap();
        let stamp = row.rsplit(',').next().unwrap();
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();
        assert_eq!(parsed.with_timezone(&Utc).timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn header_is_stable_across_records() {
        let a = CsvRecord::new(&submission("A"), Utc::now());
        let b = CsvRecord::new(&submission("B"), Utc::now());
        let header = |bytes: Vec<u8>| String::from_utf8(bytes).unwrap().lines().next().unwrap().to_string();
        assert_eq!(header(a.to_bytes()), header(b.to_bytes()));
    }
}
