//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ExportRow;
use crate::MessageRecord;
use crate::error::ChatstatError;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"date": "2023-01-02", "time": "15:04", "sender": "Alice", "body": "hello", ...}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<(), ChatstatError> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[MessageRecord]) -> Result<String, ChatstatError> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(ExportRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::derive;
    use crate::parser::{Grammar, create_parser};

    #[test]
    fn test_to_json_fields() {
        let records = derive(create_parser(Grammar::Line).parse_str(
            "1/2/23, 3:04 PM - Alice: hello\n1/2/23, 3:05 PM - Bob joined",
        ));
        let json = to_json(&records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["sender"], "Alice");
        assert_eq!(parsed[0]["date"], "2023-01-02");
        assert_eq!(parsed[0]["period"], "15-16");
        assert_eq!(parsed[1]["sender"], "SYSTEM");
    }

    #[test]
    fn test_unknown_fields_are_null() {
        let records = derive(create_parser(Grammar::Line).parse_str("1/2/23, 15:04 - Alice: hello"));
        let parsed: serde_json::Value = serde_json::from_str(&to_json(&records).unwrap()).unwrap();

        assert!(parsed[0]["hour"].is_null());
        assert_eq!(parsed[0]["day_name"], "Monday");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
