//! JSON Lines (JSONL) output writer.
//!
//! One row per line suits line-oriented tools such as `jq -c` and
//! spreadsheet importers that stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ExportRow;
use crate::MessageRecord;
use crate::error::ChatstatError;

/// Writes records to JSONL, one JSON object per line.
pub fn write_jsonl(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<(), ChatstatError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, &ExportRow::from(record))?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String, ChatstatError> {
    let mut output = String::new();

    for record in records {
        output.push_str(&serde_json::to_string(&ExportRow::from(record))?);
        output.push('\n');
    }

    Ok(output)
}
