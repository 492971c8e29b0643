//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{EXPORT_COLUMNS, ExportRow};
use crate::MessageRecord;
use crate::error::ChatstatError;

/// Writes records to CSV.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `date`, `time`, `sender`, `body`, `year`, `month`,
///   `month_num`, `day`, `day_name`, `hour`, `minute`, `period`
/// - Unknown fields are empty cells
/// - The header row is written even when `records` is empty
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<(), ChatstatError> {
    let file = File::create(output_path)?;
    write_rows(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String, ChatstatError> {
    let mut buffer = Vec::new();
    write_rows(records, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

fn write_rows<W: Write>(records: &[MessageRecord], sink: W) -> Result<(), ChatstatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.serialize(ExportRow::from(record))?;
    }

    writer.flush()?;
    Ok(())
}
