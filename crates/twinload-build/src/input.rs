//! Reading the `from,to,type` input table.
//!
//! The first row names the columns. Blank lines are skipped. Every row is
//! classified on read so a malformed table fails before any remote call.

use std::path::Path;

use twinload_core::Record;

use crate::error::{BuildError, Result};

/// Resolve `path` and read every record from it, in file order.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let path = std::path::absolute(path)?;
    let content = std::fs::read_to_string(&path).map_err(|e| BuildError::Input {
        path: path.clone(),
        source: csv::Error::from(e),
    })?;

    let records = parse_records(&content, &path)?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded input table");
    Ok(records)
}

/// Parse records from an in-memory table. `origin` only labels errors.
pub fn parse_records(content: &str, origin: &Path) -> Result<Vec<Record>> {
    let input_error = |source| BuildError::Input {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());
    let headers = reader.headers().map_err(input_error)?.clone();
    let mut row = csv::StringRecord::new();
    let mut records = Vec::new();

    while reader.read_record(&mut row).map_err(input_error)? {
        let mut record: Record = row.deserialize(Some(&headers)).map_err(input_error)?;
        record.line = row.position().map_or(0, |p| line_at(content, p.byte()));
        record.kind()?;
        records.push(record);
    }

    Ok(records)
}

/// 1-based line on which a record starts.
///
/// The reader reports a record's start before skipping the blank lines in
/// front of it, and its own line counter ignores them, so both are corrected
/// against the source text here.
fn line_at(content: &str, byte: u64) -> u64 {
    let bytes = content.as_bytes();
    let mut start = usize::try_from(byte).unwrap_or(usize::MAX).min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\n' | b'\r') {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}
