//! Delimited-text encoding of record sequences.
//!
//! The same bytes serve as the persisted record file and as the export
//! artifact. The header row is always written, even for an empty sequence.

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use super::types::{ApplicationRecord, DATE_FORMAT, parse_date};
use crate::{Result, constants::RECORD_HEADER, persistence::StorageError};

/// Encodes records as CSV text with the standard header row.
pub fn encode<'a>(records: impl IntoIterator<Item = &'a ApplicationRecord>) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(RECORD_HEADER)
        .map_err(StorageError::from)?;
    for record in records {
        let date = record.date.format(DATE_FORMAT).to_string();
        writer
            .write_record([
                record.company.as_str(),
                record.role.as_str(),
                record.location.as_str(),
                date.as_str(),
                record.status.as_str(),
                record.mode.as_str(),
                record.link.as_str(),
            ])
            .map_err(StorageError::from)?;
    }

    writer
        .into_inner()
        .map_err(|e| StorageError::from(csv::Error::from(e.into_error())).into())
}

/// Decodes CSV text produced by [`encode`].
///
/// Empty input is an empty sequence. Otherwise the first row must be the
/// standard header.
pub fn decode(bytes: &[u8]) -> Result<Vec<ApplicationRecord>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(StorageError::from)?.clone();
    if headers.iter().ne(RECORD_HEADER) {
        return Err(StorageError::UnexpectedHeader {
            expected: RECORD_HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        }
        .into());
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(StorageError::from)?;
        records.push(decode_row(&row)?);
    }
    Ok(records)
}

fn decode_row(row: &StringRecord) -> Result<ApplicationRecord> {
    let line = row.position().map_or(0, |p| p.line());
    let malformed = |reason: String| -> crate::Error {
        StorageError::MalformedRecord { line, reason }.into()
    };
    let field = |index: usize| row.get(index).unwrap_or_default();

    Ok(ApplicationRecord {
        company: field(0).to_string(),
        role: field(1).to_string(),
        location: field(2).parse().map_err(|e| malformed(format!("{e}")))?,
        date: parse_date(field(3)).map_err(|e| malformed(format!("{e}")))?,
        status: field(4).parse().map_err(|e| malformed(format!("{e}")))?,
        mode: field(5).parse().map_err(|e| malformed(format!("{e}")))?,
        link: field(6).to_string(),
    })
}
