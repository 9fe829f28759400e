//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use tracker::record::{ApplicationRecord, DATE_FORMAT, Mode, ModeSummary, StoredRecord};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Column headers of the record table.
pub const RECORD_HEADERS: [&str; 8] = [
    "#", "COMPANY", "ROLE", "LOCATION", "DATE", "STATUS", "MODE", "LINK",
];

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }
    for line in table_lines(headers, rows) {
        println!("{line}");
    }
}

fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    // Column widths in characters: max of header and all row values
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(pad_row(headers.iter().copied(), &widths));
    for row in rows {
        lines.push(pad_row(row.iter().take(col_count).map(String::as_str), &widths));
    }
    lines
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
        .collect();
    line.join("  ").trim_end().to_string()
}

/// Table cells for one record at a 1-based row number.
pub fn record_row(row: usize, record: &ApplicationRecord) -> Vec<String> {
    vec![
        row.to_string(),
        record.company.clone(),
        record.role.clone(),
        record.location.to_string(),
        record.date.format(DATE_FORMAT).to_string(),
        record.status.to_string(),
        record.mode.to_string(),
        record.link.clone(),
    ]
}

/// JSON form of the record list, with row numbers.
pub fn records_json(entries: &[StoredRecord]) -> serde_json::Value {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::json!({
                "row": i + 1,
                "id": entry.id,
                "company": entry.record.company,
                "role": entry.record.role,
                "location": entry.record.location,
                "date": entry.record.date.format(DATE_FORMAT).to_string(),
                "status": entry.record.status,
                "mode": entry.record.mode,
                "link": entry.record.link,
            })
        })
        .collect()
}

/// One line per mode with a bar scaled to the largest count.
///
/// Modes without records are skipped, matching the summary itself.
pub fn summary_lines(summary: &ModeSummary, bar_width: usize) -> Vec<String> {
    let max = summary.values().copied().max().unwrap_or(0);
    let label_width = Mode::ALL.iter().map(|m| m.as_str().len()).max().unwrap_or(0);

    summary
        .iter()
        .map(|(mode, &count)| {
            let len = if max == 0 { 0 } else { (count * bar_width).div_ceil(max) };
            format!(
                "{:<label_width$}  {} {count}",
                mode.as_str(),
                "#".repeat(len)
            )
        })
        .collect()
}
