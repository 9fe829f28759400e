//! Record commands: add, list, delete, export and summary.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tracker::{
    persistence::write_atomic,
    record::{ApplicationForm, DATE_FORMAT},
};

use crate::cli::{AddArgs, DeleteArgs, ExportArgs, RecordArgs};
use crate::manager::{create_manager, open_session};
use crate::output::{
    OutputFormat, RECORD_HEADERS, print_table, record_row, records_json, summary_lines,
};

/// Width of the longest bar printed by `summary`.
const SUMMARY_BAR_WIDTH: usize = 40;

/// Run the `add` command
pub fn add(args: &AddArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.record.store);
    let mut handle = open_session(&manager, &args.record.credentials)?;

    let date = match &args.date {
        Some(date) => date.clone(),
        None => chrono::Local::now()
            .date_naive()
            .format(DATE_FORMAT)
            .to_string(),
    };
    let form = ApplicationForm {
        company: args.company.clone(),
        role: args.role.clone(),
        location: args.location.clone(),
        date,
        status: args.status.clone(),
        mode: args.work_mode.clone(),
        link: args.link.clone(),
    };

    let id = manager.add_record(&mut handle, form)?;
    let row = handle.records().position_of(id).unwrap_or(handle.records().len());

    match format {
        OutputFormat::Human => println!("Added row {row}: {} - {}", args.company, args.role),
        OutputFormat::Json => {
            let value = serde_json::json!({ "row": row, "id": id });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the `list` command
pub fn list(args: &RecordArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.store);
    let handle = open_session(&manager, &args.credentials)?;
    let entries = manager.current_records(&handle);

    match format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No applications recorded.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = entries
                .iter()
                .enumerate()
                .map(|(i, entry)| record_row(i + 1, &entry.record))
                .collect();
            print_table(&RECORD_HEADERS, &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&records_json(entries))?),
    }
    Ok(())
}

/// Run the `delete` command
pub fn delete(args: &DeleteArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.record.store);
    let mut handle = open_session(&manager, &args.record.credentials)?;

    let removed = manager.delete_record(&mut handle, args.row)?;

    match format {
        OutputFormat::Human => println!(
            "Deleted row {}: {} - {}",
            args.row, removed.record.company, removed.record.role
        ),
        OutputFormat::Json => {
            let value = serde_json::json!({ "deleted": args.row, "remaining": handle.records().len() });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Where `export` sends its bytes.
#[derive(Debug, PartialEq, Eq)]
enum ExportTarget {
    Stdout,
    /// The output path is the live record file, which already holds the export.
    RecordFile(PathBuf),
    File(PathBuf),
}

fn export_target(output: &Path, records_path: &Path) -> ExportTarget {
    if output == Path::new("-") {
        ExportTarget::Stdout
    } else if same_file(output, records_path) {
        ExportTarget::RecordFile(output.to_path_buf())
    } else {
        ExportTarget::File(output.to_path_buf())
    }
}

/// Compares paths after resolving their parent directories, so `x.csv` and
/// `./x.csv` match even when the file does not exist yet.
fn same_file(a: &Path, b: &Path) -> bool {
    fn resolve(path: &Path) -> Option<PathBuf> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        Some(std::fs::canonicalize(parent).ok()?.join(path.file_name()?))
    }
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Run the `export` command
pub fn export(args: &ExportArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.record.store);
    let handle = open_session(&manager, &args.record.credentials)?;
    let bytes = manager.export_records(&handle)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| manager.export_file_name(&handle).into());
    let records_path = manager.config().records_path(handle.owner());

    let path = match export_target(&output, &records_path) {
        ExportTarget::Stdout => {
            std::io::stdout().write_all(&bytes)?;
            return Ok(());
        }
        ExportTarget::RecordFile(path) => {
            tracing::info!(path = %path.display(), "export target is the record file, nothing written");
            path
        }
        ExportTarget::File(path) => {
            write_atomic(&path, &bytes)?;
            path
        }
    };

    match format {
        OutputFormat::Human => println!(
            "Exported {} applications to {}",
            handle.records().len(),
            path.display()
        ),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": path.display().to_string(),
                "records": handle.records().len(),
                "bytes": bytes.len(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the `summary` command
pub fn summary(args: &RecordArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let manager = create_manager(&args.store);
    let handle = open_session(&manager, &args.credentials)?;
    let summary = manager.summarize_by_mode(&handle);

    match format {
        OutputFormat::Human => {
            if summary.is_empty() {
                println!("No applications recorded.");
            }
            for line in summary_lines(&summary, SUMMARY_BAR_WIDTH) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let value: serde_json::Map<String, serde_json::Value> = summary
                .iter()
                .map(|(mode, count)| (mode.to_string(), serde_json::Value::from(*count)))
                .collect();
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
