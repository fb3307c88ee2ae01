//! Reading the header row of a target template.

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use clinic_ingest::{detect_delimiter, read_export, split_fields, split_logical_lines};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads the header cells of a template file.
///
/// Spreadsheets are read from the first row of their first sheet; anything
/// else is read as delimited text. Empty cells come back as empty strings.
pub fn read_template_header(path: &Path) -> Result<Vec<String>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let cells = if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        read_sheet_header(path)?
    } else {
        read_text_header(path)?
    };
    debug!(
        path = %path.display(),
        cells = cells.len(),
        "read template header"
    );
    Ok(cells)
}

fn read_sheet_header(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("open template {}", path.display()))?;
    let sheet_names = workbook.sheet_names();
    let Some(first) = sheet_names.first() else {
        bail!("template {} has no sheets", path.display());
    };
    let range = workbook
        .worksheet_range(first)
        .with_context(|| format!("read sheet '{first}' of {}", path.display()))?;
    let Some(row) = range.rows().next() else {
        return Ok(Vec::new());
    };
    Ok(row.iter().map(cell_text).collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn read_text_header(path: &Path) -> Result<Vec<String>> {
    let decoded =
        read_export(path).with_context(|| format!("read template {}", path.display()))?;
    let text = decoded.text.strip_prefix('\u{feff}').unwrap_or(&decoded.text);
    let lines = split_logical_lines(text);
    let Some(header) = lines.lines.iter().find(|line| !line.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    Ok(split_fields(header, detect_delimiter(header)))
}
