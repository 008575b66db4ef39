pub mod excel_write;
pub mod nsrdb_read;
pub mod table_write;

use std::path::Path;

/// File formats the monthly table can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

/// Guesses the export format from the extension of `path`.
pub fn detect_format(path: &Path) -> Option<ExportFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "csv" => Some(ExportFormat::Csv),
        "json" => Some(ExportFormat::Json),
        "xlsx" => Some(ExportFormat::Excel),
        _ => None,
    }
}
