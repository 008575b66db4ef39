use std::path::Path;

use tracing::{debug, info, instrument};

use crate::aggregate::{average_across_years, per_year_monthly_means};
use crate::error::{Result, ToolError};
use crate::io::nsrdb_read::{self, ReadOptions};
use crate::io::{ExportFormat, excel_write, table_write};
use crate::model::MonthlyAlbedoTable;

/// Computes the monthly average surface albedo of every NSRDB export in
/// `folder`, using the standard NSRDB file layout.
///
/// See [`calculate_monthly_avg_albedo_with`] for the aggregation rules.
pub fn calculate_monthly_avg_albedo(folder: &Path) -> Result<MonthlyAlbedoTable> {
    calculate_monthly_avg_albedo_with(folder, &ReadOptions::default())
}

/// Computes the monthly average surface albedo of the exports in `folder`.
///
/// Each file is averaged per (year, month); the per-year rows of all files are
/// then averaged per month. Files are read in path order and nothing is
/// written. Fails with [`ToolError::NoInputFiles`] when no file matches and
/// propagates the first read or parse failure.
#[instrument(level = "info", skip_all, fields(input = %folder.display()))]
pub fn calculate_monthly_avg_albedo_with(
    folder: &Path,
    options: &ReadOptions,
) -> Result<MonthlyAlbedoTable> {
    let files = nsrdb_read::list_input_files(folder, options)?;
    if files.is_empty() {
        return Err(ToolError::NoInputFiles(folder.to_path_buf()));
    }
    info!(file_count = files.len(), "found albedo exports");

    let mut all_yearly_data = Vec::new();
    for path in &files {
        let records = nsrdb_read::read_albedo_records(path, options)?;
        let monthly = per_year_monthly_means(&records);
        debug!(
            path = %path.display(),
            record_count = records.len(),
            group_count = monthly.len(),
            "averaged export by year and month"
        );
        all_yearly_data.extend(monthly);
    }

    let table = average_across_years(&all_yearly_data);
    info!(month_count = table.len(), "computed monthly albedo averages");
    Ok(table)
}

/// Persists the monthly table in the requested format.
#[instrument(
    level = "info",
    skip_all,
    fields(output = %output.display(), ?format)
)]
pub fn write_table(output: &Path, table: &MonthlyAlbedoTable, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => table_write::write_csv(output, table),
        ExportFormat::Json => table_write::write_json(output, table),
        ExportFormat::Excel => excel_write::write_workbook(output, table),
    }?;
    debug!(row_count = table.len(), "monthly table written");
    Ok(())
}
