use std::path::Path;

use rust_xlsxwriter::{Table, Workbook};

use crate::error::Result;
use crate::io::nsrdb_read::{ALBEDO_COLUMN, MONTH_COLUMN};
use crate::model::MonthlyAlbedoTable;

/// Name of the worksheet holding the monthly averages.
pub const MONTHLY_SHEET: &str = "Monthly Albedo";

/// Writes the table to a workbook with a single filtered worksheet.
pub fn write_workbook(path: &Path, table: &MonthlyAlbedoTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(MONTHLY_SHEET)?;

    worksheet.write_string(0, 0, MONTH_COLUMN)?;
    worksheet.write_string(0, 1, ALBEDO_COLUMN)?;

    for (row_idx, row) in table.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        worksheet.write_number(excel_row, 0, row.month)?;
        worksheet.write_number(excel_row, 1, row.surface_albedo)?;
    }

    if !table.is_empty() {
        let mut excel_table = Table::new();
        excel_table.set_autofilter(true);
        worksheet.add_table(0, 0, table.len() as u32, 1, &excel_table)?;
    }

    workbook.save(path)?;
    Ok(())
}
