use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::model::AlbedoRecord;

/// Number of site metadata rows NSRDB places above the column header row.
pub const NSRDB_METADATA_ROWS: usize = 2;
/// Suffix selecting export files inside the input directory.
pub const CSV_EXTENSION: &str = ".csv";
pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const ALBEDO_COLUMN: &str = "Surface Albedo";

/// Layout of the exported CSV files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Rows discarded before the column header row.
    pub skip_rows: usize,
    /// Case-sensitive file name suffix of the files to read.
    pub extension: String,
    pub year_column: String,
    pub month_column: String,
    pub albedo_column: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            skip_rows: NSRDB_METADATA_ROWS,
            extension: CSV_EXTENSION.to_string(),
            year_column: YEAR_COLUMN.to_string(),
            month_column: MONTH_COLUMN.to_string(),
            albedo_column: ALBEDO_COLUMN.to_string(),
        }
    }
}

/// Lists the files directly inside `dir` whose name ends with the configured
/// extension, sorted by path.
pub fn list_input_files(dir: &Path, options: &ReadOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if name.ends_with(options.extension.as_str()) {
            files.push(entry.path());
        } else {
            debug!(file = name, "skipping file without export extension");
        }
    }

    files.sort();
    Ok(files)
}

/// Reads every albedo measurement from one NSRDB export.
pub fn read_albedo_records(path: &Path, options: &ReadOptions) -> Result<Vec<AlbedoRecord>> {
    let file = File::open(path)?;
    parse_albedo_records(file, path, options)
}

/// Parses albedo measurements from `reader`. `source` is only used to label
/// errors.
///
/// Rows with an empty or `NaN` albedo cell are treated as missing
/// measurements and left out.
pub fn parse_albedo_records<R: Read>(
    reader: R,
    source: &Path,
    options: &ReadOptions,
) -> Result<Vec<AlbedoRecord>> {
    let read_error = |error: csv::Error| ToolError::ReadFile {
        path: source.to_path_buf(),
        source: error,
    };

    // Metadata rows carry a different field count than the data rows.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    for _ in 0..options.skip_rows {
        match records.next() {
            Some(row) => {
                row.map_err(read_error)?;
            }
            None => return Err(ToolError::MissingHeader(source.to_path_buf())),
        }
    }

    let header = match records.next() {
        Some(row) => row.map_err(read_error)?,
        None => return Err(ToolError::MissingHeader(source.to_path_buf())),
    };
    let columns = ColumnIndices::locate(&header, source, options)?;

    let mut parsed = Vec::new();
    let mut missing = 0usize;

    for row in records {
        let row = row.map_err(read_error)?;
        let cells = RowCells {
            row: &row,
            source,
        };

        let year = cells.parse::<i32>(columns.year, &options.year_column)?;
        let month = cells.parse::<u32>(columns.month, &options.month_column)?;
        if !(1..=12).contains(&month) {
            return Err(cells.invalid(&options.month_column, month.to_string()));
        }

        let raw_albedo = cells.get(columns.albedo, &options.albedo_column)?;
        if raw_albedo.is_empty() {
            missing += 1;
            continue;
        }
        let surface_albedo: f64 = raw_albedo
            .parse()
            .map_err(|_| cells.invalid(&options.albedo_column, raw_albedo.to_string()))?;
        if surface_albedo.is_nan() {
            missing += 1;
            continue;
        }

        parsed.push(AlbedoRecord {
            year,
            month,
            surface_albedo,
        });
    }

    debug!(
        path = %source.display(),
        record_count = parsed.len(),
        missing_count = missing,
        "parsed albedo export"
    );
    Ok(parsed)
}

struct ColumnIndices {
    year: usize,
    month: usize,
    albedo: usize,
}

impl ColumnIndices {
    fn locate(header: &StringRecord, source: &Path, options: &ReadOptions) -> Result<Self> {
        let find = |column: &str| {
            header
                .iter()
                .position(|name| name.trim() == column)
                .ok_or_else(|| ToolError::MissingColumn {
                    path: source.to_path_buf(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            year: find(&options.year_column)?,
            month: find(&options.month_column)?,
            albedo: find(&options.albedo_column)?,
        })
    }
}

struct RowCells<'a> {
    row: &'a StringRecord,
    source: &'a Path,
}

impl<'a> RowCells<'a> {
    fn line(&self) -> u64 {
        self.row.position().map_or(0, |position| position.line())
    }

    fn invalid(&self, column: &str, value: String) -> ToolError {
        ToolError::InvalidField {
            path: self.source.to_path_buf(),
            line: self.line(),
            column: column.to_string(),
            value,
        }
    }

    fn get(&self, index: usize, column: &str) -> Result<&'a str> {
        self.row
            .get(index)
            .map(str::trim)
            .ok_or_else(|| self.invalid(column, String::new()))
    }

    fn parse<T: std::str::FromStr>(&self, index: usize, column: &str) -> Result<T> {
        let raw = self.get(index, column)?;
        raw.parse().map_err(|_| self.invalid(column, raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Source,Location ID,City,State,Country,Latitude,Longitude,Time Zone,Elevation
NSRDB,123456,-,-,-,34.01,-81.03,-5,95
Year,Month,Day,Hour,Minute,Surface Albedo
2020,1,1,0,0,0.14
2020,1,1,0,30,0.16
2020,2,1,0,0,0.13
";

    fn parse(text: &str) -> Result<Vec<AlbedoRecord>> {
        parse_albedo_records(text.as_bytes(), Path::new("site.csv"), &ReadOptions::default())
    }

    #[test]
    fn skips_metadata_rows_and_reads_columns() {
        let records = parse(EXPORT).expect("export parsed");
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[1],
            AlbedoRecord {
                year: 2020,
                month: 1,
                surface_albedo: 0.16
            }
        );
        assert_eq!(records[2].month, 2);
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let text = "meta\nmeta\nSurface Albedo,Month,Year\n0.5,6,2019\n";
        let records = parse(text).expect("export parsed");
        assert_eq!(
            records,
            vec![AlbedoRecord {
                year: 2019,
                month: 6,
                surface_albedo: 0.5
            }]
        );
    }

    #[test]
    fn empty_albedo_cells_are_skipped() {
        let text = "a\nb\nYear,Month,Surface Albedo\n2021,3,\n2021,3,NaN\n2021,3,0.3\n";
        let records = parse(text).expect("export parsed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].surface_albedo, 0.3);
    }

    #[test]
    fn missing_column_is_reported() {
        let text = "a\nb\nYear,Month,GHI\n2021,3,400\n";
        match parse(text) {
            Err(ToolError::MissingColumn { column, .. }) => assert_eq!(column, ALBEDO_COLUMN),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn truncated_file_has_no_header() {
        assert!(matches!(parse("only one row\n"), Err(ToolError::MissingHeader(_))));
    }

    #[test]
    fn out_of_range_month_is_invalid() {
        let text = "a\nb\nYear,Month,Surface Albedo\n2021,13,0.2\n";
        match parse(text) {
            Err(ToolError::InvalidField { column, value, line, .. }) => {
                assert_eq!(column, MONTH_COLUMN);
                assert_eq!(value, "13");
                assert_eq!(line, 4);
            }
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_albedo_is_invalid() {
        let text = "a\nb\nYear,Month,Surface Albedo\n2021,2,snow\n";
        assert!(matches!(parse(text), Err(ToolError::InvalidField { .. })));
    }

    #[test]
    fn custom_skip_rows() {
        let options = ReadOptions {
            skip_rows: 0,
            ..ReadOptions::default()
        };
        let text = "Year,Month,Surface Albedo\n2022,8,0.21\n";
        let records = parse_albedo_records(text.as_bytes(), Path::new("x.csv"), &options)
            .expect("export parsed");
        assert_eq!(records.len(), 1);
    }
}
