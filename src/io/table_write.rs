use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::model::MonthlyAlbedoTable;

/// Writes the table as CSV with a `Month,Surface Albedo` header row.
pub fn write_csv(path: &Path, table: &MonthlyAlbedoTable) -> Result<()> {
    write_csv_to(File::create(path)?, table)
}

/// Writes the table as CSV to any writer, e.g. standard output.
pub fn write_csv_to<W: Write>(writer: W, table: &MonthlyAlbedoTable) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in table.iter() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the table as a pretty-printed JSON array of row objects.
pub fn write_json(path: &Path, table: &MonthlyAlbedoTable) -> Result<()> {
    let json_string = serde_json::to_string_pretty(table)?;
    fs::write(path, json_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MonthlyAlbedo;

    #[test]
    fn csv_has_header_and_rows() {
        let table = MonthlyAlbedoTable::new(vec![
            MonthlyAlbedo {
                month: 1,
                surface_albedo: 0.25,
            },
            MonthlyAlbedo {
                month: 2,
                surface_albedo: 0.5,
            },
        ]);

        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &table).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Month,Surface Albedo\n1,0.25\n2,0.5\n");
    }
}
