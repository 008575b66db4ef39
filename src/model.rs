use serde::{Deserialize, Serialize};

/// Albedo assumed for a month that has no measurements.
pub const DEFAULT_SURFACE_ALBEDO: f64 = 0.2;

/// A single interval measurement taken from an NSRDB export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbedoRecord {
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Unitless reflectance. Values are expected in `[0, 1]` but not checked.
    pub surface_albedo: f64,
}

/// Mean albedo of one calendar month within one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearMonthAverage {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Surface Albedo")]
    pub surface_albedo: f64,
}

/// Mean albedo of one calendar month across every year present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAlbedo {
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Surface Albedo")]
    pub surface_albedo: f64,
}

/// The aggregated result: at most one row per month, in ascending month order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyAlbedoTable {
    pub rows: Vec<MonthlyAlbedo>,
}

impl MonthlyAlbedoTable {
    pub fn new(rows: Vec<MonthlyAlbedo>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthlyAlbedo> {
        self.rows.iter()
    }

    /// Returns the averaged albedo for `month`, if that month had data.
    pub fn albedo_for_month(&self, month: u32) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.month == month)
            .map(|row| row.surface_albedo)
    }

    /// Like [`albedo_for_month`](Self::albedo_for_month) but falls back to
    /// [`DEFAULT_SURFACE_ALBEDO`] for months without data.
    pub fn albedo_for_month_or_default(&self, month: u32) -> f64 {
        self.albedo_for_month(month).unwrap_or(DEFAULT_SURFACE_ALBEDO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: u32, surface_albedo: f64) -> MonthlyAlbedo {
        MonthlyAlbedo {
            month,
            surface_albedo,
        }
    }

    fn table() -> MonthlyAlbedoTable {
        MonthlyAlbedoTable::new(vec![row(1, 0.35), row(7, 0.18)])
    }

    #[test]
    fn lookup_finds_present_month() {
        assert_eq!(table().albedo_for_month(7), Some(0.18));
        assert_eq!(table().albedo_for_month(2), None);
    }

    #[test]
    fn lookup_falls_back_to_default() {
        let table = table();
        assert_eq!(table.albedo_for_month_or_default(1), 0.35);
        assert_eq!(table.albedo_for_month_or_default(12), DEFAULT_SURFACE_ALBEDO);
    }

    #[test]
    fn serializes_with_export_column_names() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"Month": 1, "Surface Albedo": 0.35},
                {"Month": 7, "Surface Albedo": 0.18}
            ])
        );
    }
}
