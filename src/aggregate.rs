//! Grouped averaging of albedo measurements.
//!
//! Aggregation happens in two stages: measurements of a single export are
//! averaged per (year, month), then the per-year rows of every export are
//! averaged per month. Each year therefore carries the same weight in the
//! final value no matter how many intervals it was sampled at.

use std::collections::BTreeMap;

use crate::model::{AlbedoRecord, MonthlyAlbedo, MonthlyAlbedoTable, YearMonthAverage};

#[derive(Debug, Default, Clone, Copy)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Averages measurements per (year, month) key, ordered by year then month.
pub fn per_year_monthly_means(records: &[AlbedoRecord]) -> Vec<YearMonthAverage> {
    let mut groups: BTreeMap<(i32, u32), MeanAccumulator> = BTreeMap::new();

    for record in records {
        groups
            .entry((record.year, record.month))
            .or_default()
            .push(record.surface_albedo);
    }

    groups
        .into_iter()
        .map(|((year, month), accumulator)| YearMonthAverage {
            year,
            month,
            surface_albedo: accumulator.mean(),
        })
        .collect()
}

/// Averages per-year rows by month.
///
/// Rows are not deduplicated: two rows for the same (year, month), e.g. from
/// overlapping exports, both count towards that month's mean.
pub fn average_across_years(per_year: &[YearMonthAverage]) -> MonthlyAlbedoTable {
    let mut groups: BTreeMap<u32, MeanAccumulator> = BTreeMap::new();

    for row in per_year {
        groups
            .entry(row.month)
            .or_default()
            .push(row.surface_albedo);
    }

    let rows = groups
        .into_iter()
        .map(|(month, accumulator)| MonthlyAlbedo {
            month,
            surface_albedo: accumulator.mean(),
        })
        .collect();
    MonthlyAlbedoTable::new(rows)
}
