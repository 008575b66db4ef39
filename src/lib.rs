//! Core library for the albedo-tools command line application.
//!
//! The library turns a folder of yearly NSRDB surface-albedo exports into one
//! average albedo value per calendar month, for use as a timeseries input to
//! solar yield models. Readers and exporters live under [`io`], the typed
//! records in [`model`], the grouping stages in [`aggregate`], and the
//! orchestration entry points in [`pipeline`].

pub mod aggregate;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;

pub use error::{Result, ToolError};
pub use io::nsrdb_read::ReadOptions;
pub use model::{MonthlyAlbedo, MonthlyAlbedoTable};
pub use pipeline::{calculate_monthly_avg_albedo, calculate_monthly_avg_albedo_with};
