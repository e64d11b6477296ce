//! Forecast engine: month summaries, savings accumulation, and detail views.
//!
//! Everything here is a pure function of the entries and window passed in.

pub mod report;
pub mod services;

pub use report::{AccumulationState, AnnotatedMonth, MonthSummary, RealizedEntry};
pub use services::{
    AccumulationService, CategoryTotals, DetailLine, DetailService, ForecastService, MonthDetail,
};
