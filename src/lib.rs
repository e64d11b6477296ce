#![doc(test(attr(deny(warnings))))]

//! Moomoolah Core projects monthly cash flow from a ledger of one-time and
//! recurring income and expense entries.
//!
//! ```
//! use chrono::NaiveDate;
//! use moomoolah_core::{
//!     core::ForecastService,
//!     ledger::{Entry, MonthWindow, Recurrence, YearMonth},
//! };
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let entries = vec![
//!     Entry::income("Salary", 300_000, "Job", Recurrence::monthly(start)),
//!     Entry::expense("Emergency", 10_000, "Emergency Fund", Recurrence::monthly(start)),
//! ];
//! let window = MonthWindow::range(
//!     YearMonth::new(2024, 1).unwrap(),
//!     YearMonth::new(2024, 3).unwrap(),
//! )
//! .unwrap();
//!
//! let forecast = ForecastService::project(&entries, &window).unwrap();
//! assert_eq!(forecast[2].state.accumulated_savings_total, 30_000);
//! ```

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use errors::{ForecastError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Moomoolah Core tracing initialized.");
    });
}
