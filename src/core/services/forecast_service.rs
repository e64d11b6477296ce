//! Forecasting helpers that expand ledger entries over an explicit month window.

use std::collections::HashSet;

use tracing::{debug, error};

use crate::{
    core::report::{AnnotatedMonth, MonthSummary},
    errors::{ForecastError, Result},
    ledger::{recurring::contributes, Entry, MonthWindow, YearMonth},
};

use super::AccumulationService;

pub struct ForecastService;

impl ForecastService {
    /// Produces one summary per month of `window`, oldest first.
    ///
    /// Entries are expected to have passed store validation; an invalid entry is
    /// reported as a data-integrity error instead of being skipped.
    pub fn build(entries: &[Entry], window: &MonthWindow) -> Result<Vec<MonthSummary>> {
        debug!(
            months = window.len(),
            entries = entries.len(),
            "building forecast"
        );
        ensure_integrity(entries)?;
        window
            .iter()
            .map(|month| summarize(entries, month))
            .collect()
    }

    /// Summary of a single month.
    pub fn summarize_month(entries: &[Entry], month: YearMonth) -> Result<MonthSummary> {
        ensure_integrity(entries)?;
        summarize(entries, month)
    }

    /// Builds the window and folds the accumulation state through it.
    pub fn project(entries: &[Entry], window: &MonthWindow) -> Result<Vec<AnnotatedMonth>> {
        let summaries = Self::build(entries, window)?;
        AccumulationService::annotate(summaries)
    }
}

fn summarize(entries: &[Entry], month: YearMonth) -> Result<MonthSummary> {
    let mut summary = MonthSummary::empty(month);
    for entry in entries {
        if let Some(amount) = contributes(entry, month) {
            summary.record(entry, amount)?;
        }
    }
    Ok(summary)
}

fn ensure_integrity(entries: &[Entry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if let Err(err) = entry.validate() {
            error!(id = %entry.id, %err, "invalid entry reached the forecast");
            return Err(ForecastError::DataIntegrity(err.to_string()));
        }
        if !seen.insert(entry.id) {
            error!(id = %entry.id, "duplicate entry id reached the forecast");
            return Err(ForecastError::DataIntegrity(format!(
                "entry id {} appears more than once",
                entry.id
            )));
        }
    }
    Ok(())
}
