//! Derived, never-persisted forecast results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ForecastError, Result},
    ledger::{Entry, EntryKind, YearMonth},
};

/// An entry that matched a month, with the amount it contributes there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealizedEntry {
    pub entry: Entry,
    pub amount: i64,
}

impl RealizedEntry {
    pub fn kind(&self) -> EntryKind {
        self.entry.kind
    }

    pub fn category(&self) -> &str {
        &self.entry.category
    }
}

/// Aggregated income and expense totals for one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: YearMonth,
    pub realized_entries: Vec<RealizedEntry>,
    pub total_income: i64,
    pub total_expense: i64,
    pub net: i64,
}

impl MonthSummary {
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            realized_entries: Vec::new(),
            total_income: 0,
            total_expense: 0,
            net: 0,
        }
    }

    /// Records a realized entry and keeps the totals in step.
    pub(crate) fn record(&mut self, entry: &Entry, amount: i64) -> Result<()> {
        let month = self.month;
        let overflow = || ForecastError::DataIntegrity(format!("totals for {month} overflow"));
        match entry.kind {
            EntryKind::Income => {
                self.total_income = self.total_income.checked_add(amount).ok_or_else(overflow)?;
            }
            EntryKind::Expense => {
                self.total_expense = self.total_expense.checked_add(amount).ok_or_else(overflow)?;
            }
        }
        self.net = self
            .total_income
            .checked_sub(self.total_expense)
            .ok_or_else(overflow)?;
        self.realized_entries.push(RealizedEntry {
            entry: entry.clone(),
            amount,
        });
        Ok(())
    }

    pub fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &RealizedEntry> + '_ {
        self.realized_entries
            .iter()
            .filter(move |realized| realized.kind() == kind)
    }
}

impl AsRef<MonthSummary> for MonthSummary {
    fn as_ref(&self) -> &MonthSummary {
        self
    }
}

/// Running savings figures after a month has been folded in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccumulationState {
    pub per_category_running_total: BTreeMap<String, i64>,
    pub accumulated_savings_total: i64,
    pub cumulative_income: i64,
    pub cumulative_non_accumulating_expense: i64,
    /// Cumulative income minus cumulative ordinary expense, plus savings set aside.
    pub available_balance: i64,
}

/// A month summary paired with the accumulation state at the end of that month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedMonth {
    pub summary: MonthSummary,
    pub state: AccumulationState,
}

impl AnnotatedMonth {
    pub fn month(&self) -> YearMonth {
        self.summary.month
    }
}

impl AsRef<MonthSummary> for AnnotatedMonth {
    fn as_ref(&self) -> &MonthSummary {
        &self.summary
    }
}
