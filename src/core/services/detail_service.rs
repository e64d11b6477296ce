use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    core::report::MonthSummary,
    currency::{format_minor_units, CurrencyFormat},
    errors::{ForecastError, Result},
    ledger::{EntryKind, YearMonth},
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotals {
    pub income_total: i64,
    pub expense_total: i64,
}

/// One realized entry as shown in the month detail list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailLine {
    pub entry_id: Uuid,
    pub description: String,
    pub category: String,
    pub amount: i64,
    pub kind: EntryKind,
}

impl DetailLine {
    /// Expenses render as negative amounts, income as positive.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Read-only breakdown of a single month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthDetail {
    pub month: YearMonth,
    pub by_category: BTreeMap<String, CategoryTotals>,
    pub by_entry: Vec<DetailLine>,
    pub total_income: i64,
    pub total_expense: i64,
    pub net: i64,
}

impl MonthDetail {
    pub fn title(&self) -> String {
        self.month.label()
    }

    pub fn totals_line(&self, format: &CurrencyFormat) -> String {
        format!(
            "Total Income: {} | Total Expenses: {} | Balance: {}",
            format_minor_units(self.total_income, format),
            format_minor_units(self.total_expense, format),
            format_minor_units(self.net, format)
        )
    }
}

pub struct DetailService;

impl DetailService {
    pub fn detail(summary: &MonthSummary) -> MonthDetail {
        let mut by_category: BTreeMap<String, CategoryTotals> = BTreeMap::new();
        let mut by_entry = Vec::with_capacity(summary.realized_entries.len());

        for realized in &summary.realized_entries {
            let totals = by_category
                .entry(realized.entry.category.clone())
                .or_default();
            match realized.kind() {
                EntryKind::Income => totals.income_total += realized.amount,
                EntryKind::Expense => totals.expense_total += realized.amount,
            }
            by_entry.push(DetailLine {
                entry_id: realized.entry.id,
                description: realized.entry.description.clone(),
                category: realized.entry.category.clone(),
                amount: realized.amount,
                kind: realized.kind(),
            });
        }

        by_entry.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| a.description.cmp(&b.description))
                .then_with(|| a.entry_id.cmp(&b.entry_id))
        });

        MonthDetail {
            month: summary.month,
            by_category,
            by_entry,
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            net: summary.net,
        }
    }

    /// Looks `month` up in a previously computed forecast.
    pub fn detail_for_month<S>(forecast: &[S], month: YearMonth) -> Result<MonthDetail>
    where
        S: AsRef<MonthSummary>,
    {
        forecast
            .iter()
            .map(<S as AsRef<MonthSummary>>::as_ref)
            .find(|summary| summary.month == month)
            .map(Self::detail)
            .ok_or(ForecastError::MonthNotFound(month))
    }
}
