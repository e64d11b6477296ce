#![allow(dead_code)]

use chrono::NaiveDate;
use moomoolah_core::ledger::{Entry, MonthWindow, Recurrence, YearMonth};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).expect("valid month")
}

/// Inclusive window between two months.
pub fn window(from: (i32, u32), to: (i32, u32)) -> MonthWindow {
    MonthWindow::range(ym(from.0, from.1), ym(to.0, to.1)).expect("valid window")
}

/// Household ledger used by the detail view tests: two income sources and three
/// expenses, all monthly from January 2024.
pub fn household_entries() -> Vec<Entry> {
    let monthly = |day| Recurrence::monthly(date(2024, 1, day));
    vec![
        Entry::income("Salary", 300_000, "Job", monthly(1)),
        Entry::income("Freelance", 50_000, "Side Work", monthly(15)),
        Entry::expense("Rent", 120_000, "Housing", monthly(5)),
        Entry::expense("Groceries", 40_000, "Food", monthly(10)),
        Entry::expense("Phone", 20_000, "Utilities", monthly(20)),
    ]
}
