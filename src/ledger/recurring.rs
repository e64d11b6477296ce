//! Month-granular expansion of recurrence rules.

use chrono::Datelike;

use super::{
    entry::{Entry, Recurrence},
    month::YearMonth,
};

/// Returns the amount `entry` contributes to `month`, if any.
///
/// Only year and month are compared; the day of the month never matters and an
/// entry always contributes its full amount.
pub fn contributes(entry: &Entry, month: YearMonth) -> Option<i64> {
    occurs_in(&entry.recurrence, month).then_some(entry.amount)
}

/// Whether `recurrence` produces an occurrence in `month`.
pub fn occurs_in(recurrence: &Recurrence, month: YearMonth) -> bool {
    match recurrence {
        Recurrence::OneTime { date } => month.contains(*date),
        Recurrence::Monthly { every, .. } => {
            if !within_bounds(recurrence, month) {
                return false;
            }
            let elapsed = recurrence.start_month().months_until(month);
            *every <= 1 || i64::from(elapsed) % i64::from(*every) == 0
        }
        Recurrence::Annual { start_date, .. } => {
            within_bounds(recurrence, month) && month.month() == start_date.month()
        }
    }
}

fn within_bounds(recurrence: &Recurrence, month: YearMonth) -> bool {
    if month < recurrence.start_month() {
        return false;
    }
    match recurrence.end_month() {
        Some(end) => month <= end,
        None => true,
    }
}
