use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::is_accumulating_category, month::YearMonth};
use crate::errors::{ForecastError, Result};

/// A single income or expense record, one-time or recurring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub description: String,
    /// Minor currency units (e.g. cents). Direction is carried by `kind`.
    pub amount: i64,
    pub kind: EntryKind,
    pub category: String,
    pub recurrence: Recurrence,
    /// Manual override of the category heuristic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accumulating: Option<bool>,
}

impl Entry {
    pub fn new(
        description: impl Into<String>,
        amount: i64,
        kind: EntryKind,
        category: impl Into<String>,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            recurrence,
            accumulating: None,
        }
    }

    pub fn income(
        description: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        recurrence: Recurrence,
    ) -> Self {
        Self::new(description, amount, EntryKind::Income, category, recurrence)
    }

    pub fn expense(
        description: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        recurrence: Recurrence,
    ) -> Self {
        Self::new(description, amount, EntryKind::Expense, category, recurrence)
    }

    pub fn with_accumulating(mut self, accumulating: bool) -> Self {
        self.accumulating = Some(accumulating);
        self
    }

    /// Whether this entry feeds a savings pool. A manual setting always beats
    /// the category-name heuristic.
    pub fn is_accumulating(&self) -> bool {
        self.accumulating
            .unwrap_or_else(|| is_accumulating_category(&self.category))
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount < 0 {
            return Err(ForecastError::Validation(format!(
                "entry `{}` has negative amount {}",
                self.description, self.amount
            )));
        }
        self.recurrence.validate().map_err(|reason| {
            ForecastError::Validation(format!("entry `{}` {}", self.description, reason))
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

/// The rule determining which months an entry contributes to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recurrence {
    OneTime {
        date: NaiveDate,
    },
    Monthly {
        start_date: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
        #[serde(default = "Recurrence::default_every")]
        every: u32,
    },
    Annual {
        start_date: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
    },
}

impl Recurrence {
    pub fn one_time(date: NaiveDate) -> Self {
        Recurrence::OneTime { date }
    }

    pub fn monthly(start_date: NaiveDate) -> Self {
        Recurrence::Monthly {
            start_date,
            end_date: None,
            every: 1,
        }
    }

    pub fn monthly_until(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Recurrence::Monthly {
            start_date,
            end_date: Some(end_date),
            every: 1,
        }
    }

    pub fn every_n_months(start_date: NaiveDate, every: u32) -> Self {
        Recurrence::Monthly {
            start_date,
            end_date: None,
            every,
        }
    }

    pub fn annual(start_date: NaiveDate) -> Self {
        Recurrence::Annual {
            start_date,
            end_date: None,
        }
    }

    pub fn default_every() -> u32 {
        1
    }

    pub fn start_month(&self) -> YearMonth {
        match self {
            Recurrence::OneTime { date } => YearMonth::from_date(*date),
            Recurrence::Monthly { start_date, .. } | Recurrence::Annual { start_date, .. } => {
                YearMonth::from_date(*start_date)
            }
        }
    }

    /// Last month the rule can contribute to, `None` when unbounded.
    pub fn end_month(&self) -> Option<YearMonth> {
        match self {
            Recurrence::OneTime { date } => Some(YearMonth::from_date(*date)),
            Recurrence::Monthly { end_date, .. } | Recurrence::Annual { end_date, .. } => {
                end_date.map(YearMonth::from_date)
            }
        }
    }

    pub fn label(&self) -> String {
        let base = match self {
            Recurrence::OneTime { date } => return format!("One time ({date})"),
            Recurrence::Monthly { every: 1, .. } => "Monthly".to_string(),
            Recurrence::Monthly { every, .. } => format!("Every {every} months"),
            Recurrence::Annual { .. } => "Yearly".to_string(),
        };
        match self.end_month() {
            Some(end) => format!("{base} until {end}"),
            None => base,
        }
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        match self {
            Recurrence::OneTime { .. } => Ok(()),
            Recurrence::Monthly {
                start_date,
                end_date,
                every,
            } => {
                if *every == 0 {
                    return Err("repeats every 0 months".into());
                }
                check_bounds(*start_date, *end_date)
            }
            Recurrence::Annual {
                start_date,
                end_date,
            } => check_bounds(*start_date, *end_date),
        }
    }
}

fn check_bounds(start: NaiveDate, end: Option<NaiveDate>) -> std::result::Result<(), String> {
    match end {
        Some(end) if end < start => Err(format!("ends on {end} before it starts on {start}")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn manual_override_beats_category_heuristic() {
        let entry = Entry::expense(
            "Rainy day",
            10_000,
            "Emergency Fund",
            Recurrence::monthly(date(2024, 1, 1)),
        );
        assert!(entry.is_accumulating());
        assert!(!entry.clone().with_accumulating(false).is_accumulating());

        let vacation = Entry::expense("Trip", 5_000, "Travel", Recurrence::monthly(date(2024, 1, 1)))
            .with_accumulating(true);
        assert!(vacation.is_accumulating());
    }

    #[test]
    fn rejects_negative_amounts() {
        let entry = Entry::income("Refund", -1, "Misc", Recurrence::one_time(date(2024, 1, 1)));
        assert!(matches!(
            entry.validate(),
            Err(ForecastError::Validation(message)) if message.contains("negative")
        ));
    }

    #[test]
    fn rejects_end_before_start() {
        let entry = Entry::expense(
            "Gym",
            4_000,
            "Health",
            Recurrence::monthly_until(date(2024, 5, 1), date(2024, 4, 30)),
        );
        assert!(entry.validate().is_err());

        let same_day = Entry::expense(
            "Gym",
            4_000,
            "Health",
            Recurrence::monthly_until(date(2024, 5, 1), date(2024, 5, 1)),
        );
        assert!(same_day.validate().is_ok());
    }

    #[test]
    fn rejects_zero_interval() {
        let entry = Entry::expense(
            "Internet",
            8_000,
            "Utilities",
            Recurrence::every_n_months(date(2024, 2, 5), 0),
        );
        assert!(entry.validate().is_err());
    }

    #[test]
    fn labels_describe_the_schedule() {
        assert_eq!(Recurrence::monthly(date(2024, 1, 1)).label(), "Monthly");
        assert_eq!(
            Recurrence::every_n_months(date(2024, 1, 1), 3).label(),
            "Every 3 months"
        );
        assert_eq!(
            Recurrence::monthly_until(date(2024, 1, 1), date(2024, 6, 30)).label(),
            "Monthly until 2024-06"
        );
        assert_eq!(Recurrence::annual(date(2024, 1, 1)).label(), "Yearly");
        assert_eq!(
            Recurrence::one_time(date(2024, 6, 15)).label(),
            "One time (2024-06-15)"
        );
    }

    #[test]
    fn monthly_every_defaults_to_one_when_missing() {
        let json = r#"{"Monthly":{"start_date":"2024-01-01"}}"#;
        let recurrence: Recurrence = serde_json::from_str(json).unwrap();
        assert_eq!(recurrence, Recurrence::monthly(date(2024, 1, 1)));
    }
}
