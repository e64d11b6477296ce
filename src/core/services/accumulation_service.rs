use tracing::{debug, error};

use crate::{
    core::report::{AccumulationState, AnnotatedMonth, MonthSummary},
    errors::{ForecastError, Result},
    ledger::{EntryKind, YearMonth},
};

pub struct AccumulationService;

impl AccumulationService {
    /// Folds the savings pool through `summaries`, which must be in strictly
    /// chronological order. Running totals start at zero at the first month.
    ///
    /// Accumulating expenses still count against their month's expense total;
    /// they are additionally tracked as money set aside.
    pub fn annotate<I>(summaries: I) -> Result<Vec<AnnotatedMonth>>
    where
        I: IntoIterator<Item = MonthSummary>,
    {
        let mut state = AccumulationState::default();
        let mut previous: Option<YearMonth> = None;
        let mut annotated = Vec::new();

        for summary in summaries {
            if let Some(prev) = previous {
                if summary.month <= prev {
                    error!(month = %summary.month, previous = %prev, "summaries out of order");
                    return Err(ForecastError::DataIntegrity(format!(
                        "month {} follows {} in accumulation input",
                        summary.month, prev
                    )));
                }
            }
            previous = Some(summary.month);

            fold_month(&mut state, &summary)?;
            annotated.push(AnnotatedMonth {
                summary,
                state: state.clone(),
            });
        }

        debug!(
            months = annotated.len(),
            savings = state.accumulated_savings_total,
            "annotated forecast"
        );
        Ok(annotated)
    }
}

fn fold_month(state: &mut AccumulationState, summary: &MonthSummary) -> Result<()> {
    let overflow =
        || ForecastError::DataIntegrity(format!("accumulation overflow in {}", summary.month));

    state.cumulative_income = state
        .cumulative_income
        .checked_add(summary.total_income)
        .ok_or_else(overflow)?;

    for realized in summary.entries_of(EntryKind::Expense) {
        if realized.entry.is_accumulating() {
            let pool = state
                .per_category_running_total
                .entry(realized.entry.category.clone())
                .or_insert(0);
            *pool = pool.checked_add(realized.amount).ok_or_else(overflow)?;
        } else {
            state.cumulative_non_accumulating_expense = state
                .cumulative_non_accumulating_expense
                .checked_add(realized.amount)
                .ok_or_else(overflow)?;
        }
    }

    state.accumulated_savings_total = state
        .per_category_running_total
        .values()
        .try_fold(0i64, |total, value| total.checked_add(*value))
        .ok_or_else(overflow)?;
    state.available_balance = state
        .cumulative_income
        .checked_sub(state.cumulative_non_accumulating_expense)
        .and_then(|balance| balance.checked_add(state.accumulated_savings_total))
        .ok_or_else(overflow)?;
    Ok(())
}
