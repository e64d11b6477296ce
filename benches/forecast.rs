use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use moomoolah_core::{
    core::{DetailService, ForecastService},
    ledger::{Entry, MonthWindow, Recurrence, YearMonth},
};

fn build_sample_entries(count: usize) -> Vec<Entry> {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let categories = ["Groceries", "Housing", "Emergency Fund", "Utilities", "Savings"];

    (0..count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let recurrence = match idx % 4 {
                0 => Recurrence::one_time(date),
                1 => Recurrence::every_n_months(date, 2),
                2 => Recurrence::annual(date),
                _ => Recurrence::monthly(date),
            };
            let category = categories[idx % categories.len()];
            let amount = 1_000 + (idx % 100) as i64 * 25;
            if idx % 10 == 0 {
                Entry::income(format!("Income {idx}"), amount * 20, "Job", recurrence)
            } else {
                Entry::expense(format!("Expense {idx}"), amount, category, recurrence)
            }
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let entries = build_sample_entries(black_box(2_000));
    let anchor = YearMonth::new(2024, 6).unwrap();
    let window = MonthWindow::range(anchor.offset(-3), anchor.offset(11)).unwrap();

    c.bench_function("project_2k_entries_15_months", |b| {
        b.iter(|| {
            let forecast = ForecastService::project(&entries, &window).expect("project");
            black_box(forecast);
        })
    });

    let forecast = ForecastService::project(&entries, &window).expect("seed");
    c.bench_function("detail_view_2k_entries", |b| {
        b.iter(|| {
            let detail = DetailService::detail_for_month(&forecast, anchor).expect("detail");
            black_box(detail);
        })
    });
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
