pub mod accumulation_service;
pub mod detail_service;
pub mod forecast_service;

pub use accumulation_service::AccumulationService;
pub use detail_service::{CategoryTotals, DetailLine, DetailService, MonthDetail};
pub use forecast_service::ForecastService;
