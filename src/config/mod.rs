use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    currency::{CurrencyCode, CurrencyFormat},
    errors::{ForecastError, Result},
    ledger::{MonthWindow, YearMonth},
};

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_HISTORY_MONTHS: u32 = 3;
const DEFAULT_FORECAST_MONTHS: u32 = 12;

/// User preferences that shape how forecasts are requested and displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default = "Config::default_history_months")]
    pub history_months: u32,
    #[serde(default = "Config::default_forecast_months")]
    pub forecast_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            history_months: DEFAULT_HISTORY_MONTHS,
            forecast_months: DEFAULT_FORECAST_MONTHS,
        }
    }
}

impl Config {
    pub fn default_history_months() -> u32 {
        DEFAULT_HISTORY_MONTHS
    }

    pub fn default_forecast_months() -> u32 {
        DEFAULT_FORECAST_MONTHS
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.currency.format()?;
        if self.forecast_months == 0 {
            return Err(ForecastError::Config(
                "forecast_months must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn currency_format(&self) -> Result<&'static CurrencyFormat> {
        self.currency.format()
    }

    /// The months before `anchor` shown as history.
    pub fn history_window(&self, anchor: YearMonth) -> MonthWindow {
        MonthWindow::trailing(anchor, self.history_months)
    }

    /// `anchor` and the months after it shown as forecast.
    pub fn forecast_window(&self, anchor: YearMonth) -> MonthWindow {
        MonthWindow::leading(anchor, self.forecast_months)
    }
}

/// Loads and stores [`Config`] as pretty-printed JSON at a caller-chosen path.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns defaults when no file exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Config::from_json(&data)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
