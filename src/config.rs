use std::env;
use std::path::PathBuf;

use serde::Serialize;

/// Classification cut-offs for the insight metrics.
///
/// All comparisons are inclusive: a savings rate exactly at
/// `savings_rate_min` or an expense ratio exactly at `expense_ratio_max`
/// classifies as positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// Minimum savings rate (percent) for a positive classification.
    pub savings_rate_min: f64,
    /// Maximum expense ratio (percent) for a positive classification.
    pub expense_ratio_max: f64,
    /// Minimum leftover amount for a positive classification.
    pub leftover_min: f64,
}

pub const DEFAULT_SAVINGS_RATE_MIN: f64 = 20.0;
pub const DEFAULT_EXPENSE_RATIO_MAX: f64 = 60.0;
pub const DEFAULT_LEFTOVER_MIN: f64 = 0.0;

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            savings_rate_min: DEFAULT_SAVINGS_RATE_MIN,
            expense_ratio_max: DEFAULT_EXPENSE_RATIO_MAX,
            leftover_min: DEFAULT_LEFTOVER_MIN,
        }
    }
}

/// How amounts are rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySettings {
    pub currency: String,
    pub locale: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: "INR".into(),
            locale: "en-IN".into(),
        }
    }
}

/// Everything the metric engine needs besides the input itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerConfig {
    pub thresholds: Thresholds,
    pub display: DisplaySettings,
}

/// Longest accepted session idle timeout: one year.
pub const MAX_SESSION_IDLE_MINUTES: i64 = 525_600;

/// Parse an idle timeout in minutes, rejecting values outside
/// `1..=MAX_SESSION_IDLE_MINUTES`.
fn parse_idle_minutes(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|m| m.trim().parse::<i64>().ok())
        .filter(|m| (1..=MAX_SESSION_IDLE_MINUTES).contains(m))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_path: PathBuf,
    /// Analyzer sessions untouched for longer than this are dropped.
    pub session_idle_minutes: i64,
    pub analyzer: AnalyzerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 7070,
            static_path: PathBuf::from("static"),
            session_idle_minutes: 60,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let display = DisplaySettings {
            currency: env::var("FINANCEAI_CURRENCY")
                .unwrap_or_else(|_| defaults.analyzer.display.currency.clone()),
            locale: env::var("FINANCEAI_LOCALE")
                .unwrap_or_else(|_| defaults.analyzer.display.locale.clone()),
        };

        Self {
            host: env::var("FINANCEAI_HOST").unwrap_or(defaults.host),
            port: env::var("FINANCEAI_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            static_path: env::var("FINANCEAI_STATIC_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_path),
            session_idle_minutes: parse_idle_minutes(
                env::var("FINANCEAI_SESSION_IDLE_MINUTES").ok().as_deref(),
            )
            .unwrap_or(defaults.session_idle_minutes),
            analyzer: AnalyzerConfig {
                thresholds: Thresholds::default(),
                display,
            },
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
