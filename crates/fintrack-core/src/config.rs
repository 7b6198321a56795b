//! Analytics configuration
//!
//! Config is loaded with a three-layer resolution:
//! 1. Explicit path (e.g. `--config` on the CLI)
//! 2. Override in data dir (~/.local/share/fintrack/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Every key is optional; missing keys fall back to [`AnalyticsConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/fintrack.toml");

/// Thresholds used by the dashboard analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Transactions with `|amount|` strictly above this are anomalies
    pub anomaly_threshold: f64,
    /// Length of the top-categories breakdown
    pub top_categories: usize,
    /// Number of most recent spending days in the trend
    pub trend_window_days: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: 300.0,
            top_categories: 5,
            trend_window_days: 30,
        }
    }
}

impl AnalyticsConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path if given. A missing explicit file is an error;
    /// a missing override file is not.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(p) => fs::read_to_string(p).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", p.display(), e))
            })?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(p) => {
                    debug!(path = %p.display(), "Loading config override");
                    fs::read_to_string(&p).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", p.display(), e))
                    })?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("fintrack").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    anomalies: Option<RawAnomalies>,
    dashboard: Option<RawDashboard>,
}

#[derive(Debug, Deserialize)]
struct RawAnomalies {
    threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDashboard {
    top_categories: Option<usize>,
    trend_window_days: Option<usize>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<AnalyticsConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AnalyticsConfig::default();

    if let Some(anomalies) = raw.anomalies {
        if let Some(threshold) = anomalies.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(Error::Config(format!(
                    "anomalies.threshold must be a non-negative number, got {}",
                    threshold
                )));
            }
            config.anomaly_threshold = threshold;
        }
    }

    if let Some(dashboard) = raw.dashboard {
        if let Some(n) = dashboard.top_categories {
            config.top_categories = n;
        }
        if let Some(days) = dashboard.trend_window_days {
            config.trend_window_days = days;
        }
    }

    Ok(config)
}
