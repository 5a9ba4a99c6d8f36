//! Centralized configuration for the rankctl workspace.
//!
//! Lives at `~/.rankctl/config.toml`; the `RANKCTL_CONFIG` environment
//! variable points somewhere else for tests and multi-profile setups.
//! Every section has sensible defaults, so a missing or partial file
//! never blocks the dashboard.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::selection::RetentionPolicy;
use crate::status::PlanTier;

#[cfg(feature = "rt")]
use crate::gateway::SimulatedDelays;

/// Top-level configuration for rankctl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub delays: DelayConfig,
    #[serde(default)]
    pub subscription: SubscriptionConfig,
}

/// Dashboard rendering knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval for the dashboard loop, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Whether the detail pane starts visible
    #[serde(default = "default_true")]
    pub show_detail_pane: bool,
}

/// Selection and filtering behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// What happens to selected-but-hidden rows when the filter changes
    #[serde(default)]
    pub selection_retention: RetentionPolicy,
}

/// How long simulated backend calls take, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(default = "default_submit_ms")]
    pub submit_ms: u64,
    #[serde(default = "default_tool_ms")]
    pub tool_ms: u64,
    #[serde(default = "default_moderate_ms")]
    pub moderate_ms: u64,
}

/// Which plan the local account is on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    #[serde(default)]
    pub tier: PlanTier,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_submit_ms() -> u64 {
    3000
}

fn default_tool_ms() -> u64 {
    2000
}

fn default_moderate_ms() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_detail_pane: true,
        }
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            submit_ms: default_submit_ms(),
            tool_ms: default_tool_ms(),
            moderate_ms: default_moderate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl DelayConfig {
    pub fn submit(&self) -> Duration {
        Duration::from_millis(self.submit_ms)
    }

    pub fn tool(&self) -> Duration {
        Duration::from_millis(self.tool_ms)
    }

    pub fn moderate(&self) -> Duration {
        Duration::from_millis(self.moderate_ms)
    }
}

#[cfg(feature = "rt")]
impl From<&DelayConfig> for SimulatedDelays {
    fn from(config: &DelayConfig) -> Self {
        Self {
            submit: config.submit(),
            tool: config.tool(),
            moderate: config.moderate(),
        }
    }
}

impl RankConfig {
    /// Load config from the config path.
    ///
    /// Fails hard with an actionable error if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            anyhow::bail!(
                "Config not found at {:?}\n\nRun: rankctl config init",
                config_path
            );
        }

        let content = fs::read_to_string(&config_path)
            .context(format!("Failed to read config file: {:?}", config_path))?;

        let config: Self = toml::from_str(&content)
            .context("Failed to parse config file (invalid TOML)")?;

        Ok(config)
    }

    /// Load config, falling back to defaults when there is none.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                debug!("using default config: {err:#}");
                Self::default()
            }
        }
    }

    /// Config file path: `$RANKCTL_CONFIG` or `~/.rankctl/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("RANKCTL_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rankctl/config.toml")
    }

    /// Save config to the config path, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml_str)
            .context(format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests mutate RANKCTL_CONFIG, which is process-global.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_match_documented_values() {
        let config = RankConfig::default();
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
        assert!(config.ui.show_detail_pane);
        assert_eq!(config.behavior.selection_retention, RetentionPolicy::Retain);
        assert_eq!(config.delays.submit(), Duration::from_millis(3000));
        assert_eq!(config.delays.tool(), Duration::from_millis(2000));
        assert_eq!(config.delays.moderate(), Duration::from_millis(1000));
        assert_eq!(config.subscription.tier, PlanTier::Free);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: RankConfig = toml::from_str(
            r#"
            [behavior]
            selection_retention = "prune"

            [subscription]
            tier = "premium"
            "#,
        )
        .unwrap();

        assert_eq!(config.behavior.selection_retention, RetentionPolicy::Prune);
        assert_eq!(config.subscription.tier, PlanTier::Premium);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.delays.submit_ms, 3000);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        env::set_var("RANKCTL_CONFIG", &path);

        let mut config = RankConfig::default();
        config.ui.tick_rate_ms = 250;
        config.subscription.tier = PlanTier::Basic;
        config.save().unwrap();

        let loaded = RankConfig::load().unwrap();
        env::remove_var("RANKCTL_CONFIG");

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_config_mentions_init_hint() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        env::set_var("RANKCTL_CONFIG", dir.path().join("nowhere.toml"));

        let err = RankConfig::load().unwrap_err();
        env::remove_var("RANKCTL_CONFIG");

        assert!(err.to_string().contains("rankctl config init"));
    }

    #[cfg(feature = "rt")]
    #[test]
    fn test_delay_config_converts_to_simulated_delays() {
        let config = DelayConfig {
            submit_ms: 1,
            tool_ms: 2,
            moderate_ms: 3,
        };
        let delays = SimulatedDelays::from(&config);
        assert_eq!(delays.submit, Duration::from_millis(1));
        assert_eq!(delays.tool, Duration::from_millis(2));
        assert_eq!(delays.moderate, Duration::from_millis(3));
    }
}
