//! Application configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or `config.toml` in the data dir
//!    (~/.local/share/youthfin/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::goals::DEFAULT_NEW_GOAL_REWARD;
use crate::onboarding::DEFAULT_CONSENT_AGE;
use crate::profile::ParentSettings;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/youthfin.toml");

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Applicants younger than this need parental consent
    pub consent_age: i32,
    /// Initial values of the parent settings form
    pub parent_defaults: ParentSettings,
    /// Reward label for goals created through the form
    pub new_goal_reward: String,
    /// CSV file with transaction history; demo data when unset
    pub transactions_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            consent_age: DEFAULT_CONSENT_AGE,
            parent_defaults: ParentSettings {
                allowance_amount: 10.0,
                spending_limit: 50.0,
            },
            new_goal_reward: DEFAULT_NEW_GOAL_REWARD.to_string(),
            transactions_file: None,
        }
    }
}

impl AppConfig {
    /// Load from `explicit` if given, else from the data dir, else defaults
    pub fn load(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            debug!("Loaded config from {}", path.display());
            return Self::from_toml(&content);
        }

        let override_path = data_dir.join(CONFIG_FILE);
        if override_path.exists() {
            let content = fs::read_to_string(&override_path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", override_path.display(), e))
            })?;
            debug!("Loaded config from {}", override_path.display());
            return Self::from_toml(&content);
        }

        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(onboarding) = raw.onboarding {
            if let Some(age) = onboarding.consent_age {
                config.consent_age = age;
            }
        }

        if let Some(parent) = raw.parent {
            if let Some(allowance) = parent.default_allowance {
                config.parent_defaults.allowance_amount = allowance;
            }
            if let Some(limit) = parent.default_spending_limit {
                config.parent_defaults.spending_limit = limit;
            }
        }

        if let Some(goals) = raw.goals {
            if let Some(reward) = goals.new_goal_reward {
                config.new_goal_reward = reward;
            }
        }

        if let Some(data) = raw.data {
            config.transactions_file = data.transactions;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.consent_age < 0 {
            return Err(Error::Config("consent_age must not be negative".into()));
        }
        // NaN is valid TOML and must not slip through
        if !(self.parent_defaults.allowance_amount >= 0.0)
            || !(self.parent_defaults.spending_limit >= 0.0)
        {
            return Err(Error::Config("parent defaults must not be negative".into()));
        }
        Ok(())
    }
}

/// Default data directory (~/.local/share/youthfin on Linux)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("youthfin"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    onboarding: Option<RawOnboarding>,
    parent: Option<RawParent>,
    goals: Option<RawGoals>,
    data: Option<RawData>,
}

#[derive(Debug, Deserialize)]
struct RawOnboarding {
    consent_age: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct RawParent {
    default_allowance: Option<f64>,
    default_spending_limit: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawGoals {
    new_goal_reward: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawData {
    transactions: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_matches_builtin() {
        assert_eq!(AppConfig::from_toml(DEFAULT_CONFIG).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml("[onboarding]\nconsent_age = 18\n").unwrap();
        assert_eq!(config.consent_age, 18);
        assert_eq!(config.parent_defaults.spending_limit, 50.0);
        assert_eq!(config.new_goal_reward, "New Achiever!");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            AppConfig::from_toml("[onboarding\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(AppConfig::from_toml("[onboarding]\nconsent_age = -1\n").is_err());
        assert!(AppConfig::from_toml("[parent]\ndefault_spending_limit = -5.0\n").is_err());
    }

    #[test]
    fn test_nan_parent_defaults_rejected() {
        assert!(matches!(
            AppConfig::from_toml("[parent]\ndefault_allowance = nan\n"),
            Err(Error::Config(_))
        ));
        assert!(AppConfig::from_toml("[parent]\ndefault_spending_limit = nan\n").is_err());
    }

    #[test]
    fn test_load_resolution_order() {
        let dir = tempfile::tempdir().unwrap();
        // Nothing on disk: embedded defaults
        assert_eq!(
            AppConfig::load(None, dir.path()).unwrap(),
            AppConfig::default()
        );

        fs::write(dir.path().join(CONFIG_FILE), "[goals]\nnew_goal_reward = \"Star!\"\n").unwrap();
        assert_eq!(
            AppConfig::load(None, dir.path()).unwrap().new_goal_reward,
            "Star!"
        );

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[data]\ntransactions = \"tx.csv\"\n").unwrap();
        let config = AppConfig::load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.transactions_file, Some(PathBuf::from("tx.csv")));
        assert_eq!(config.new_goal_reward, "New Achiever!");
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing), dir.path()),
            Err(Error::Config(_))
        ));
    }
}
