//! Youth profile and parental hub
//!
//! Two forms (the youth's own profile and the parent's allowance/limit
//! settings) and the set of parental control switches.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::validation::{is_valid_email, FieldErrors};

/// Allowance used when the settings form leaves it out
pub const DEFAULT_ALLOWANCE: f64 = 0.0;
/// Spending limit used when the settings form leaves it out
pub const DEFAULT_SPENDING_LIMIT: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw input of the "My Profile" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YouthProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouthProfile {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub theme: Theme,
}

impl YouthProfileForm {
    pub fn validate(&self) -> std::result::Result<YouthProfile, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_min_chars("fullName", &self.full_name, 2, "Name is too short");
        if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email address");
        }
        errors.into_result(YouthProfile {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            theme: self.theme.unwrap_or_default(),
        })
    }
}

/// Raw input of the parent's settings form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentSettingsForm {
    pub allowance_amount: Option<f64>,
    pub spending_limit: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParentSettings {
    pub allowance_amount: f64,
    pub spending_limit: f64,
}

impl ParentSettingsForm {
    pub fn validate(&self) -> std::result::Result<ParentSettings, FieldErrors> {
        let mut errors = FieldErrors::new();
        let allowance_amount = self.allowance_amount.unwrap_or(DEFAULT_ALLOWANCE);
        let spending_limit = self.spending_limit.unwrap_or(DEFAULT_SPENDING_LIMIT);

        if !(allowance_amount >= 0.0) {
            errors.push("allowanceAmount", "Allowance must be non-negative");
        }
        if !(spending_limit >= 0.0) {
            errors.push("spendingLimit", "Limit must be non-negative");
        }

        errors.into_result(ParentSettings {
            allowance_amount,
            spending_limit,
        })
    }
}

/// A switch the parent can flip for the youth's account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentalControl {
    pub id: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
    /// Shown but not yet switchable
    pub locked: bool,
}

impl ParentalControl {
    fn new(id: &str, label: &str, description: &str, enabled: bool, locked: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            enabled,
            locked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParentalControls(Vec<ParentalControl>);

impl Default for ParentalControls {
    fn default() -> Self {
        Self(vec![
            ParentalControl::new(
                "onlinePurchases",
                "Online Purchases",
                "Allow or block online spending.",
                true,
                false,
            ),
            ParentalControl::new(
                "atmWithdrawal",
                "ATM Withdrawals",
                "Enable or disable cash withdrawals.",
                false,
                false,
            ),
            ParentalControl::new(
                "specificMerchants",
                "Specific Merchant Blocks",
                "Block spending at certain stores (coming soon).",
                false,
                true,
            ),
        ])
    }
}

impl ParentalControls {
    pub fn iter(&self) -> impl Iterator<Item = &ParentalControl> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ParentalControl> {
        self.0.iter().find(|c| c.id == id)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).map(|c| c.enabled).unwrap_or(false)
    }

    /// Set a control on or off
    pub fn toggle(&mut self, id: &str, enabled: bool) -> Result<&ParentalControl> {
        let control = self
            .0
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("parental control '{}'", id)))?;
        if control.locked {
            return Err(Error::ControlLocked(control.label.clone()));
        }
        control.enabled = enabled;
        debug!("Control {} toggled to {}", id, enabled);
        Ok(control)
    }
}
