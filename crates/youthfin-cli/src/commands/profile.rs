//! Profile and parental hub commands (profile, settings, controls)

use anyhow::{Context, Result};
use youthfin_core::{
    profile::Theme, AppConfig, Error, ParentSettingsForm, ParentalControls, YouthProfileForm,
};

use super::print_field_errors;

/// Parse `ID=on|off` into a control id and state
pub fn parse_control_setting(s: &str) -> Result<(&str, bool)> {
    let (id, state) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected ID=on|off, got '{}'", s))?;
    let enabled = match state.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        other => anyhow::bail!("Unknown state '{}' for {}, use on or off", other, id),
    };
    Ok((id.trim(), enabled))
}

pub fn cmd_controls(settings: &[String]) -> Result<()> {
    let mut controls = ParentalControls::default();
    for setting in settings {
        let (id, enabled) = parse_control_setting(setting)?;
        controls.toggle(id, enabled)?;
    }

    println!();
    println!("🔐 Parental Controls");
    println!("   ─────────────────────────────────────────────────────────────");
    for control in controls.iter() {
        let state = if control.enabled { "ON " } else { "OFF" };
        let lock = if control.locked { " 🔒" } else { "" };
        println!("   [{}] {}{}", state, control.label, lock);
        println!("         {} ({})", control.description, control.id);
    }

    Ok(())
}

pub fn cmd_settings(config: &AppConfig, allowance: Option<f64>, limit: Option<f64>) -> Result<()> {
    // Unset flags keep the form's initial values
    let form = ParentSettingsForm {
        allowance_amount: Some(allowance.unwrap_or(config.parent_defaults.allowance_amount)),
        spending_limit: Some(limit.unwrap_or(config.parent_defaults.spending_limit)),
    };

    match form.validate() {
        Ok(settings) => {
            println!("✅ Parent settings saved:");
            println!("   Allowance:      ${:.2}", settings.allowance_amount);
            println!("   Spending limit: ${:.2}", settings.spending_limit);
            Ok(())
        }
        Err(errors) => {
            println!("Settings not saved:");
            print_field_errors(&errors);
            Err(Error::from(errors)).context("Invalid parent settings")
        }
    }
}

pub fn cmd_profile(
    name: &str,
    email: &str,
    phone: Option<String>,
    theme: Option<&str>,
) -> Result<()> {
    let theme = theme
        .map(|t| t.parse::<Theme>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    let form = YouthProfileForm {
        full_name: name.to_string(),
        email: email.to_string(),
        phone,
        theme,
    };

    match form.validate() {
        Ok(profile) => {
            println!("✅ Profile updated:");
            println!("   Name:  {}", profile.full_name);
            println!("   Email: {}", profile.email);
            if let Some(phone) = &profile.phone {
                println!("   Phone: {}", phone);
            }
            println!("   Theme: {}", profile.theme);
            Ok(())
        }
        Err(errors) => {
            println!("Profile not updated:");
            print_field_errors(&errors);
            Err(Error::from(errors)).context("Invalid profile")
        }
    }
}
