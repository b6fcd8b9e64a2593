//! Onboarding command: drives the wizard from an answers file

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;
use youthfin_core::{
    onboarding::StepStatus, AppConfig, Error, FieldValues, OnboardingWizard, SessionStore,
    Step, Transition,
};

use super::print_field_errors;

/// Read per-step answers from TOML, one table per step
pub fn load_answers(path: &Path) -> Result<HashMap<Step, FieldValues>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    parse_answers(&content)
}

pub fn parse_answers(content: &str) -> Result<HashMap<Step, FieldValues>> {
    let tables: BTreeMap<String, FieldValues> =
        toml::from_str(content).context("Invalid answers TOML")?;

    tables
        .into_iter()
        .map(|(key, values)| {
            let step: Step = key.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok((step, values))
        })
        .collect()
}

/// Feed answers to the wizard until it completes or pauses for consent.
///
/// Returns `true` when the Welcome step was reached.
pub fn run_wizard(
    wizard: &mut OnboardingWizard,
    answers: &HashMap<Step, FieldValues>,
    today: NaiveDate,
    defer_consent: bool,
) -> Result<bool> {
    while !wizard.is_complete() {
        let step = wizard.current_step();
        wizard.set_fields(answers.get(&step).cloned().unwrap_or_default());

        match wizard.submit_step(today) {
            Ok(Transition::Advanced { from, to }) => {
                println!("   ✓ {} → {}", from, to);
            }
            Ok(Transition::ConsentRequired { age }) => {
                println!();
                println!("   👪 Parental consent needed (applicant is {}).", age);
                if defer_consent {
                    wizard.resolve_consent(false);
                    println!("   Consent deferred. Onboarding paused at {}.", step);
                    return Ok(false);
                }
                wizard.resolve_consent(true);
                println!("   ✓ {} → {}", step, wizard.current_step());
            }
            Ok(other) => anyhow::bail!("Wizard did not advance from {}: {:?}", step, other),
            Err(errors) => {
                println!();
                println!("   {} needs fixing:", step);
                print_field_errors(&errors);
                return Err(Error::from(errors))
                    .with_context(|| format!("Onboarding stopped at {}", step));
            }
        }
    }
    Ok(true)
}

fn print_progress(wizard: &OnboardingWizard) {
    let line: Vec<String> = wizard
        .progress()
        .iter()
        .map(|p| {
            let marker = match p.status {
                StepStatus::Completed => "●",
                StepStatus::Active => "◉",
                StepStatus::Upcoming => "○",
            };
            format!("{} {}", marker, p.label)
        })
        .collect();
    println!("   {}", line.join("  "));
}

pub fn cmd_onboard(
    config: &AppConfig,
    data_dir: &Path,
    answers_path: &Path,
    today: Option<&str>,
    defer_consent: bool,
) -> Result<()> {
    let answers = load_answers(answers_path)?;
    let today = match today {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today '{}', expected YYYY-MM-DD", d))?,
        None => chrono::Local::now().date_naive(),
    };

    println!();
    println!("🚀 Onboarding");
    println!("   ─────────────────────────────────────────────────────────────");

    let mut wizard = OnboardingWizard::with_consent_age(config.consent_age);
    let completed = run_wizard(&mut wizard, &answers, today, defer_consent)?;

    println!();
    print_progress(&wizard);

    if completed {
        let store = SessionStore::in_dir(data_dir);
        store
            .mark_complete()
            .with_context(|| format!("Failed to save session to {}", store.path().display()))?;
        info!("Onboarding complete");

        let name = wizard
            .profile()
            .basic_details
            .as_ref()
            .map(|d| d.full_name.as_str())
            .unwrap_or("there");
        println!();
        println!("   🎉 Welcome aboard, {}!", name);
        println!("   Your dashboard is ready: youthfin route /youth-dashboard");
    }

    Ok(())
}
