//! Onboarding wizard controller
//!
//! Holds the current step, the raw field values typed on each step and the
//! validated payloads collected so far. Forward moves only happen after the
//! current step validates; after Basic Details an applicant younger than the
//! consent age is held in [`Phase::AwaitingConsent`] until the consent
//! dialog is answered.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use super::steps::{
    BasicDetails, KycDetails, ParentalConsent, SecurityDetails, Step, StepData,
};
use crate::validation::{FieldErrors, FieldValue, FieldValues};

/// Applicants younger than this need parental consent
pub const DEFAULT_CONSENT_AGE: i32 = 16;

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing a step's form
    Editing(Step),
    /// Basic Details passed but the consent dialog is open
    AwaitingConsent { age: i32 },
}

/// Outcome of a wizard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: Step, to: Step },
    Retreated { from: Step, to: Step },
    /// Applicant is under the consent age; the dialog is now visible
    ConsentRequired { age: i32 },
    /// The consent dialog was dismissed with "later"
    ConsentDeferred,
    /// Nothing to do for this action in the current state
    Unchanged,
}

/// Display state of one dot in the progress stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: Step,
    pub label: &'static str,
    pub status: StepStatus,
}

/// Validated data gathered by the wizard, one slot per step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingProfile {
    pub basic_details: Option<BasicDetails>,
    pub parental_consent: Option<ParentalConsent>,
    pub kyc: Option<KycDetails>,
    pub security: Option<SecurityDetails>,
}

impl OnboardingProfile {
    fn record(&mut self, data: StepData) {
        match data {
            StepData::BasicDetails(d) => self.basic_details = Some(d),
            StepData::ParentalConsent(d) => self.parental_consent = Some(d),
            StepData::Kyc(d) => self.kyc = Some(d),
            StepData::Security(d) => self.security = Some(d),
            StepData::Welcome => {}
        }
    }
}

#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    phase: Phase,
    fields: HashMap<Step, FieldValues>,
    profile: OnboardingProfile,
    consent_age: i32,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::with_consent_age(DEFAULT_CONSENT_AGE)
    }

    pub fn with_consent_age(consent_age: i32) -> Self {
        Self {
            phase: Phase::Editing(Step::BasicDetails),
            fields: HashMap::new(),
            profile: OnboardingProfile::default(),
            consent_age,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Step whose form is on screen (Basic Details while the dialog is open)
    pub fn current_step(&self) -> Step {
        match self.phase {
            Phase::Editing(step) => step,
            Phase::AwaitingConsent { .. } => Step::BasicDetails,
        }
    }

    pub fn consent_dialog_visible(&self) -> bool {
        matches!(self.phase, Phase::AwaitingConsent { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.current_step().is_last()
    }

    pub fn consent_age(&self) -> i32 {
        self.consent_age
    }

    pub fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    /// Raw values typed on a step so far
    pub fn fields(&self, step: Step) -> Option<&FieldValues> {
        self.fields.get(&step)
    }

    /// Record a keystroke or selection on the current step
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let step = self.current_step();
        self.fields.entry(step).or_default().set(name, value);
    }

    /// Replace all values of the current step at once
    pub fn set_fields(&mut self, values: FieldValues) {
        let step = self.current_step();
        self.fields.insert(step, values);
    }

    /// Validate the current step and move forward if it passes
    pub fn submit_step(&mut self, today: NaiveDate) -> Result<Transition, FieldErrors> {
        let step = match self.phase {
            Phase::Editing(step) => step,
            Phase::AwaitingConsent { .. } => {
                warn!("Submit ignored while the consent dialog is open");
                return Ok(Transition::Unchanged);
            }
        };
        if step.is_last() {
            return Ok(Transition::Unchanged);
        }

        let empty = FieldValues::new();
        let values = self.fields.get(&step).unwrap_or(&empty);
        let data = step.validate(values).inspect_err(|errors| {
            debug!("Step '{}' failed validation: {}", step, errors);
        })?;

        let needs_consent = match &data {
            StepData::BasicDetails(details) => {
                let age = details.age_on(today);
                (age < self.consent_age).then_some(age)
            }
            _ => None,
        };
        self.profile.record(data);

        if let Some(age) = needs_consent {
            debug!("Applicant is {}, parental consent required", age);
            self.phase = Phase::AwaitingConsent { age };
            return Ok(Transition::ConsentRequired { age });
        }

        let to = step.next();
        debug!("Onboarding advanced: {} -> {}", step, to);
        self.phase = Phase::Editing(to);
        Ok(Transition::Advanced { from: step, to })
    }

    /// Go back one step. No back action on the first and last steps.
    pub fn previous_step(&mut self) -> Transition {
        match self.phase {
            Phase::Editing(step) if !step.is_first() && !step.is_last() => {
                let to = step.previous();
                debug!("Onboarding went back: {} -> {}", step, to);
                self.phase = Phase::Editing(to);
                Transition::Retreated { from: step, to }
            }
            _ => Transition::Unchanged,
        }
    }

    /// Answer the consent dialog: proceed to the consent step, or defer
    pub fn resolve_consent(&mut self, proceed: bool) -> Transition {
        if !self.consent_dialog_visible() {
            warn!("No consent decision pending");
            return Transition::Unchanged;
        }
        if proceed {
            self.phase = Phase::Editing(Step::ParentalConsent);
            Transition::Advanced {
                from: Step::BasicDetails,
                to: Step::ParentalConsent,
            }
        } else {
            debug!("Parental consent deferred");
            self.phase = Phase::Editing(Step::BasicDetails);
            Transition::ConsentDeferred
        }
    }

    /// Status of every step for the progress stepper
    pub fn progress(&self) -> Vec<StepProgress> {
        let current = self.current_step();
        Step::all()
            .iter()
            .map(|&step| StepProgress {
                step,
                label: step.label(),
                status: match step.cmp(&current) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Active,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                },
            })
            .collect()
    }
}
