//! Onboarding wizard
//!
//! Five steps (Basic Details, Parental Consent, KYC, Security, Welcome), each
//! with its own typed field set, plus a consent branch for young applicants.

pub mod steps;
pub mod wizard;

pub use steps::{
    age_on, BasicDetails, KycDetails, ParentalConsent, SecurityDetails, Step, StepData,
    TOTAL_STEPS,
};
pub use wizard::{
    OnboardingProfile, OnboardingWizard, Phase, StepProgress, StepStatus, Transition,
    DEFAULT_CONSENT_AGE,
};
