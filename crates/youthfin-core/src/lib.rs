//! YouthFin Core Library
//!
//! Business rules for the YouthFin youth banking app:
//! - Youth and parent dashboards with weekly spending alerts
//! - Onboarding wizard with per-step validation and a parental consent branch
//! - Transaction filtering and spending insights
//! - Savings goals
//! - Youth profile, parent settings and parental controls
//! - Session state and route gating
//! - CSV import of transaction history
//!
//! Everything is synchronous and in-memory; the only file the library writes
//! is the session flag.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod goals;
pub mod import;
pub mod insights;
pub mod models;
pub mod onboarding;
pub mod profile;
pub mod sample_data;
pub mod session;
pub mod validation;

pub use config::AppConfig;
pub use dashboard::{AccountSummary, ParentDashboardView, YouthDashboardView};
pub use error::{Error, Result};
pub use goals::{GoalBook, GoalDraft, SavingsGoal};
pub use insights::{summarize, CategoryFilter, FilterCriteria, InsightsView, TypeFilter};
pub use models::{TransactionRecord, TransactionType};
pub use onboarding::{OnboardingWizard, Step, Transition};
pub use profile::{ParentSettings, ParentSettingsForm, ParentalControls, YouthProfileForm};
pub use session::{route, Route, RouteTarget, SessionState, SessionStore};
pub use validation::{FieldErrors, FieldValue, FieldValues};
