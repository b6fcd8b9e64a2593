//! Onboarding step definitions and their validation schemas

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::validation::{is_iso_date, is_valid_email, FieldErrors, FieldValues};

/// Number of steps in the wizard, including the final welcome screen
pub const TOTAL_STEPS: usize = 5;

/// One screen of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    BasicDetails,
    ParentalConsent,
    Kyc,
    Security,
    Welcome,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[
            Self::BasicDetails,
            Self::ParentalConsent,
            Self::Kyc,
            Self::Security,
            Self::Welcome,
        ]
    }

    /// Zero-based position in the wizard
    pub fn index(&self) -> usize {
        match self {
            Self::BasicDetails => 0,
            Self::ParentalConsent => 1,
            Self::Kyc => 2,
            Self::Security => 3,
            Self::Welcome => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::all().get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicDetails => "basic_details",
            Self::ParentalConsent => "parental_consent",
            Self::Kyc => "kyc",
            Self::Security => "security",
            Self::Welcome => "welcome",
        }
    }

    /// Label shown in the progress stepper
    pub fn label(&self) -> &'static str {
        match self {
            Self::BasicDetails => "Basic Details",
            Self::ParentalConsent => "Parental Consent",
            Self::Kyc => "KYC",
            Self::Security => "Security",
            Self::Welcome => "Welcome",
        }
    }

    /// Field names collected on this step
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::BasicDetails => &["fullName", "dateOfBirth"],
            Self::ParentalConsent => &["parentEmail"],
            Self::Kyc => &["addressLine1", "city", "postCode"],
            Self::Security => &[
                "password",
                "confirmPassword",
                "securityAnswer",
                "agreeToTerms",
            ],
            Self::Welcome => &[],
        }
    }

    /// Next step, capped at the last one
    pub fn next(&self) -> Step {
        Self::from_index(self.index() + 1).unwrap_or(Self::Welcome)
    }

    /// Previous step, floored at the first one
    pub fn previous(&self) -> Step {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(Self::BasicDetails)
    }

    pub fn is_first(&self) -> bool {
        *self == Self::BasicDetails
    }

    pub fn is_last(&self) -> bool {
        *self == Self::Welcome
    }

    /// Validate the raw values of this step into its typed payload
    pub fn validate(&self, fields: &FieldValues) -> Result<StepData, FieldErrors> {
        match self {
            Self::BasicDetails => BasicDetails::validate(fields).map(StepData::BasicDetails),
            Self::ParentalConsent => {
                ParentalConsent::validate(fields).map(StepData::ParentalConsent)
            }
            Self::Kyc => KycDetails::validate(fields).map(StepData::Kyc),
            Self::Security => SecurityDetails::validate(fields).map(StepData::Security),
            Self::Welcome => Ok(StepData::Welcome),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "basic_details" => Ok(Self::BasicDetails),
            "parental_consent" => Ok(Self::ParentalConsent),
            "kyc" => Ok(Self::Kyc),
            "security" => Ok(Self::Security),
            "welcome" => Ok(Self::Welcome),
            _ => Err(format!("Unknown onboarding step: {}", s)),
        }
    }
}

/// Validated payload of a step
#[derive(Debug, Clone, PartialEq)]
pub enum StepData {
    BasicDetails(BasicDetails),
    ParentalConsent(ParentalConsent),
    Kyc(KycDetails),
    Security(SecurityDetails),
    Welcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicDetails {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
}

impl BasicDetails {
    pub fn validate(fields: &FieldValues) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = fields.text("fullName");
        errors.require_min_chars("fullName", full_name, 2, "Name must be at least 2 characters.");

        // The pattern alone lets through dates like 2010-02-30; those fail too
        let dob = fields.text("dateOfBirth");
        let date_of_birth = if is_iso_date(dob) {
            NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok()
        } else {
            None
        };
        if date_of_birth.is_none() {
            errors.push("dateOfBirth", "Please enter a valid date (YYYY-MM-DD).");
        }

        match date_of_birth {
            Some(date_of_birth) if errors.is_empty() => Ok(Self {
                full_name: full_name.to_string(),
                date_of_birth,
            }),
            _ => Err(errors),
        }
    }

    /// Age in whole years on the given day
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.date_of_birth, today)
    }
}

/// Age in whole years, minus one if this year's birthday is still ahead
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentalConsent {
    pub parent_email: Option<String>,
}

impl ParentalConsent {
    pub fn validate(fields: &FieldValues) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let parent_email = fields.optional_text("parentEmail");
        if let Some(email) = parent_email {
            if !is_valid_email(email) {
                errors.push("parentEmail", "Invalid email address.");
            }
        }
        errors.into_result(Self {
            parent_email: parent_email.map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KycDetails {
    pub address_line1: String,
    pub city: String,
    pub post_code: String,
}

impl KycDetails {
    pub fn validate(fields: &FieldValues) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let address_line1 = fields.text("addressLine1");
        let city = fields.text("city");
        let post_code = fields.text("postCode");

        errors.require_min_chars("addressLine1", address_line1, 5, "Address is too short.");
        errors.require_min_chars("city", city, 2, "City name is too short.");
        errors.require_min_chars("postCode", post_code, 5, "Postcode is too short.");

        errors.into_result(Self {
            address_line1: address_line1.to_string(),
            city: city.to_string(),
            post_code: post_code.to_string(),
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SecurityDetails {
    pub password: String,
    pub security_answer: String,
}

impl SecurityDetails {
    pub fn validate(fields: &FieldValues) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let password = fields.text("password");
        let confirm = fields.text("confirmPassword");
        let answer = fields.text("securityAnswer");

        errors.require_min_chars(
            "password",
            password,
            8,
            "Password must be at least 8 characters.",
        );
        errors.require_min_chars("securityAnswer", answer, 3, "Answer is too short.");
        if !fields.flag("agreeToTerms") {
            errors.push("agreeToTerms", "You must agree to the terms.");
        }
        // Cross-field check runs only once the individual fields pass
        if errors.is_empty() && password != confirm {
            errors.push("confirmPassword", "Passwords don't match");
        }

        errors.into_result(Self {
            password: password.to_string(),
            security_answer: answer.to_string(),
        })
    }
}

impl std::fmt::Debug for SecurityDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityDetails")
            .field("password", &"<redacted>")
            .field("security_answer", &"<redacted>")
            .finish()
    }
}
