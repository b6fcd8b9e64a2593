//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use youthfin_core::{
    AppConfig, Error, OnboardingWizard, SessionStore, Step, TransactionRecord, TransactionType,
};

use crate::cli::FilterArgs;
use crate::commands::{self, truncate};

const ANSWERS: &str = r#"
[basic_details]
fullName = "Alex Rider"
dateOfBirth = "2012-01-01"

[parental_consent]
parentEmail = "parent@example.com"

[kyc]
addressLine1 = "123 Money Street"
city = "London"
postCode = "SW1A 1AA"

[security]
password = "correct horse"
confirmPassword = "correct horse"
securityAnswer = "Batman"
agreeToTerms = true
"#;

const HISTORY_CSV: &str = "id,date,description,amount,type,category
tx1,2024-07-28,Pocket Money,20.00,credit,Allowance
tx2,2024-07-27,Cafe Treats,-5.50,debit,Food
tx3,2024-07-20,Savings Transfer,-10.00,transfer,Savings
";

fn filters(transaction_type: &str, category: &str, search: Option<&str>) -> FilterArgs {
    FilterArgs {
        search: search.map(str::to_string),
        transaction_type: transaction_type.to_string(),
        category: category.to_string(),
        file: None,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ========== Transactions Command Tests ==========

#[test]
fn test_load_records_defaults_to_demo_data() {
    let records = commands::load_records(&AppConfig::default(), None).unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0].id, "tx1");
}

#[test]
fn test_load_records_file_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(&dir, "history.csv", HISTORY_CSV);
    let config = AppConfig {
        transactions_file: Some(dir.path().join("missing.csv")),
        ..AppConfig::default()
    };

    let records = commands::load_records(&config, Some(&csv)).unwrap();
    assert_eq!(records.len(), 3);

    // Configured file is used when no --file is given
    assert!(commands::load_records(&config, None).is_err());
}

#[test]
fn test_build_criteria() {
    let criteria = commands::build_criteria(&filters("debit", "Food", Some("cafe"))).unwrap();
    assert_eq!(criteria.search, "cafe");
    assert_eq!(criteria.transaction_type.to_string(), "debit");
    assert_eq!(criteria.category.to_string(), "Food");

    let criteria = commands::build_criteria(&filters("all", "all", None)).unwrap();
    assert!(criteria.is_unfiltered());
}

#[test]
fn test_build_criteria_rejects_unknown_type() {
    assert!(commands::build_criteria(&filters("refund", "all", None)).is_err());
}

#[test]
fn test_cmd_transactions() {
    let config = AppConfig::default();
    assert!(commands::cmd_transactions(&config, &filters("all", "all", None), false).is_ok());
    assert!(commands::cmd_transactions(&config, &filters("credit", "all", None), true).is_ok());
    // No matches is not an error
    assert!(commands::cmd_transactions(&config, &filters("all", "all", Some("zzz")), false).is_ok());
}

#[test]
fn test_cmd_categories() {
    assert!(commands::cmd_categories(&AppConfig::default(), None).is_ok());
}

#[test]
fn test_cmd_insights() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(&dir, "history.csv", HISTORY_CSV);
    let mut args = filters("all", "all", None);
    args.file = Some(csv);

    let config = AppConfig::default();
    assert!(commands::cmd_insights(&config, &args, false).is_ok());
    assert!(commands::cmd_insights(&config, &args, true).is_ok());
    // Only credits: no spending section
    assert!(commands::cmd_insights(&config, &filters("credit", "all", None), false).is_ok());
}

// ========== Dashboard Command Tests ==========

#[test]
fn test_cmd_dashboard_requires_onboarding() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default();
    // Redirect is reported, not an error
    assert!(commands::cmd_dashboard(&config, dir.path(), false, None, None, false).is_ok());
    assert!(commands::cmd_dashboard(&config, dir.path(), true, None, Some("June"), false).is_ok());
}

#[test]
fn test_cmd_dashboard_views() {
    let dir = tempfile::tempdir().unwrap();
    SessionStore::in_dir(dir.path()).mark_complete().unwrap();
    let config = AppConfig::default();

    assert!(commands::cmd_dashboard(&config, dir.path(), false, None, None, false).is_ok());
    assert!(commands::cmd_dashboard(&config, dir.path(), false, None, None, true).is_ok());
    assert!(commands::cmd_dashboard(&config, dir.path(), true, None, None, false).is_ok());
    assert!(commands::cmd_dashboard(&config, dir.path(), true, None, Some("2024-07-30"), true).is_ok());
    assert!(commands::cmd_dashboard(&config, dir.path(), true, None, Some("July"), false).is_err());
}

#[test]
fn test_parent_records_source() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(&dir, "history.csv", HISTORY_CSV);
    let config = AppConfig::default();

    let demo = commands::parent_records(&config, None).unwrap();
    assert_eq!(demo[0].id, "ctx1");
    assert_eq!(commands::parent_records(&config, Some(&csv)).unwrap().len(), 3);
}

#[test]
fn test_resolve_week_end() {
    let records = commands::parent_records(&AppConfig::default(), None).unwrap();
    assert_eq!(
        commands::resolve_week_end(None, &records).unwrap(),
        NaiveDate::from_ymd_opt(2024, 7, 30).unwrap()
    );
    assert_eq!(
        commands::resolve_week_end(Some("2024-08-02"), &records).unwrap(),
        NaiveDate::from_ymd_opt(2024, 8, 2).unwrap()
    );
    assert!(commands::resolve_week_end(Some("02/08/2024"), &records).is_err());
}

// ========== Goals Command Tests ==========

#[test]
fn test_cmd_goals_list() {
    assert!(commands::cmd_goals_list(&AppConfig::default()).is_ok());
}

#[test]
fn test_cmd_goals_add() {
    let config = AppConfig::default();
    let result = commands::cmd_goals_add(
        &config,
        "Concert Tickets",
        80.0,
        Some("Front row".to_string()),
        None,
        Some("2024-12-01"),
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_goals_add_invalid() {
    let config = AppConfig::default();
    assert!(commands::cmd_goals_add(&config, "TV", 0.0, None, None, None).is_err());
    assert!(
        commands::cmd_goals_add(&config, "Bike", 100.0, None, Some("not a url".into()), None)
            .is_err()
    );
    assert!(commands::cmd_goals_add(&config, "Bike", 100.0, None, None, Some("12/01/2024")).is_err());
}

#[test]
fn test_invalid_forms_carry_field_errors() {
    let config = AppConfig::default();

    let err = commands::cmd_goals_add(&config, "TV", 0.0, None, None, None).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::Validation(errors)) => {
            assert!(errors.contains("goalName"));
            assert!(errors.contains("targetAmount"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let err = commands::cmd_settings(&config, Some(-1.0), None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Validation(errors)) if errors.contains("allowanceAmount")
    ));

    let err = commands::cmd_profile("A", "alex@example.com", None, None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Validation(errors)) if errors.contains("fullName")
    ));
}

// ========== Onboarding Command Tests ==========

#[test]
fn test_parse_answers() {
    let answers = commands::parse_answers(ANSWERS).unwrap();
    assert_eq!(answers.len(), 4);
    assert_eq!(answers[&Step::BasicDetails].text("fullName"), "Alex Rider");
    assert!(answers[&Step::Security].flag("agreeToTerms"));
}

#[test]
fn test_parse_answers_unknown_step() {
    assert!(commands::parse_answers("[payment]\ncard = \"1234\"\n").is_err());
}

#[test]
fn test_run_wizard_with_consent() {
    let answers = commands::parse_answers(ANSWERS).unwrap();
    let mut wizard = OnboardingWizard::new();
    let completed = commands::run_wizard(&mut wizard, &answers, today(), false).unwrap();
    assert!(completed);
    assert_eq!(wizard.current_step(), Step::Welcome);
}

#[test]
fn test_run_wizard_defer_consent() {
    let answers = commands::parse_answers(ANSWERS).unwrap();
    let mut wizard = OnboardingWizard::new();
    let completed = commands::run_wizard(&mut wizard, &answers, today(), true).unwrap();
    assert!(!completed);
    assert_eq!(wizard.current_step(), Step::BasicDetails);
    assert!(!wizard.consent_dialog_visible());
}

#[test]
fn test_run_wizard_stops_on_invalid_step() {
    let answers = commands::parse_answers(
        r#"
[basic_details]
fullName = "A"
dateOfBirth = "2000-01-01"
"#,
    )
    .unwrap();
    let mut wizard = OnboardingWizard::new();
    let err = commands::run_wizard(&mut wizard, &answers, today(), false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Validation(errors)) if errors.contains("fullName")
    ));
    assert_eq!(wizard.current_step(), Step::BasicDetails);
}

#[test]
fn test_cmd_onboard_marks_session_complete() {
    let dir = tempfile::tempdir().unwrap();
    let answers = write_file(&dir, "answers.toml", ANSWERS);

    let result = commands::cmd_onboard(
        &AppConfig::default(),
        dir.path(),
        &answers,
        Some("2024-06-01"),
        false,
    );
    assert!(result.is_ok());
    assert!(SessionStore::in_dir(dir.path()).load().unwrap().onboarding_complete);
}

#[test]
fn test_cmd_onboard_deferred_leaves_session_incomplete() {
    let dir = tempfile::tempdir().unwrap();
    let answers = write_file(&dir, "answers.toml", ANSWERS);

    let result = commands::cmd_onboard(
        &AppConfig::default(),
        dir.path(),
        &answers,
        Some("2024-06-01"),
        true,
    );
    assert!(result.is_ok());
    assert!(!SessionStore::in_dir(dir.path()).load().unwrap().onboarding_complete);
}

#[test]
fn test_cmd_onboard_respects_consent_age() {
    let dir = tempfile::tempdir().unwrap();
    let answers = write_file(&dir, "answers.toml", ANSWERS);
    // A 12-year-old needs no consent dialog when the threshold is 10
    let config = AppConfig {
        consent_age: 10,
        ..AppConfig::default()
    };

    assert!(commands::cmd_onboard(&config, dir.path(), &answers, Some("2024-06-01"), true).is_ok());
    assert!(SessionStore::in_dir(dir.path()).load().unwrap().onboarding_complete);
}

#[test]
fn test_cmd_onboard_bad_today() {
    let dir = tempfile::tempdir().unwrap();
    let answers = write_file(&dir, "answers.toml", ANSWERS);
    assert!(
        commands::cmd_onboard(&AppConfig::default(), dir.path(), &answers, Some("June"), false)
            .is_err()
    );
}

// ========== Session Command Tests ==========

#[test]
fn test_cmd_route() {
    let dir = tempfile::tempdir().unwrap();
    assert!(commands::cmd_route(dir.path(), "/youth-dashboard").is_ok());
    assert!(commands::cmd_route(dir.path(), "/nowhere").is_ok());
}

#[test]
fn test_cmd_reset_clears_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::in_dir(dir.path());
    store.mark_complete().unwrap();

    commands::cmd_reset(dir.path(), true).unwrap();
    assert!(!store.path().exists());
    assert!(!store.load().unwrap().onboarding_complete);
}

// ========== Profile Command Tests ==========

#[test]
fn test_parse_control_setting() {
    assert_eq!(
        commands::parse_control_setting("atmWithdrawal=on").unwrap(),
        ("atmWithdrawal", true)
    );
    assert_eq!(
        commands::parse_control_setting("onlinePurchases=off").unwrap(),
        ("onlinePurchases", false)
    );
    assert!(commands::parse_control_setting("atmWithdrawal").is_err());
    assert!(commands::parse_control_setting("atmWithdrawal=maybe").is_err());
}

#[test]
fn test_cmd_controls() {
    assert!(commands::cmd_controls(&[]).is_ok());
    assert!(commands::cmd_controls(&["atmWithdrawal=on".to_string()]).is_ok());
    assert!(commands::cmd_controls(&["specificMerchants=on".to_string()]).is_err());
    assert!(commands::cmd_controls(&["nightMode=on".to_string()]).is_err());
}

#[test]
fn test_cmd_settings() {
    let config = AppConfig::default();
    assert!(commands::cmd_settings(&config, None, None).is_ok());
    assert!(commands::cmd_settings(&config, Some(15.0), Some(80.0)).is_ok());
    assert!(commands::cmd_settings(&config, Some(-1.0), None).is_err());
}

#[test]
fn test_cmd_profile() {
    assert!(commands::cmd_profile("Alex Youth", "alex@example.com", None, Some("dark")).is_ok());
    assert!(commands::cmd_profile("A", "alex@example.com", None, None).is_err());
    assert!(commands::cmd_profile("Alex", "not-an-email", None, None).is_err());
    assert!(commands::cmd_profile("Alex", "alex@example.com", None, Some("neon")).is_err());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Birthday Money from Gran", 10), "Birthda...");
    assert_eq!(truncate("Café Treats", 5), "Ca...");
}

#[test]
fn test_format_amount_follows_transaction_type() {
    let day = NaiveDate::from_ymd_opt(2024, 7, 27).unwrap();
    let credit = TransactionRecord::new("a", day, "Pocket Money", 20.0, TransactionType::Credit, "Allowance");
    let debit = TransactionRecord::new("b", day, "Cafe Treats", -5.5, TransactionType::Debit, "Food");
    // Positive amount on a debit still renders as spending
    let positive_debit = TransactionRecord::new("c", day, "Corner Shop", 3.0, TransactionType::Debit, "Snacks");

    assert_eq!(commands::format_amount(&credit), "\x1b[32m+$20.00\x1b[0m");
    assert_eq!(commands::format_amount(&debit), "\x1b[31m-$5.50\x1b[0m");
    assert_eq!(commands::format_amount(&positive_debit), "\x1b[31m-$3.00\x1b[0m");
}
