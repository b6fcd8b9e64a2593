//! Savings goal command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use youthfin_core::{
    goals::generate_goal_id, sample_data::sample_goals, AppConfig, Error, GoalBook, GoalDraft,
    SavingsGoal,
};

use super::{print_field_errors, truncate};

fn goal_book(config: &AppConfig) -> GoalBook {
    GoalBook::new(sample_goals()).with_reward(config.new_goal_reward.clone())
}

fn print_goal(goal: &SavingsGoal) {
    let pct = goal.progress_percentage();
    let filled = ((pct.min(100.0)) / 10.0).round() as usize;
    let status = if goal.is_reached() { "🎉" } else { "🎯" };

    println!(
        "   {} {} [{}]",
        status,
        truncate(&goal.goal_name, 40),
        goal.id
    );
    println!(
        "      [{}{}] {:.0}%  ${:.2} of ${:.2}",
        "█".repeat(filled),
        "░".repeat(10 - filled),
        pct,
        goal.current_amount,
        goal.target_amount
    );
    if let Some(date) = goal.target_date {
        println!("      Target date: {}", date);
    }
    if let Some(description) = &goal.description {
        println!("      {}", truncate(description, 60));
    }
    if let Some(reward) = &goal.reward {
        println!("      Reward: {}", reward);
    }
}

pub fn cmd_goals_list(config: &AppConfig) -> Result<()> {
    let book = goal_book(config);

    println!();
    println!("💰 Savings Goals");
    println!("   ─────────────────────────────────────────────────────────────");
    for goal in book.goals() {
        print_goal(goal);
    }
    println!();
    println!("   Total saved: ${:.2}", book.total_saved());

    Ok(())
}

pub fn cmd_goals_add(
    config: &AppConfig,
    name: &str,
    target: f64,
    description: Option<String>,
    image_url: Option<String>,
    target_date: Option<&str>,
) -> Result<()> {
    let target_date = target_date
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .with_context(|| format!("Invalid target date '{}', expected YYYY-MM-DD", d))
        })
        .transpose()?;

    let draft = GoalDraft {
        description,
        image_url,
        target_date,
        ..GoalDraft::new(name, target)
    };

    let mut book = goal_book(config);
    let id = generate_goal_id(chrono::Utc::now().timestamp_millis());
    let goal = match book.create(&draft, id) {
        Ok(goal) => goal.clone(),
        Err(errors) => {
            println!("Goal not created:");
            print_field_errors(&errors);
            return Err(Error::from(errors)).context("Invalid goal");
        }
    };

    println!("✅ Created savings goal:");
    print_goal(&goal);
    println!();
    println!("   You now have {} goals.", book.goals().len());

    Ok(())
}
