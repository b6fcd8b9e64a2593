//! Savings goals
//!
//! A goal is a named target amount with accumulated progress. Goals are only
//! created here (starting at zero); deposits happen elsewhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{is_valid_url, FieldErrors};

/// Reward label given to goals created through the form
pub const DEFAULT_NEW_GOAL_REWARD: &str = "New Achiever!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub goal_name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub reward: Option<String>,
}

impl SavingsGoal {
    pub fn new(
        id: impl Into<String>,
        goal_name: impl Into<String>,
        current_amount: f64,
        target_amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            goal_name: goal_name.into(),
            current_amount,
            target_amount,
            target_date: None,
            description: None,
            image_url: None,
            reward: None,
        }
    }

    /// Percent of the target reached; 0 without a positive target, may exceed 100
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount > 0.0 {
            (self.current_amount / self.target_amount * 100.0).max(0.0)
        } else {
            0.0
        }
    }

    /// Amount still to save, never negative
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn is_reached(&self) -> bool {
        self.target_amount > 0.0 && self.current_amount >= self.target_amount
    }
}

/// Raw input of the "create a new savings goal" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub goal_name: String,
    pub target_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl GoalDraft {
    pub fn new(goal_name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            goal_name: goal_name.into(),
            target_amount,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ValidGoal, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_min_chars("goalName", &self.goal_name, 3, "Goal name is too short");

        // NaN fails this too
        if !(self.target_amount > 0.0) {
            errors.push("targetAmount", "Target amount must be positive");
        }

        let image_url = non_blank(self.image_url.as_deref());
        if let Some(url) = image_url {
            if !is_valid_url(url) {
                errors.push("imageUrl", "Invalid URL");
            }
        }

        errors.into_result(ValidGoal {
            goal_name: self.goal_name.clone(),
            target_amount: self.target_amount,
            target_date: self.target_date,
            description: non_blank(self.description.as_deref()).map(str::to_string),
            image_url: image_url.map(str::to_string),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Goal form input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGoal {
    pub goal_name: String,
    pub target_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Id for a goal created at the given time
pub fn generate_goal_id(epoch_millis: i64) -> String {
    format!("sg{}", epoch_millis)
}

/// The youth's list of goals, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalBook {
    goals: Vec<SavingsGoal>,
    new_goal_reward: String,
}

impl Default for GoalBook {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl GoalBook {
    pub fn new(goals: Vec<SavingsGoal>) -> Self {
        Self {
            goals,
            new_goal_reward: DEFAULT_NEW_GOAL_REWARD.to_string(),
        }
    }

    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.new_goal_reward = reward.into();
        self
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn get(&self, id: &str) -> Option<&SavingsGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Validate the form and put the new goal at the top of the list
    pub fn create(
        &mut self,
        draft: &GoalDraft,
        id: impl Into<String>,
    ) -> Result<&SavingsGoal, FieldErrors> {
        let valid = draft.validate()?;
        let goal = SavingsGoal {
            id: id.into(),
            goal_name: valid.goal_name,
            current_amount: 0.0,
            target_amount: valid.target_amount,
            target_date: valid.target_date,
            description: valid.description,
            image_url: valid.image_url,
            reward: Some(self.new_goal_reward.clone()),
        };
        debug!("Created savings goal '{}' ({})", goal.goal_name, goal.id);
        self.goals.insert(0, goal);
        Ok(&self.goals[0])
    }

    /// Sum of saved amounts across all goals
    pub fn total_saved(&self) -> f64 {
        self.goals.iter().map(|g| g.current_amount).sum()
    }
}
