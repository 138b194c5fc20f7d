// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness goal model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::validate_finite;
use validator::Validate;

/// A fitness goal tracked by the user.
///
/// Goals are immutable values; progress updates replace the whole record
/// via [`Goal::with_current_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    /// User-defined name (e.g. "Lose Weight")
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Value to reach
    #[validate(range(exclusive_min = 0.0), custom(function = "validate_finite"))]
    pub target_value: f64,
    /// Current value, may exceed the target
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub current_value: f64,
    /// Unit label (e.g. "kg", "steps")
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
}

impl Goal {
    /// Completion ratio, clamped to 1.0.
    ///
    /// A non-positive target yields 0.0.
    pub fn progress(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.current_value / self.target_value).min(1.0)
    }

    pub fn is_completed(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Copy of this goal carrying a new current value.
    pub fn with_current_value(&self, current_value: f64) -> Self {
        Self {
            current_value,
            ..self.clone()
        }
    }
}

/// Goal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalType {
    Weight,
    Steps,
    Workouts,
    Distance,
    Calories,
}

impl GoalType {
    pub const ALL: [GoalType; 5] = [
        GoalType::Weight,
        GoalType::Steps,
        GoalType::Workouts,
        GoalType::Distance,
        GoalType::Calories,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::Weight => "Weight",
            GoalType::Steps => "Steps",
            GoalType::Workouts => "Workouts",
            GoalType::Distance => "Distance",
            GoalType::Calories => "Calories",
        }
    }
}

/// Input for creating a goal; the id is assigned on creation.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: Option<DateTime<Utc>>,
    pub goal_type: GoalType,
}

impl NewGoal {
    pub fn into_goal(self, id: String) -> Goal {
        Goal {
            id,
            name: self.name,
            target_value: self.target_value,
            current_value: self.current_value,
            unit: self.unit,
            deadline: self.deadline,
            goal_type: self.goal_type,
        }
    }
}
