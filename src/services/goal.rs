// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal service: CRUD plus progress updates over the local goal collection.

use crate::adapters::AuthAdapter;
use crate::db::{keys, CollectionStore};
use crate::error::{AppError, Result};
use crate::models::{Goal, GoalType};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

/// Goal service gated by the session.
#[derive(Clone)]
pub struct GoalService {
    auth: Arc<dyn AuthAdapter>,
    collections: CollectionStore,
}

impl GoalService {
    pub fn new(auth: Arc<dyn AuthAdapter>, collections: CollectionStore) -> Self {
        Self { auth, collections }
    }

    /// All stored goals in insertion order, seeding example goals on first access.
    pub async fn fetch_goals(&self) -> Result<Vec<Goal>> {
        self.authorize().await?;
        let goals = self
            .collections
            .load_or_seed(keys::GOALS, example_goals)
            .await?;
        tracing::debug!(count = goals.len(), "Fetched goals");
        Ok(goals)
    }

    /// Append a goal. Goals with a non-positive target are rejected.
    pub async fn add_goal(&self, goal: Goal) -> Result<Goal> {
        self.authorize().await?;
        goal.validate()?;

        let stored = goal.clone();
        self.collections
            .update(keys::GOALS, move |goals: &mut Vec<Goal>| {
                goals.push(stored);
                Ok(())
            })
            .await?;

        tracing::info!(goal_id = %goal.id, goal_type = ?goal.goal_type, "Goal added");
        Ok(goal)
    }

    /// Replace the first goal matching `id` with a copy carrying `new_value`.
    pub async fn update_goal_progress(&self, id: &str, new_value: f64) -> Result<Goal> {
        self.authorize().await?;
        if !new_value.is_finite() || new_value < 0.0 {
            return Err(AppError::Validation(format!(
                "current value must be finite and non-negative, got {}",
                new_value
            )));
        }

        let updated = self
            .collections
            .update(keys::GOALS, |goals: &mut Vec<Goal>| {
                let slot = goals
                    .iter_mut()
                    .find(|g| g.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("Goal {}", id)))?;
                *slot = slot.with_current_value(new_value);
                Ok(slot.clone())
            })
            .await?;

        tracing::info!(
            goal_id = %id,
            current_value = new_value,
            progress = updated.progress(),
            "Goal progress updated"
        );
        Ok(updated)
    }

    /// Remove every goal with the given id.
    pub async fn delete_goal(&self, id: &str) -> Result<()> {
        self.authorize().await?;

        let removed = self
            .collections
            .update(keys::GOALS, |goals: &mut Vec<Goal>| {
                let before = goals.len();
                goals.retain(|g| g.id != id);
                Ok(before - goals.len())
            })
            .await?;

        tracing::info!(goal_id = %id, removed, "Goal deleted");
        Ok(())
    }

    async fn authorize(&self) -> Result<()> {
        self.auth.token().await.map(|_| ()).map_err(|_| {
            tracing::debug!("Goal operation without a session");
            AppError::NotAuthenticated
        })
    }
}

/// Example goals written on first access.
fn example_goals() -> Vec<Goal> {
    let now = Utc::now();
    vec![
        Goal {
            id: "1".to_string(),
            name: "Lose Weight".to_string(),
            target_value: 10.0,
            current_value: 3.5,
            unit: "kg".to_string(),
            deadline: Some(now + Duration::days(60)),
            goal_type: GoalType::Weight,
        },
        Goal {
            id: "2".to_string(),
            name: "Daily Steps".to_string(),
            target_value: 10000.0,
            current_value: 7500.0,
            unit: "steps".to_string(),
            deadline: None,
            goal_type: GoalType::Steps,
        },
        Goal {
            id: "3".to_string(),
            name: "Weekly Workouts".to_string(),
            target_value: 5.0,
            current_value: 2.0,
            unit: "workouts".to_string(),
            deadline: Some(now + Duration::weeks(1)),
            goal_type: GoalType::Workouts,
        },
    ]
}
