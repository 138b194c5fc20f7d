// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::error::Result;
use crate::models::Goal;
use crate::services::GoalService;
use async_trait::async_trait;

/// Goal tracking capability.
#[async_trait]
pub trait GoalAdapter: Send + Sync {
    async fn fetch_goals(&self) -> Result<Vec<Goal>>;
    async fn add_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal_progress(&self, id: &str, new_value: f64) -> Result<Goal>;
    async fn delete_goal(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl GoalAdapter for GoalService {
    async fn fetch_goals(&self) -> Result<Vec<Goal>> {
        GoalService::fetch_goals(self).await
    }

    async fn add_goal(&self, goal: Goal) -> Result<Goal> {
        GoalService::add_goal(self, goal).await
    }

    async fn update_goal_progress(&self, id: &str, new_value: f64) -> Result<Goal> {
        GoalService::update_goal_progress(self, id, new_value).await
    }

    async fn delete_goal(&self, id: &str) -> Result<()> {
        GoalService::delete_goal(self, id).await
    }
}
