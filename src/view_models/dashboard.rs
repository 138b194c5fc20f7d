// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard: workouts and goals side by side.

use crate::models::WorkoutSummary;
use crate::view_models::{GoalViewModel, WorkoutViewModel};
use serde::Serialize;

/// Figures shown on the dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub workouts: WorkoutSummary,
    pub goals_in_progress: usize,
    pub goals_completed: usize,
}

pub struct DashboardViewModel {
    workouts: WorkoutViewModel,
    goals: GoalViewModel,
}

impl DashboardViewModel {
    pub fn new(workouts: WorkoutViewModel, goals: GoalViewModel) -> Self {
        Self { workouts, goals }
    }

    pub fn workouts(&self) -> &WorkoutViewModel {
        &self.workouts
    }

    pub fn goals(&self) -> &GoalViewModel {
        &self.goals
    }

    /// Fetch workouts and goals concurrently. The two fetches are independent;
    /// a failure in one leaves the other's result intact.
    pub async fn load(&self) {
        tokio::join!(self.workouts.fetch_workouts(), self.goals.fetch_goals());
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            workouts: self.workouts.summary(),
            goals_in_progress: self.goals.in_progress_goals().len(),
            goals_completed: self.goals.completed_goals().len(),
        }
    }
}
