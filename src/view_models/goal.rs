// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::adapters::GoalAdapter;
use crate::models::{Goal, NewGoal};
use crate::view_models::{begin, fail, ListState};
use std::sync::Arc;
use tokio::sync::watch;

/// Goal list screen state.
pub struct GoalViewModel {
    goals: Arc<dyn GoalAdapter>,
    state: watch::Sender<ListState<Goal>>,
}

impl GoalViewModel {
    pub fn new(goals: Arc<dyn GoalAdapter>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self { goals, state }
    }

    pub fn state(&self) -> ListState<Goal> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<Goal>> {
        self.state.subscribe()
    }

    pub fn completed_goals(&self) -> Vec<Goal> {
        self.state
            .borrow()
            .items
            .iter()
            .filter(|g| g.is_completed())
            .cloned()
            .collect()
    }

    pub fn in_progress_goals(&self) -> Vec<Goal> {
        self.state
            .borrow()
            .items
            .iter()
            .filter(|g| !g.is_completed())
            .cloned()
            .collect()
    }

    pub async fn fetch_goals(&self) {
        begin(&self.state);
        match self.goals.fetch_goals().await {
            Ok(goals) => self.state.send_modify(|s| {
                s.items = goals;
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to fetch goals", &e),
        }
    }

    /// Create a goal under a freshly generated id.
    pub async fn add_goal(&self, goal: NewGoal) {
        begin(&self.state);
        let goal = goal.into_goal(uuid::Uuid::new_v4().to_string());
        match self.goals.add_goal(goal).await {
            Ok(added) => self.state.send_modify(|s| {
                s.items.push(added);
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to add goal", &e),
        }
    }

    pub async fn update_goal_progress(&self, id: &str, new_value: f64) {
        begin(&self.state);
        match self.goals.update_goal_progress(id, new_value).await {
            Ok(updated) => self.state.send_modify(|s| {
                if let Some(slot) = s.items.iter_mut().find(|g| g.id == updated.id) {
                    *slot = updated;
                }
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to update goal", &e),
        }
    }

    pub async fn delete_goal(&self, id: &str) {
        begin(&self.state);
        match self.goals.delete_goal(id).await {
            Ok(()) => self.state.send_modify(|s| {
                s.items.retain(|g| g.id != id);
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to delete goal", &e),
        }
    }
}
