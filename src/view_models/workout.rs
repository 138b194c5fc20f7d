// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::adapters::WorkoutAdapter;
use crate::models::{NewWorkout, Workout, WorkoutSummary};
use crate::view_models::{begin, fail, ListState};
use std::sync::Arc;
use tokio::sync::watch;

/// Workout list screen state.
pub struct WorkoutViewModel {
    workouts: Arc<dyn WorkoutAdapter>,
    state: watch::Sender<ListState<Workout>>,
}

impl WorkoutViewModel {
    pub fn new(workouts: Arc<dyn WorkoutAdapter>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self { workouts, state }
    }

    pub fn state(&self) -> ListState<Workout> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<Workout>> {
        self.state.subscribe()
    }

    /// Totals over the workouts currently shown.
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary::from_workouts(&self.state.borrow().items)
    }

    pub async fn fetch_workouts(&self) {
        begin(&self.state);
        match self.workouts.fetch_workouts().await {
            Ok(workouts) => self.state.send_modify(|s| {
                s.items = workouts;
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to fetch workouts", &e),
        }
    }

    /// Log a new workout under a freshly generated id.
    pub async fn add_workout(&self, workout: NewWorkout) {
        begin(&self.state);
        let workout = workout.into_workout(uuid::Uuid::new_v4().to_string());
        match self.workouts.add_workout(workout).await {
            Ok(added) => self.state.send_modify(|s| {
                s.items.push(added);
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to add workout", &e),
        }
    }

    pub async fn delete_workout(&self, id: &str) {
        begin(&self.state);
        match self.workouts.delete_workout(id).await {
            Ok(()) => self.state.send_modify(|s| {
                s.items.retain(|w| w.id != id);
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to delete workout", &e),
        }
    }
}
