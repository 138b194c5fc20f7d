// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::error::Result;
use crate::models::Workout;
use crate::services::WorkoutService;
use async_trait::async_trait;

/// Workout log capability.
#[async_trait]
pub trait WorkoutAdapter: Send + Sync {
    async fn fetch_workouts(&self) -> Result<Vec<Workout>>;
    async fn add_workout(&self, workout: Workout) -> Result<Workout>;
    async fn delete_workout(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl WorkoutAdapter for WorkoutService {
    async fn fetch_workouts(&self) -> Result<Vec<Workout>> {
        WorkoutService::fetch_workouts(self).await
    }

    async fn add_workout(&self, workout: Workout) -> Result<Workout> {
        WorkoutService::add_workout(self, workout).await
    }

    async fn delete_workout(&self, id: &str) -> Result<()> {
        WorkoutService::delete_workout(self, id).await
    }
}
