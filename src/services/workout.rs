// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout service: create/read/delete over the local workout collection.

use crate::adapters::AuthAdapter;
use crate::db::{keys, CollectionStore};
use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutType};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

/// Workout service gated by the session.
#[derive(Clone)]
pub struct WorkoutService {
    auth: Arc<dyn AuthAdapter>,
    collections: CollectionStore,
}

impl WorkoutService {
    pub fn new(auth: Arc<dyn AuthAdapter>, collections: CollectionStore) -> Self {
        Self { auth, collections }
    }

    /// All stored workouts in insertion order.
    ///
    /// The first fetch on a fresh store seeds it with example workouts.
    pub async fn fetch_workouts(&self) -> Result<Vec<Workout>> {
        self.authorize().await?;
        let workouts = self
            .collections
            .load_or_seed(keys::WORKOUTS, example_workouts)
            .await?;
        tracing::debug!(count = workouts.len(), "Fetched workouts");
        Ok(workouts)
    }

    /// Append a workout. The caller assigns the id; duplicates are not checked.
    pub async fn add_workout(&self, workout: Workout) -> Result<Workout> {
        self.authorize().await?;
        workout.validate()?;

        let stored = workout.clone();
        self.collections
            .update(keys::WORKOUTS, move |workouts: &mut Vec<Workout>| {
                workouts.push(stored);
                Ok(())
            })
            .await?;

        tracing::info!(
            workout_id = %workout.id,
            workout_type = ?workout.workout_type,
            "Workout added"
        );
        Ok(workout)
    }

    /// Remove every workout with the given id.
    pub async fn delete_workout(&self, id: &str) -> Result<()> {
        self.authorize().await?;

        let removed = self
            .collections
            .update(keys::WORKOUTS, |workouts: &mut Vec<Workout>| {
                let before = workouts.len();
                workouts.retain(|w| w.id != id);
                Ok(before - workouts.len())
            })
            .await?;

        tracing::info!(workout_id = %id, removed, "Workout deleted");
        Ok(())
    }

    async fn authorize(&self) -> Result<()> {
        self.auth.token().await.map(|_| ()).map_err(|_| {
            tracing::debug!("Workout operation without a session");
            AppError::NotAuthenticated
        })
    }
}

/// Example workouts written on first access.
fn example_workouts() -> Vec<Workout> {
    let now = Utc::now();
    vec![
        Workout {
            id: "1".to_string(),
            name: "Morning Run".to_string(),
            duration: 1800.0,
            calories_burned: 350.0,
            date: now - Duration::days(1),
            workout_type: WorkoutType::Running,
        },
        Workout {
            id: "2".to_string(),
            name: "Weight Training".to_string(),
            duration: 3600.0,
            calories_burned: 450.0,
            date: now - Duration::days(2),
            workout_type: WorkoutType::WeightLifting,
        },
        Workout {
            id: "3".to_string(),
            name: "Yoga Session".to_string(),
            duration: 2700.0,
            calories_burned: 200.0,
            date: now - Duration::days(3),
            workout_type: WorkoutType::Yoga,
        },
    ]
}
