// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model and aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::validate_finite;
use validator::Validate;

/// A logged workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    /// User-defined name (e.g. "Morning Run")
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Duration in seconds
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub duration: f64,
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub calories_burned: f64,
    /// When the workout was performed
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
}

/// Workout activity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutType {
    Running,
    Cycling,
    Swimming,
    WeightLifting,
    Yoga,
    Hiit,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 6] = [
        WorkoutType::Running,
        WorkoutType::Cycling,
        WorkoutType::Swimming,
        WorkoutType::WeightLifting,
        WorkoutType::Yoga,
        WorkoutType::Hiit,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
            WorkoutType::Swimming => "Swimming",
            WorkoutType::WeightLifting => "Weight Lifting",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Hiit => "HIIT",
        }
    }
}

/// Input for logging a workout; the id is assigned on creation.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub workout_type: WorkoutType,
    pub duration: f64,
    pub calories_burned: f64,
    pub date: DateTime<Utc>,
}

impl NewWorkout {
    pub fn into_workout(self, id: String) -> Workout {
        Workout {
            id,
            name: self.name,
            duration: self.duration,
            calories_burned: self.calories_burned,
            date: self.date,
            workout_type: self.workout_type,
        }
    }
}

/// Totals across a set of workouts (dashboard stat cards).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub count: usize,
    pub total_calories: f64,
    /// Seconds
    pub total_duration: f64,
}

impl WorkoutSummary {
    pub fn from_workouts<'a, I>(workouts: I) -> Self
    where
        I: IntoIterator<Item = &'a Workout>,
    {
        workouts
            .into_iter()
            .fold(Self::default(), |mut summary, workout| {
                summary.count += 1;
                summary.total_calories += workout.calories_burned;
                summary.total_duration += workout.duration;
                summary
            })
    }
}
