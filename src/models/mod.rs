// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod goal;
pub mod user;
pub mod workout;

pub use goal::{Goal, GoalType, NewGoal};
pub use user::{Credentials, User};
pub use workout::{NewWorkout, Workout, WorkoutSummary, WorkoutType};

use validator::ValidationError;

/// Reject NaN and infinities, which JSON cannot carry.
pub(crate) fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
