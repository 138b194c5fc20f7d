// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session and domain logic.

pub mod auth;
pub mod goal;
pub mod network;
pub mod workout;

pub use auth::AuthService;
pub use goal::GoalService;
pub use network::HttpClient;
pub use workout::WorkoutService;
