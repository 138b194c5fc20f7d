// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Capability interfaces consumed by the view models and domain services.
//!
//! Each trait is implemented directly by the concrete service, so a
//! consumer depends on the narrow capability rather than the service type.
//! Tests substitute their own implementations.

pub mod auth;
pub mod goal;
pub mod network;
pub mod provider;
pub mod workout;

pub use auth::AuthAdapter;
pub use goal::GoalAdapter;
pub use network::NetworkAdapter;
pub use provider::ServiceProvider;
pub use workout::WorkoutAdapter;
