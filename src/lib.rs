// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitJourney: service and session layer of a fitness-tracking client.
//!
//! This crate provides session handling, workout and goal services over a
//! local key-value store, capability adapters, and the observable view
//! state the screens render.

pub mod adapters;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod view_models;

pub use adapters::ServiceProvider;
