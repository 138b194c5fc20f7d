// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-screen observable state.
//!
//! Every view model publishes its state through a `tokio::sync::watch`
//! channel. Each operation follows the same protocol: set loading and clear
//! the error, call the adapter, mirror the result (or store a message on
//! failure, keeping prior data), clear loading. Errors never propagate to
//! the caller.

pub mod auth;
pub mod dashboard;
pub mod goal;
pub mod workout;

pub use auth::{AuthState, AuthViewModel};
pub use dashboard::{DashboardSummary, DashboardViewModel};
pub use goal::GoalViewModel;
pub use workout::WorkoutViewModel;

use crate::error::AppError;
use tokio::sync::watch;

/// State of a screen showing a list of entities.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }
}

/// Common loading/error transitions for a published state.
pub(crate) trait Loadable {
    fn set_loading(&mut self, loading: bool);
    fn set_error(&mut self, message: Option<String>);
}

impl<T> Loadable for ListState<T> {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    fn set_error(&mut self, message: Option<String>) {
        self.error_message = message;
    }
}

/// Mark an operation as started.
pub(crate) fn begin<S: Loadable>(state: &watch::Sender<S>) {
    state.send_modify(|s| {
        s.set_loading(true);
        s.set_error(None);
    });
}

/// Record a failed operation, leaving existing data untouched.
pub(crate) fn fail<S: Loadable>(state: &watch::Sender<S>, message: &str, error: &AppError) {
    tracing::warn!(error = %error, user_message = message, "View operation failed");
    state.send_modify(|s| {
        s.set_error(Some(message.to_string()));
        s.set_loading(false);
    });
}
