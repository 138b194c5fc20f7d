// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the services, adapters and view models.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Sign in failed")]
    SignInFailed,

    #[error("Sign up failed")]
    SignUpFailed,

    #[error("Sign out failed")]
    SignOutFailed,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors caused by a missing or failed session.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            AppError::NotAuthenticated
                | AppError::SignInFailed
                | AppError::SignUpFailed
                | AppError::SignOutFailed
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Errors raised by the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response status: {0}")]
    InvalidResponse(u16),

    #[error("Failed to decode response: {0}")]
    DecodingFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, AppError>;
