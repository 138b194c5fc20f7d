// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::adapters::AuthAdapter;
use crate::error::AppError;
use crate::models::{Credentials, User};
use crate::view_models::{begin, fail, Loadable};
use std::sync::Arc;
use tokio::sync::watch;
use validator::Validate;

const SIGN_IN_FAILED: &str = "Failed to sign in. Please check your credentials.";
const SIGN_UP_FAILED: &str = "Failed to create account. Please try again.";

/// Sign-in screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Loadable for AuthState {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    fn set_error(&mut self, message: Option<String>) {
        self.error_message = message;
    }
}

/// Sign-in / sign-up / sign-out screen state.
pub struct AuthViewModel {
    auth: Arc<dyn AuthAdapter>,
    state: watch::Sender<AuthState>,
}

impl AuthViewModel {
    pub fn new(auth: Arc<dyn AuthAdapter>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { auth, state }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Mirror the session as it currently stands (e.g. on screen load).
    pub async fn refresh(&self) {
        let user = self.auth.current_user().await;
        let is_authenticated = self.auth.is_authenticated().await;
        self.state.send_modify(|s| {
            s.current_user = user;
            s.is_authenticated = is_authenticated;
        });
    }

    /// Sign in. Malformed input is reported without reaching the session.
    pub async fn sign_in(&self, email: &str, password: &str) {
        begin(&self.state);
        let credentials = Credentials::new(email.trim(), password);
        if let Err(e) = check_credentials(&credentials) {
            fail(&self.state, SIGN_IN_FAILED, &e);
            return;
        }
        match self.auth.sign_in(&credentials).await {
            Ok(user) => self.signed_in(user),
            Err(e) => fail(&self.state, SIGN_IN_FAILED, &e),
        }
    }

    pub async fn sign_up(&self, name: &str, email: &str, password: &str) {
        begin(&self.state);
        let credentials = Credentials::new(email.trim(), password);
        let checked = if name.trim().is_empty() {
            Err(AppError::Validation("name is required".to_string()))
        } else {
            check_credentials(&credentials)
        };
        if let Err(e) = checked {
            fail(&self.state, SIGN_UP_FAILED, &e);
            return;
        }
        match self.auth.sign_up(&credentials, name).await {
            Ok(user) => self.signed_in(user),
            Err(e) => fail(&self.state, SIGN_UP_FAILED, &e),
        }
    }

    pub async fn sign_out(&self) {
        begin(&self.state);
        match self.auth.sign_out().await {
            Ok(()) => self.state.send_modify(|s| {
                s.current_user = None;
                s.is_authenticated = false;
                s.is_loading = false;
            }),
            Err(e) => fail(&self.state, "Failed to sign out.", &e),
        }
    }

    fn signed_in(&self, user: User) {
        self.state.send_modify(|s| {
            s.current_user = Some(user);
            s.is_authenticated = true;
            s.is_loading = false;
        });
    }
}

/// Well-formed email and a non-empty password.
fn check_credentials(credentials: &Credentials) -> Result<(), AppError> {
    credentials.validate()?;
    if credentials.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }
    Ok(())
}
