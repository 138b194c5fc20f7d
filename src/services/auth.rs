// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session/auth service.
//!
//! Owns the signed-in user and the session token. Both live in a single
//! `Option<SessionState>` behind one lock, so the service is either signed
//! out (neither set) or signed in (both set), never in between.
//!
//! There is no identity backend: sign-in and sign-up accept any
//! credentials, fabricate the user locally and mint a signed session token
//! for it. Input checks belong to the caller.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Credentials, User};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// Display name given to users created by sign-in.
const DEFAULT_DISPLAY_NAME: &str = "Test User";

/// Session token claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

#[derive(Debug, Clone)]
struct SessionState {
    user: User,
    token: String,
}

/// Session/auth service. Clones share the same session.
#[derive(Clone)]
pub struct AuthService {
    session: Arc<RwLock<Option<SessionState>>>,
    signing_key: Arc<[u8]>,
    session_ttl_secs: u64,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Arc::new(RwLock::new(None)),
            signing_key: Arc::from(config.session_signing_key.as_slice()),
            session_ttl_secs: config.session_ttl_secs,
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.as_ref().map(|s| s.user.clone())
    }

    /// Current session token, or `NotAuthenticated` when signed out.
    pub async fn token(&self) -> Result<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(AppError::NotAuthenticated)
    }

    /// Start a session for `credentials`. Any credentials are accepted.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: credentials.email.clone(),
            name: DEFAULT_DISPLAY_NAME.to_string(),
        };
        self.start_session(user, AppError::SignInFailed).await
    }

    /// Create an account and start a session for it.
    pub async fn sign_up(&self, credentials: &Credentials, name: &str) -> Result<User> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: credentials.email.clone(),
            name: name.trim().to_string(),
        };
        self.start_session(user, AppError::SignUpFailed).await
    }

    /// Clear the session unconditionally.
    pub async fn sign_out(&self) -> Result<()> {
        let previous = self.session.write().await.take();
        if let Some(state) = previous {
            tracing::info!(user_id = %state.user.id, "Signed out");
        }
        Ok(())
    }

    async fn start_session(&self, user: User, failure: AppError) -> Result<User> {
        let token =
            create_session_token(&user, &self.signing_key, self.session_ttl_secs).map_err(|e| {
                tracing::error!(error = %e, "Failed to issue session token");
                failure
            })?;

        *self.session.write().await = Some(SessionState {
            user: user.clone(),
            token,
        });

        tracing::info!(user_id = %user.id, email = %user.email, "Session started");
        Ok(user)
    }
}

/// Create a signed session token for a user.
pub fn create_session_token(
    user: &User,
    signing_key: &[u8],
    ttl_secs: u64,
) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let exp = now
        .checked_add(ttl_secs)
        .and_then(|exp| usize::try_from(exp).ok())
        .ok_or_else(|| anyhow::anyhow!("Session lifetime of {}s is out of range", ttl_secs))?;

    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        iat: usize::try_from(now)?,
        exp,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}
