// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::error::Result;
use crate::models::{Credentials, User};
use crate::services::AuthService;
use async_trait::async_trait;

/// Session capability.
#[async_trait]
pub trait AuthAdapter: Send + Sync {
    async fn is_authenticated(&self) -> bool;
    async fn current_user(&self) -> Option<User>;
    async fn token(&self) -> Result<String>;
    async fn sign_in(&self, credentials: &Credentials) -> Result<User>;
    async fn sign_up(&self, credentials: &Credentials, name: &str) -> Result<User>;
    async fn sign_out(&self) -> Result<()>;
}

#[async_trait]
impl AuthAdapter for AuthService {
    async fn is_authenticated(&self) -> bool {
        AuthService::is_authenticated(self).await
    }

    async fn current_user(&self) -> Option<User> {
        AuthService::current_user(self).await
    }

    async fn token(&self) -> Result<String> {
        AuthService::token(self).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<User> {
        AuthService::sign_in(self, credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials, name: &str) -> Result<User> {
        AuthService::sign_up(self, credentials, name).await
    }

    async fn sign_out(&self) -> Result<()> {
        AuthService::sign_out(self).await
    }
}
