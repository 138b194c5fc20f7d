// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::error::Result;
use crate::services::HttpClient;
use async_trait::async_trait;
use serde_json::Value;

/// Remote API capability over untyped JSON documents.
#[async_trait]
pub trait NetworkAdapter: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Value>;
    async fn post(&self, path: &str, body: Value) -> Result<Value>;
    async fn put(&self, path: &str, body: Value) -> Result<Value>;
    async fn delete(&self, path: &str) -> Result<()>;
}

#[async_trait]
impl NetworkAdapter for HttpClient {
    async fn fetch(&self, path: &str) -> Result<Value> {
        Ok(HttpClient::fetch(self, path).await?)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        Ok(HttpClient::post(self, path, &body).await?)
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        Ok(HttpClient::put(self, path, &body).await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        Ok(HttpClient::delete(self, path).await?)
    }
}
