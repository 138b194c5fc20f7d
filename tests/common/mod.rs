// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use fitjourney::config::Config;
use fitjourney::db::{KeyValueStore, MemoryStore};
use fitjourney::error::{AppError, Result};
use fitjourney::models::{Credentials, Goal, GoalType, Workout, WorkoutType};
use fitjourney::ServiceProvider;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Provider over a fresh in-memory store. Returns the store for inspection.
#[allow(dead_code)]
pub fn test_provider() -> (ServiceProvider, MemoryStore) {
    let store = MemoryStore::new();
    let provider = ServiceProvider::new(&Config::test_default(), Arc::new(store.clone()));
    (provider, store)
}

/// Provider whose session is already signed in.
#[allow(dead_code)]
pub async fn signed_in_provider() -> (ServiceProvider, MemoryStore) {
    let (provider, store) = test_provider();
    provider
        .auth_adapter()
        .sign_in(&Credentials::new("test@example.com", "password"))
        .await
        .expect("Mock sign-in should succeed");
    (provider, store)
}

#[allow(dead_code)]
pub fn sample_workout(id: &str) -> Workout {
    Workout {
        id: id.to_string(),
        name: format!("Workout {}", id),
        duration: 1500.0,
        calories_burned: 220.0,
        date: Utc.with_ymd_and_hms(2024, 3, 2, 6, 45, 0).unwrap(),
        workout_type: WorkoutType::Cycling,
    }
}

#[allow(dead_code)]
pub fn sample_goal(id: &str) -> Goal {
    Goal {
        id: id.to_string(),
        name: format!("Goal {}", id),
        target_value: 20.0,
        current_value: 5.0,
        unit: "km".to_string(),
        deadline: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        goal_type: GoalType::Distance,
    }
}

/// Store whose every operation fails.
#[allow(dead_code)]
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(AppError::Storage("disk unavailable".to_string()))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<()> {
        Err(AppError::Storage("disk unavailable".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(AppError::Storage("disk unavailable".to_string()))
    }
}

/// Serve a single canned HTTP response on a local port.
///
/// Returns the base URL and a receiver yielding the raw request text.
#[allow(dead_code)]
pub async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (format!("http://{}", addr), rx)
}

/// Read request head plus a `Content-Length` body.
#[allow(dead_code)]
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
