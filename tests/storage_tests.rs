// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence through the file-backed store.

use fitjourney::config::Config;
use fitjourney::db::{keys, CollectionStore, FileStore, KeyValueStore};
use fitjourney::error::AppError;
use fitjourney::models::{Credentials, Goal, Workout};
use fitjourney::ServiceProvider;
use std::sync::Arc;

mod common;
use common::{sample_goal, sample_workout};

#[tokio::test]
async fn test_file_store_get_set_remove() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));

    assert_eq!(store.get("k").await.unwrap(), None);
    store.set("k", b"hello".to_vec()).await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some(b"hello".to_vec()));
    assert!(dir.path().join("nested").join("k.json").exists());

    store.remove("k").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);
    store.remove("k").await.unwrap();
}

#[tokio::test]
async fn test_failed_replace_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    // A non-empty directory where the value file belongs cannot be replaced
    let blocker = dir.path().join("k.json");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("inner"), b"x").unwrap();

    let result = store.set("k", b"hello".to_vec()).await;

    assert!(matches!(result, Err(AppError::Storage(_))));
    assert!(!dir.path().join("k.json.tmp").exists());
    assert!(blocker.is_dir());
}

#[tokio::test]
async fn test_collections_round_trip_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let collections = CollectionStore::new(Arc::new(FileStore::new(dir.path())));

    let workouts = vec![sample_workout("b"), sample_workout("a")];
    let goals = vec![sample_goal("2"), sample_goal("1"), sample_goal("3")];
    collections.save(keys::WORKOUTS, &workouts).await.unwrap();
    collections.save(keys::GOALS, &goals).await.unwrap();

    let loaded_workouts: Vec<Workout> = collections.load(keys::WORKOUTS).await.unwrap().unwrap();
    let loaded_goals: Vec<Goal> = collections.load(keys::GOALS).await.unwrap().unwrap();

    assert_eq!(loaded_workouts, workouts);
    assert_eq!(loaded_goals, goals);
}

#[tokio::test]
async fn test_stored_layout_uses_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let collections = CollectionStore::new(Arc::new(store.clone()));

    collections
        .save(keys::WORKOUTS, &[sample_workout("w1")])
        .await
        .unwrap();

    let raw = store.get(keys::WORKOUTS).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json[0]["id"], "w1");
    assert_eq!(json[0]["caloriesBurned"], 220.0);
    assert_eq!(json[0]["type"], "cycling");
    assert_eq!(json[0]["date"], "2024-03-02T06:45:00Z");
}

#[tokio::test]
async fn test_data_survives_a_new_provider() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::test_default()
    };
    let credentials = Credentials::new("test@example.com", "pw");

    {
        let provider = ServiceProvider::from_config(&config);
        provider.auth_adapter().sign_in(&credentials).await.unwrap();
        provider
            .goal_adapter()
            .add_goal(sample_goal("persisted"))
            .await
            .unwrap();
    }

    let provider = ServiceProvider::from_config(&config);
    provider.auth_adapter().sign_in(&credentials).await.unwrap();
    let goals = provider.goal_adapter().fetch_goals().await.unwrap();

    assert_eq!(goals, vec![sample_goal("persisted")]);
}
