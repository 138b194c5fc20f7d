// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal service behavior against an in-memory store.

use fitjourney::db::{keys, KeyValueStore};
use fitjourney::error::AppError;
use fitjourney::models::Goal;

mod common;
use common::{sample_goal, signed_in_provider, test_provider};

#[tokio::test]
async fn test_first_fetch_seeds_examples() {
    let (provider, _) = signed_in_provider().await;

    let goals = provider.goal_adapter().fetch_goals().await.unwrap();

    let names: Vec<_> = goals.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Lose Weight", "Daily Steps", "Weekly Workouts"]);
    assert!((goals[0].progress() - 0.35).abs() < 1e-9);
}

#[tokio::test]
async fn test_two_adds_on_empty_collection() {
    let (provider, store) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    assert!(!store.contains_key(keys::GOALS));

    goals.add_goal(sample_goal("g1")).await.unwrap();
    goals.add_goal(sample_goal("g2")).await.unwrap();

    let fetched = goals.fetch_goals().await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched.iter().find(|g| g.id == "g1"), Some(&sample_goal("g1")));
    assert_eq!(fetched.iter().find(|g| g.id == "g2"), Some(&sample_goal("g2")));
}

#[tokio::test]
async fn test_update_progress_replaces_only_current_value() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    let original = sample_goal("g1");
    goals.add_goal(original.clone()).await.unwrap();
    goals.add_goal(sample_goal("g2")).await.unwrap();

    let updated = goals.update_goal_progress("g1", 12.5).await.unwrap();
    assert_eq!(updated.current_value, 12.5);

    let fetched = goals.fetch_goals().await.unwrap();
    let matching: Vec<&Goal> = fetched.iter().filter(|g| g.id == "g1").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(*matching[0], original.with_current_value(12.5));
    assert_eq!(fetched.iter().find(|g| g.id == "g2"), Some(&sample_goal("g2")));
}

#[tokio::test]
async fn test_update_progress_past_target_clamps_progress() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    goals.add_goal(sample_goal("g1")).await.unwrap();

    let updated = goals.update_goal_progress("g1", 30.0).await.unwrap();

    assert_eq!(updated.progress(), 1.0);
    assert!(updated.is_completed());
}

#[tokio::test]
async fn test_update_progress_unknown_id_is_not_found() {
    let (provider, store) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    goals.add_goal(sample_goal("g1")).await.unwrap();
    let before = store.get(keys::GOALS).await.unwrap();

    let result = goals.update_goal_progress("missing", 1.0).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(store.get(keys::GOALS).await.unwrap(), before);
}

#[tokio::test]
async fn test_update_progress_rejects_negative_value() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    goals.add_goal(sample_goal("g1")).await.unwrap();

    let result = goals.update_goal_progress("g1", -3.0).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_update_progress_rejects_non_finite_value() {
    let (provider, store) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    goals.add_goal(sample_goal("g1")).await.unwrap();
    let before = store.get(keys::GOALS).await.unwrap();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = goals.update_goal_progress("g1", bad).await;
        assert!(matches!(result, Err(AppError::Validation(_))), "value {}", bad);
    }

    assert_eq!(store.get(keys::GOALS).await.unwrap(), before);
    let fetched = goals.fetch_goals().await.expect("Collection should stay readable");
    assert_eq!(fetched, vec![sample_goal("g1")]);
}

#[tokio::test]
async fn test_non_finite_goal_rejected_on_add() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    goals.add_goal(sample_goal("g1")).await.unwrap();

    let mut infinite_target = sample_goal("inf");
    infinite_target.target_value = f64::INFINITY;
    let mut nan_current = sample_goal("nan");
    nan_current.current_value = f64::NAN;

    for goal in [infinite_target, nan_current] {
        let result = goals.add_goal(goal).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    let fetched = goals.fetch_goals().await.expect("Collection should stay readable");
    assert_eq!(fetched, vec![sample_goal("g1")]);
}

#[tokio::test]
async fn test_zero_target_rejected_on_add() {
    let (provider, store) = signed_in_provider().await;
    let mut goal = sample_goal("zero");
    goal.target_value = 0.0;

    let result = provider.goal_adapter().add_goal(goal).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(!store.contains_key(keys::GOALS));
}

#[tokio::test]
async fn test_delete_then_fetch_has_no_goal() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();
    goals.fetch_goals().await.unwrap();

    goals.delete_goal("2").await.unwrap();

    let fetched = goals.fetch_goals().await.unwrap();
    assert!(fetched.iter().all(|g| g.id != "2"));
    assert_eq!(fetched.len(), 2);
}

#[tokio::test]
async fn test_emptied_collection_is_not_reseeded() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();

    for goal in goals.fetch_goals().await.unwrap() {
        goals.delete_goal(&goal.id).await.unwrap();
    }

    assert!(goals.fetch_goals().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_signed_out_operations_fail_without_writes() {
    let (provider, store) = test_provider();
    let goals = provider.goal_adapter();

    assert!(matches!(goals.fetch_goals().await, Err(AppError::NotAuthenticated)));
    assert!(matches!(
        goals.add_goal(sample_goal("g1")).await,
        Err(AppError::NotAuthenticated)
    ));
    assert!(matches!(
        goals.update_goal_progress("g1", 1.0).await,
        Err(AppError::NotAuthenticated)
    ));
    assert!(matches!(goals.delete_goal("g1").await, Err(AppError::NotAuthenticated)));

    assert!(!store.contains_key(keys::GOALS));
}

#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    let (provider, _) = signed_in_provider().await;
    let goals = provider.goal_adapter();

    let mut handles = vec![];
    for i in 0..10 {
        let goals = goals.clone();
        handles.push(tokio::spawn(async move {
            goals.add_goal(sample_goal(&format!("g{}", i))).await
        }));
    }
    for handle in handles {
        handle.await.expect("Task join failed").expect("Add failed");
    }

    let fetched = goals.fetch_goals().await.unwrap();
    assert_eq!(fetched.len(), 10);
    for i in 0..10 {
        let id = format!("g{}", i);
        assert!(fetched.iter().any(|g| g.id == id), "{} missing", id);
    }
}
