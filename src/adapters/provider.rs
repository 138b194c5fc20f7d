// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wiring of the concrete service graph.

use crate::adapters::{AuthAdapter, GoalAdapter, NetworkAdapter, WorkoutAdapter};
use crate::config::Config;
use crate::db::{CollectionStore, FileStore, KeyValueStore};
use crate::services::{AuthService, GoalService, HttpClient, WorkoutService};
use crate::view_models::{AuthViewModel, DashboardViewModel, GoalViewModel, WorkoutViewModel};
use std::sync::Arc;

/// Owns one instance of each service and hands out capability handles.
///
/// All services share one session and one [`CollectionStore`], so build a
/// single provider per process.
pub struct ServiceProvider {
    auth: Arc<AuthService>,
    workouts: Arc<WorkoutService>,
    goals: Arc<GoalService>,
    network: Arc<HttpClient>,
}

impl ServiceProvider {
    pub fn new(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        let auth = Arc::new(AuthService::new(config));
        let collections = CollectionStore::new(store);

        let workouts = Arc::new(WorkoutService::new(auth.clone(), collections.clone()));
        let goals = Arc::new(GoalService::new(auth.clone(), collections));
        let network =
            Arc::new(HttpClient::new(config.api_base_url.clone()).with_auth((*auth).clone()));

        Self {
            auth,
            workouts,
            goals,
            network,
        }
    }

    /// Provider backed by a [`FileStore`] in the configured data directory.
    pub fn from_config(config: &Config) -> Self {
        tracing::info!(data_dir = %config.data_dir.display(), "Using file store");
        Self::new(config, Arc::new(FileStore::new(config.data_dir.clone())))
    }

    pub fn auth_adapter(&self) -> Arc<dyn AuthAdapter> {
        self.auth.clone()
    }

    pub fn workout_adapter(&self) -> Arc<dyn WorkoutAdapter> {
        self.workouts.clone()
    }

    pub fn goal_adapter(&self) -> Arc<dyn GoalAdapter> {
        self.goals.clone()
    }

    pub fn network_adapter(&self) -> Arc<dyn NetworkAdapter> {
        self.network.clone()
    }

    pub fn auth_view_model(&self) -> AuthViewModel {
        AuthViewModel::new(self.auth_adapter())
    }

    pub fn workout_view_model(&self) -> WorkoutViewModel {
        WorkoutViewModel::new(self.workout_adapter())
    }

    pub fn goal_view_model(&self) -> GoalViewModel {
        GoalViewModel::new(self.goal_adapter())
    }

    pub fn dashboard_view_model(&self) -> DashboardViewModel {
        DashboardViewModel::new(self.workout_view_model(), self.goal_view_model())
    }
}
