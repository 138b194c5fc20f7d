// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitJourney demo client
//!
//! Wires the service graph against the local file store, signs in, loads
//! the dashboard and prints what the screens would show.

use fitjourney::{
    config::Config,
    time_utils::{format_duration, format_utc_rfc3339},
    ServiceProvider,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config = Config::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting FitJourney client");

    let provider = ServiceProvider::from_config(&config);

    let email =
        std::env::var("FITJOURNEY_EMAIL").unwrap_or_else(|_| "test@example.com".to_string());
    let auth = provider.auth_view_model();
    auth.sign_in(&email, "password").await;
    let auth_state = auth.state();
    if let Some(message) = auth_state.error_message {
        return Err(message.into());
    }

    let dashboard = provider.dashboard_view_model();
    dashboard.load().await;

    for workout in &dashboard.workouts().state().items {
        println!(
            "{}  {:<20} {:<15} {:>7} {:>6.0} kcal",
            format_utc_rfc3339(workout.date),
            workout.name,
            workout.workout_type.display_name(),
            format_duration(workout.duration),
            workout.calories_burned
        );
    }
    for goal in &dashboard.goals().state().items {
        println!(
            "{:<20} {:>8.1} / {:<8.1} {:<8} {:>5.0}%",
            goal.name,
            goal.current_value,
            goal.target_value,
            goal.unit,
            goal.progress() * 100.0
        );
    }

    let summary = dashboard.summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    auth.sign_out().await;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitjourney=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
