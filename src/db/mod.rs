// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer (local key-value store).

pub mod collection;
pub mod store;

pub use collection::CollectionStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Storage keys as constants.
pub mod keys {
    pub const WORKOUTS: &str = "com.fitjourney.workouts";
    pub const GOALS: &str = "com.fitjourney.goals";
}
