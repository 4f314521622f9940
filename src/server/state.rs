//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Throttle gate holding per-caller request windows
//! - Pagination defaults

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::PaginationConfig, middleware::throttle::ThrottleGate};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<ThrottleGate>` is a reference-counted pointer, so every clone counts into the
///   same windows
/// - `PaginationConfig` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Fixed-window throttle shared by every request.
    pub throttle: Arc<ThrottleGate>,

    /// Default and maximum `limit` for paginated collections.
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `throttle` - Throttle gate shared with the background sweeper
    /// - `pagination` - Pagination defaults
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        throttle: Arc<ThrottleGate>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            db,
            throttle,
            pagination,
        }
    }
}
