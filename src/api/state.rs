//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use super::shell::AppShell;
use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::router::RouteTable;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Project catalog served by the API and checked for deep links
    pub catalog: Catalog,
    /// Route table used to classify page requests
    pub routes: &'static RouteTable,
    /// HTML document served for every page route
    pub shell: Arc<AppShell>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with the global catalog and route table, loading the
    /// shell from the configured static directory
    pub fn new(config: ServerConfig) -> Self {
        let shell = AppShell::load(&config.static_dir);
        Self::with_parts(Catalog::global(), RouteTable::global(), shell, config)
    }

    /// Create state from explicit parts
    pub fn with_parts(
        catalog: Catalog,
        routes: &'static RouteTable,
        shell: AppShell,
        config: ServerConfig,
    ) -> Self {
        Self {
            catalog,
            routes,
            shell: Arc::new(shell),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
