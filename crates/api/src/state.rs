use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::{DeskDispatcher, PositionTracker, QueueAttacher, QueueRouter};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the pool and every engine hold only a pool
/// handle and copyable settings.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: waitline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Enter-service routing.
    pub router: QueueRouter,
    /// Live queue positions.
    pub positions: PositionTracker,
    /// Direct queue attach with eligibility check.
    pub attacher: QueueAttacher,
    /// Desk and queue call-next.
    pub dispatcher: DeskDispatcher,
}

impl AppState {
    /// Wire every engine to the pool, using the window modes from `config`.
    pub fn new(pool: waitline_db::DbPool, config: ServerConfig) -> Self {
        let windows = config.windows;
        Self {
            router: QueueRouter::new(pool.clone(), windows.entry),
            positions: PositionTracker::new(pool.clone()),
            attacher: QueueAttacher::new(pool.clone(), windows.attach),
            dispatcher: DeskDispatcher::new(pool.clone(), windows.dispatch),
            config: Arc::new(config),
            pool,
        }
    }
}
