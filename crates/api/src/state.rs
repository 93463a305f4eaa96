use std::sync::Arc;

use movies_core::origin::OriginPolicy;
use movies_core::store::MovieStore;
use tokio::sync::RwLock;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The movie collection. Each handler takes the lock once per operation.
    pub store: Arc<RwLock<MovieStore>>,
    /// Cross-origin allow-list, fixed for the process lifetime.
    pub origin_policy: Arc<OriginPolicy>,
}

impl AppState {
    pub fn new(store: MovieStore, origin_policy: OriginPolicy) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            origin_policy: Arc::new(origin_policy),
        }
    }
}
