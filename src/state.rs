//! Shared application state for all routes.

use crate::store::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    /// Fixed at startup.
    pub max_per_page: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, max_per_page: u32) -> Self {
        AppState { store, max_per_page }
    }
}
