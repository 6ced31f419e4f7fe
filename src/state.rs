//! Shared application state for all routes.

use crate::store::BlogStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
}

impl AppState {
    pub fn new<S: BlogStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
