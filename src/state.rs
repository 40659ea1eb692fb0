// src/state.rs
use std::sync::Arc;

use crate::services::completion::CompletionClient;
use crate::services::listing_store::ListingStore;

pub type SharedState = Arc<AppState>;

/// Built once at startup and never mutated afterwards.
pub struct AppState {
    pub listings: ListingStore,
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(listings: ListingStore, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            listings,
            completion,
        }
    }
}
