// src/services/listing_store.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read listings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("listings file {path} is not a valid catalog: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Catalog {
    listings: Vec<Value>,
}

/// Read-only housing catalog. Listing records are opaque and kept in file order.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<Value>,
}

impl ListingStore {
    pub fn from_listings(listings: Vec<Value>) -> Self {
        Self { listings }
    }

    /// Load a `{ "listings": [...] }` document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Catalog = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), count = catalog.listings.len(), "listings loaded");
        Ok(Self::from_listings(catalog.listings))
    }

    pub fn listings(&self) -> &[Value] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
