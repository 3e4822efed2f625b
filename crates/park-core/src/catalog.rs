//! Catalog Loading
//!
//! Response decoding and the per-view holder of the last-known-good
//! collections. The HTTP call itself lives in the browser crate.

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::{Attraction, Category};

/// Reject non-2xx responses
pub fn check_status(status: u16, url: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status {
            status,
            url: url.to_string(),
        })
    }
}

/// Decode a JSON array body into a collection
pub fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Status check then decode, for a complete response
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    url: &str,
    body: &str,
) -> Result<Vec<T>, FetchError> {
    check_status(status, url)?;
    decode_collection(body)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// One fetched collection with its load status and last error
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSlot<T> {
    status: LoadStatus,
    items: Vec<T>,
    error: Option<FetchError>,
}

impl<T> Default for CatalogSlot<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Loading,
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> CatalogSlot<T> {
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Apply a fetch result.
    ///
    /// Success replaces the whole collection. Failure keeps the previous
    /// items and records the error.
    pub fn apply(&mut self, result: Result<Vec<T>, FetchError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.error = Some(err);
                self.status = LoadStatus::Failed;
            }
        }
    }
}

/// Attractions and categories, loaded independently
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub attractions: CatalogSlot<Attraction>,
    pub categories: CatalogSlot<Category>,
}
