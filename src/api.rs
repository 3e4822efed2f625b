//! Catalog Service Bindings
//!
//! HTTP calls to the catalog API. Every failure comes back as a
//! `FetchError`; nothing here panics.

use gloo_net::http::Request;
use park_core::catalog::decode_response;
use park_core::{ApiConfig, Attraction, Category, Endpoint, FetchError};
use serde::de::DeserializeOwned;

async fn get_collection<T: DeserializeOwned>(
    config: &ApiConfig,
    endpoint: Endpoint,
) -> Result<Vec<T>, FetchError> {
    let url = config.url(endpoint);
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode_response(response.status(), &url, &body)
}

pub async fn fetch_attractions(config: &ApiConfig) -> Result<Vec<Attraction>, FetchError> {
    get_collection(config, Endpoint::Activities).await
}

pub async fn fetch_categories(config: &ApiConfig) -> Result<Vec<Category>, FetchError> {
    get_collection(config, Endpoint::Categories).await
}

/// Log the outcome of a catalog fetch
pub fn report<T>(kind: &str, result: &Result<Vec<T>, FetchError>) {
    match result {
        Ok(items) => log::info!("loaded {} {}", items.len(), kind),
        Err(err) => log::error!("failed to load {}: {}", kind, err),
    }
}
