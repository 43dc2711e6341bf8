//! Slashing events (`/eth/v1/slashing`)

use crate::types::SlashingEventResponse;
use resonance_client::{HttpClient, QueryParams, Result};
use std::sync::Arc;

/// Slashing queries
#[derive(Debug, Clone)]
pub struct SlashingApi {
    client: Arc<HttpClient>,
}

impl SlashingApi {
    /// Create the wrapper over a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Slashing events, optionally for one validator, paged
    ///
    /// An empty `validator_address` is treated as no filter.
    pub async fn events(
        &self,
        validator_address: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<SlashingEventResponse>> {
        let params = QueryParams::new()
            .opt_param("validator_address", validator_address.filter(|address| !address.is_empty()))
            .opt_param("limit", limit)
            .opt_param("offset", offset);
        self.client.fetch_json("/eth/v1/slashing/events", Some(&params)).await
    }
}
