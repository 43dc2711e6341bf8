//! Network-wide statistics and leaderboards

use crate::page_params;
use crate::types::{
    GlobalNetworkResponse, LeaderboardDelegatorResponse, LeaderboardValidatorResponse,
    NetworkAprBreakdownResponse, NetworkAprResponse,
};
use resonance_client::{HttpClient, Result};
use std::sync::Arc;

/// Global network queries
#[derive(Debug, Clone)]
pub struct GlobalApi {
    client: Arc<HttpClient>,
}

impl GlobalApi {
    /// Create the wrapper over a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Network totals and the top-delegator ranking
    pub async fn stats(&self) -> Result<GlobalNetworkResponse> {
        self.client.fetch_json("/eth/v1/global", None).await
    }

    /// Network APR as reported under `/global`
    pub async fn network_apr_from_global(&self) -> Result<NetworkAprResponse> {
        self.client.fetch_json("/eth/v1/global/network_apr", None).await
    }

    /// Network APR
    pub async fn network_apr(&self) -> Result<NetworkAprResponse> {
        self.client.fetch_json("/eth/v1/network/apr", None).await
    }

    /// Reward and inflation inputs of the network APR
    pub async fn network_apr_breakdown(&self) -> Result<NetworkAprBreakdownResponse> {
        self.client.fetch_json("/eth/v1/network/apr/breakdown", None).await
    }

    /// Delegators ranked by stake, paged
    pub async fn leaderboard_delegators(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<LeaderboardDelegatorResponse>> {
        let params = page_params(limit, offset);
        self.client.fetch_json("/eth/v1/leaderboard/delegators", Some(&params)).await
    }

    /// Validators ranked by APR, paged
    pub async fn leaderboard_validators(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<LeaderboardValidatorResponse>> {
        let params = page_params(limit, offset);
        self.client.fetch_json("/eth/v1/leaderboard/validators", Some(&params)).await
    }
}
