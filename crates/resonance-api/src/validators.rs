//! Validator endpoints (`/eth/v1/validators`)

use crate::page_params;
use crate::types::{
    SlashingEventResponse, ValidatorAprResponse, ValidatorDelegatorsResponse,
    ValidatorDetailResponse, ValidatorEpochResponse, ValidatorHistoryResponse,
    ValidatorListResponse, ValidatorMetricsResponse, ValidatorStakeBreakdownResponse,
    ValidatorWithdrawalsResponse,
};
use resonance_client::{HttpClient, QueryParams, Result};
use std::sync::Arc;

const BASE: &str = "/eth/v1/validators";

/// Validator queries
#[derive(Debug, Clone)]
pub struct ValidatorsApi {
    client: Arc<HttpClient>,
}

impl ValidatorsApi {
    /// Create the wrapper over a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// List validators
    pub async fn list(&self) -> Result<ValidatorListResponse> {
        self.client.fetch_json(BASE, None).await
    }

    /// Validator detail
    pub async fn get(&self, address: &str) -> Result<ValidatorDetailResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}"), None).await
    }

    /// Delegators staking with a validator
    pub async fn delegators(&self, address: &str) -> Result<ValidatorDelegatorsResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/delegators"), None).await
    }

    /// Self versus delegated stake
    pub async fn stake_breakdown(&self, address: &str) -> Result<ValidatorStakeBreakdownResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/stake"), None).await
    }

    /// Rewards, stakes and distribution for one epoch
    pub async fn epoch(&self, address: &str, epoch: u64) -> Result<ValidatorEpochResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/epochs/{epoch}"), None).await
    }

    /// Per-epoch history, optionally bounded
    pub async fn history(
        &self,
        address: &str,
        from_epoch: Option<u64>,
        to_epoch: Option<u64>,
    ) -> Result<ValidatorHistoryResponse> {
        let params = QueryParams::new()
            .opt_param("from_epoch", from_epoch)
            .opt_param("to_epoch", to_epoch);
        self.client.fetch_json(&format!("{BASE}/{address}/history"), Some(&params)).await
    }

    /// Reward withdrawals, paged
    pub async fn withdrawals(
        &self,
        address: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ValidatorWithdrawalsResponse> {
        let params = page_params(limit, offset);
        self.client.fetch_json(&format!("{BASE}/{address}/withdrawals"), Some(&params)).await
    }

    /// Uptime, block and APR metrics
    pub async fn metrics(&self, address: &str) -> Result<ValidatorMetricsResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/metrics"), None).await
    }

    /// Slashing events of one validator
    pub async fn slashing(&self, address: &str) -> Result<Vec<SlashingEventResponse>> {
        self.client.fetch_json(&format!("{BASE}/{address}/slashing"), None).await
    }

    /// Validator APR
    pub async fn apr(&self, address: &str) -> Result<ValidatorAprResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/apr"), None).await
    }
}
