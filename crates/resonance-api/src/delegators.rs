//! Delegator endpoints (`/eth/v1/delegators`)

use crate::page_params;
use crate::types::{
    DelegatorDetailResponse, DelegatorListResponse, DelegatorRewardsResponse,
    DelegatorStakesResponse, DelegatorUnbondingResponse, DelegatorValidatorsResponse,
    DelegatorWithdrawalsResponse,
};
use resonance_client::{HttpClient, Result};
use std::sync::Arc;

const BASE: &str = "/eth/v1/delegators";

/// Delegator queries
#[derive(Debug, Clone)]
pub struct DelegatorsApi {
    client: Arc<HttpClient>,
}

impl DelegatorsApi {
    /// Create the wrapper over a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// List delegators
    pub async fn list(&self) -> Result<DelegatorListResponse> {
        self.client.fetch_json(BASE, None).await
    }

    /// Delegator detail
    pub async fn get(&self, address: &str) -> Result<DelegatorDetailResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}"), None).await
    }

    /// Stakes per validator
    pub async fn stakes(&self, address: &str) -> Result<DelegatorStakesResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/stakes"), None).await
    }

    /// Reward payouts, paged
    pub async fn rewards(
        &self,
        address: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DelegatorRewardsResponse> {
        let params = page_params(limit, offset);
        self.client.fetch_json(&format!("{BASE}/{address}/rewards"), Some(&params)).await
    }

    /// Reward withdrawals, paged
    pub async fn withdrawals(
        &self,
        address: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DelegatorWithdrawalsResponse> {
        let params = page_params(limit, offset);
        self.client.fetch_json(&format!("{BASE}/{address}/withdrawals"), Some(&params)).await
    }

    /// Pending unbonding
    pub async fn unbonding(&self, address: &str) -> Result<DelegatorUnbondingResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/unbonding"), None).await
    }

    /// Validators the delegator stakes with
    pub async fn validators(&self, address: &str) -> Result<DelegatorValidatorsResponse> {
        self.client.fetch_json(&format!("{BASE}/{address}/validators"), None).await
    }
}
