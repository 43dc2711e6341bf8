//! Referral endpoints (`/eth/v1/referrals`)
//!
//! Creating, applying, deleting and unlinking referrals change server state
//! and need a bearer token on the client.

use crate::types::{
    MessageResponse, ReferralApplyRequest, ReferralCreateRequest, ReferralDelegatorResponse,
    ReferralValidateResponse, ReferralValidatorResponse,
};
use resonance_client::{HttpClient, QueryParams, Result};
use std::sync::Arc;

const BASE: &str = "/eth/v1/referrals";

/// Referral code management
#[derive(Debug, Clone)]
pub struct ReferralsApi {
    client: Arc<HttpClient>,
}

impl ReferralsApi {
    /// Create the wrapper over a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Check whether a code can be used
    pub async fn validate(&self, referral_code: &str) -> Result<ReferralValidateResponse> {
        let params = QueryParams::new().param("code", referral_code);
        self.client.fetch_json(&format!("{BASE}/validate"), Some(&params)).await
    }

    /// Issue a referral code for a validator
    pub async fn create(&self, request: &ReferralCreateRequest) -> Result<ReferralValidatorResponse> {
        let response: ReferralValidatorResponse = self.client.submit_json(BASE, Some(request)).await?;
        tracing::info!(
            validator = %response.validator_address,
            code = %response.referral_code,
            "referral code created"
        );
        Ok(response)
    }

    /// Link a delegator to a code
    pub async fn apply(&self, request: &ReferralApplyRequest) -> Result<MessageResponse> {
        self.client.submit_json(&format!("{BASE}/apply"), Some(request)).await
    }

    /// Delete a code
    pub async fn delete(&self, referral_code: &str) -> Result<MessageResponse> {
        self.client.remove_resource(&format!("{BASE}/{referral_code}")).await
    }

    /// Remove a delegator's referral link
    pub async fn unlink(&self, delegator_address: &str) -> Result<MessageResponse> {
        self.client.remove_resource(&format!("{BASE}/unlink/{delegator_address}")).await
    }

    /// Referral a delegator signed up with
    pub async fn delegator_referral(&self, delegator_address: &str) -> Result<ReferralDelegatorResponse> {
        self.client.fetch_json(&format!("{BASE}/delegators/{delegator_address}"), None).await
    }

    /// A validator's code and referred delegators
    pub async fn validator_referral(&self, validator_address: &str) -> Result<ReferralValidatorResponse> {
        self.client.fetch_json(&format!("{BASE}/validators/{validator_address}"), None).await
    }
}
