//! Typed wrappers for the Resonance REST resources
//!
//! Each wrapper holds a shared [`HttpClient`] and maps one method to one
//! endpoint. Optional arguments become query parameters only when present.
//!
//! # Example
//!
//! ```rust,no_run
//! use resonance_api::ValidatorsApi;
//! use resonance_client::{ClientConfig, HttpClient};
//! use std::sync::Arc;
//!
//! async fn example() -> resonance_client::Result<()> {
//!     let client = Arc::new(HttpClient::new(ClientConfig::new("https://api.resonance.network"))?);
//!     let validators = ValidatorsApi::new(client);
//!
//!     let history = validators.history("0xabc", Some(10), None).await?;
//!     println!("{} epochs", history.history.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod delegators;
pub mod global;
pub mod referrals;
pub mod slashing;
pub mod types;
pub mod validators;

pub use delegators::DelegatorsApi;
pub use global::GlobalApi;
pub use referrals::ReferralsApi;
pub use resonance_client::{Error, HttpClient, Result};
pub use slashing::SlashingApi;
pub use types::*;
pub use validators::ValidatorsApi;

use resonance_client::QueryParams;

/// `limit`/`offset` paging parameters
pub(crate) fn page_params(limit: Option<u32>, offset: Option<u32>) -> QueryParams {
    QueryParams::new().opt_param("limit", limit).opt_param("offset", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_drop_absent() {
        let params = page_params(None, Some(20));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("offset").map(ToString::to_string), Some("20".to_string()));
        assert!(page_params(None, None).is_empty());
    }
}
