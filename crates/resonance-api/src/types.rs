//! Wire types for the Resonance REST API
//!
//! Token amounts are decimal strings as sent by the server; they can exceed
//! the range of any native integer. Counts, epochs and block numbers are
//! plain integers. Timestamps are Unix seconds.

use serde::{Deserialize, Serialize};

// =============================================================================
// Validator Types
// =============================================================================

/// Validator detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorDetailResponse {
    /// Validator address
    pub validator_address: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Commission as a fraction
    pub commission_rate: f64,
    /// Lifecycle status (e.g., "active", "jailed")
    pub status: String,
    /// Operator's own stake
    pub self_stake: String,
    /// Stake delegated by others
    pub delegators_stake: String,
    /// Self plus delegated stake
    pub total_stake: String,
    /// Uptime as reported by the server
    pub uptime: String,
    /// Blocks missed
    pub missed_blocks: u64,
    /// Blocks signed
    pub signed_blocks: u64,
    /// Number of delegators
    pub total_delegators: u64,
    /// Rewards withdrawn to date
    pub withdrawn_rewards_total: String,
}

/// Validator listing summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorListResponse {
    /// Address
    pub address: String,
    /// Count
    pub count: u64,
}

/// One delegator's stake with a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorStakeInfo {
    /// Delegator address
    pub delegator_address: String,
    /// Staked amount
    pub stake: String,
    /// Share of the validator's delegated stake
    pub percentage: String,
}

/// Delegators of a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDelegatorsResponse {
    /// Validator address
    pub validator_address: String,
    /// Number of delegators
    pub total_delegators: u64,
    /// Per-delegator stakes
    pub delegators: Vec<DelegatorStakeInfo>,
}

/// Stake split between operator and delegators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorStakeBreakdownResponse {
    /// Validator address
    pub validator_address: String,
    /// Operator's own stake
    pub self_stake: String,
    /// Stake delegated by others
    pub delegators_stake: String,
    /// Self plus delegated stake
    pub total_stake: String,
    /// Self stake as a percentage of the total
    pub self_stake_percent: String,
}

/// Reward split for one epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochReward {
    /// Reward before commission
    pub reward_gross: String,
    /// Commission rate applied
    pub commission_rate: f64,
    /// Commission taken by the operator
    pub commission_fee: String,
    /// Remainder shared among delegators
    pub delegator_pool: String,
}

/// Stakes at the end of an epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochStakes {
    /// Operator's own stake
    pub self_stake: String,
    /// Stake delegated by others
    pub delegators_stake: String,
    /// Total stake of the validator
    pub total_stake_validator: String,
}

/// How an epoch's reward was distributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochDistribution {
    /// Operator's share of the delegator pool for its own stake
    pub self_reward_from_pool: String,
    /// Operator's total reward
    pub validator_total_reward: String,
    /// Reward paid to delegators
    pub delegators_total_reward: String,
}

/// A delegator's unclaimed reward for an epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnclaimedDelegator {
    /// Delegator address
    pub delegator_address: String,
    /// Staked amount
    pub stake: String,
    /// Reward earned
    pub reward: String,
    /// Reward not yet claimed
    pub unclaimed_reward: String,
}

/// Unclaimed rewards for an epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochUnclaimed {
    /// Operator's unclaimed reward
    pub unclaimed_validator_reward: String,
    /// Sum of delegators' unclaimed rewards
    pub unclaimed_delegators_reward_total: String,
    /// Per-delegator unclaimed rewards
    pub delegators: Vec<UnclaimedDelegator>,
}

/// Validator detail for a single epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorEpochResponse {
    /// Validator address
    pub validator_address: String,
    /// Epoch number
    pub epoch: u64,
    /// Reward split
    pub reward: EpochReward,
    /// Stakes
    pub stakes: EpochStakes,
    /// Distribution
    pub distribution: EpochDistribution,
    /// Unclaimed rewards
    pub unclaimed: EpochUnclaimed,
}

/// One epoch of validator history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorHistoryItem {
    /// Epoch number
    pub epoch: u64,
    /// Reward earned
    pub reward: String,
    /// Total stake
    pub total_stake: String,
    /// Uptime as reported by the server
    pub uptime: String,
    /// Blocks missed
    pub missed_blocks: u64,
}

/// Validator history over an epoch range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorHistoryResponse {
    /// Validator address
    pub validator_address: String,
    /// First epoch included
    pub from_epoch: u64,
    /// Last epoch included
    pub to_epoch: u64,
    /// One entry per epoch
    pub history: Vec<ValidatorHistoryItem>,
}

/// A reward withdrawal transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Transaction hash
    pub tx_hash: String,
    /// Amount withdrawn
    pub amount: String,
    /// Unix seconds
    pub timestamp: i64,
    /// Block number
    pub block_num: u64,
}

/// Reward withdrawals of a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorWithdrawalsResponse {
    /// Validator address
    pub validator_address: String,
    /// Sum of all withdrawals
    pub total_withdrawn: String,
    /// Withdrawal transactions
    pub withdrawals: Vec<Withdrawal>,
}

/// Performance metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorMetricsResponse {
    /// Validator address
    pub validator_address: String,
    /// Uptime ratio
    pub uptime: f64,
    /// Blocks missed
    pub missed_blocks: u64,
    /// Blocks signed
    pub signed_blocks: u64,
    /// Blocks in the measurement window
    pub total_blocks: u64,
    /// Annual percentage rate
    pub apr: f64,
    /// Total stake
    pub total_stake: String,
    /// Number of delegators
    pub total_delegators: u64,
}

/// Validator APR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorAprResponse {
    /// Validator address
    pub validator_address: String,
    /// APR as a fraction
    pub apr_decimal: f64,
    /// APR formatted as a percentage
    pub apr_percent: String,
}

// =============================================================================
// Delegator Types
// =============================================================================

/// Stake held with one validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveValidator {
    /// Validator address
    pub validator_address: String,
    /// Staked amount
    pub stake: String,
}

/// Pending unbonding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbondingInfo {
    /// Amount being unbonded
    pub amount: String,
    /// Unix seconds
    pub unbonding_start: i64,
    /// Unix seconds
    pub unbonding_end: i64,
}

/// Delegator detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorDetailResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Total stake across validators
    pub total_stake: String,
    /// Per-validator stakes
    pub active_validators: Vec<ActiveValidator>,
    /// Rewards earned to date
    pub total_rewards: String,
    /// Rewards withdrawn to date
    pub withdrawn_rewards_total: String,
    /// Pending unbonding, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbonding: Option<UnbondingInfo>,
}

/// Delegator listing summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorListResponse {
    /// Address
    pub address: String,
    /// Count
    pub count: u64,
}

/// A delegator's stake with one validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorValidatorStake {
    /// Validator address
    pub validator_address: String,
    /// Staked amount
    pub stake: String,
    /// Share of the delegator's total stake
    pub percentage: String,
}

/// Stakes of a delegator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorStakesResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Total stake
    pub total_stake: String,
    /// Per-validator stakes
    pub stakes: Vec<DelegatorValidatorStake>,
}

/// A reward payout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorReward {
    /// Validator that paid the reward
    pub validator_address: String,
    /// Epoch number
    pub epoch: u64,
    /// Amount
    pub amount: String,
    /// Unix seconds
    pub timestamp: i64,
}

/// Rewards of a delegator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorRewardsResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Sum of all rewards
    pub total_rewards: String,
    /// Reward payouts
    pub rewards: Vec<DelegatorReward>,
}

/// Reward withdrawals of a delegator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorWithdrawalsResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Sum of all withdrawals
    pub total_withdrawn: String,
    /// Withdrawal transactions
    pub withdrawals: Vec<Withdrawal>,
}

/// Unbonding status of a delegator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorUnbondingResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Whether an unbonding is pending
    pub has_unbonding: bool,
    /// Pending unbonding, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbonding: Option<UnbondingInfo>,
}

/// Validators a delegator stakes with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorValidatorsResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Number of validators
    pub total_validators: u64,
    /// Per-validator stakes
    pub validators: Vec<ActiveValidator>,
}

// =============================================================================
// Referral Types
// =============================================================================

/// Request body for creating a referral code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralCreateRequest {
    /// Validator issuing the code
    pub validator_address: String,
    /// Maximum number of uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quota: Option<u32>,
    /// Days until the code expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<u32>,
}

impl ReferralCreateRequest {
    /// Create a request with no quota or expiry
    pub fn new(validator_address: impl Into<String>) -> Self {
        Self { validator_address: validator_address.into(), max_quota: None, expires_in_days: None }
    }

    /// Limit the number of uses
    pub fn with_max_quota(mut self, max_quota: u32) -> Self {
        self.max_quota = Some(max_quota);
        self
    }

    /// Expire the code after `days`
    pub fn with_expires_in_days(mut self, days: u32) -> Self {
        self.expires_in_days = Some(days);
        self
    }
}

/// Request body for applying a referral code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralApplyRequest {
    /// Code to apply
    pub referral_code: String,
    /// Delegator being referred
    pub delegator_address: String,
}

/// Referral code validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralValidateResponse {
    /// Whether the code can be used
    pub is_valid: bool,
    /// Normalized code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    /// Reason when invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Referral a delegator signed up with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralDelegatorResponse {
    /// Delegator address
    pub delegator_address: String,
    /// Validator that issued the code
    pub referred_by_validator: String,
    /// Code used
    pub referral_code_used: String,
}

/// A validator's referral code and the delegators it brought in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralValidatorResponse {
    /// Validator address
    pub validator_address: String,
    /// Code
    pub referral_code: String,
    /// Referred delegator addresses
    pub delegators: Vec<String>,
    /// Number of referred delegators
    pub total_referred: u64,
}

/// Acknowledgement carrying only a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Server message
    pub message: String,
}

// =============================================================================
// Slashing Types
// =============================================================================

/// A slashing event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashingEventResponse {
    /// Slashed validator
    pub validator_address: String,
    /// Reason (e.g., "double_sign", "downtime")
    pub reason: String,
    /// Block the slash happened at
    pub block_height: u64,
    /// Amount slashed
    pub penalty_amount: String,
    /// Unix seconds, when jailed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jailed_until: Option<i64>,
    /// Unix seconds
    pub timestamp: i64,
}

// =============================================================================
// Global Types
// =============================================================================

/// Entry in the top-delegator ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDelegatorRank {
    /// 1-based rank
    pub rank: u32,
    /// Delegator address
    pub address: String,
    /// Total stake
    pub total_stake: String,
}

/// Network-wide statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalNetworkResponse {
    /// Total stake on the network
    pub total_network_stake: String,
    /// Number of validators
    pub total_validators: u64,
    /// Number of delegators
    pub total_delegators: u64,
    /// Current epoch
    pub epoch: u64,
    /// Current block height
    pub block_height: u64,
    /// Number of jailed validators
    pub jailed_validators: u64,
    /// Top delegators by stake
    pub ranking_top_delegators: Vec<TopDelegatorRank>,
}

/// Network APR
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkAprResponse {
    /// APR as a fraction
    pub network_apr: f64,
}

/// Inputs of the network APR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAprBreakdownResponse {
    /// Reward per block
    pub reward_per_block: String,
    /// Reward per epoch
    pub reward_per_epoch: String,
    /// Reward per year
    pub reward_per_year: String,
    /// Epochs per day
    pub epochs_per_day: f64,
    /// Effective inflation as a fraction
    pub effective_inflation: f64,
}

/// Delegator leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardDelegatorResponse {
    /// 1-based rank
    pub rank: u32,
    /// Delegator address
    pub address: String,
    /// Stake
    pub stake: String,
}

/// Validator leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardValidatorResponse {
    /// 1-based rank
    pub rank: u32,
    /// Validator address
    pub address: String,
    /// APR as a fraction
    pub apr_decimal: f64,
    /// Total stake
    pub total_stake: String,
    /// Operator's own stake
    pub self_stake: String,
}
