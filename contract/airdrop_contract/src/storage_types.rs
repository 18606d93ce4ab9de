use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Paused,
    NextCampaignId,
    WhitelistedTokens,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Allocation(CampaignId, Address),
    Whitelisted(Address),
    Permission(Address, Permission),
}

pub type CampaignId = u64;

/// How recipients become entitled to a share of the escrowed pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignType {
    /// Any address may claim; entitlement is reserved on first claim as
    /// `min(per_recipient_cap, unreserved pool)`.
    Open = 0,
    /// Only addresses granted an allocation by the creator may claim.
    FixedList = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Pending = 0,
    Active = 1,
    Completed = 2,
    Cancelled = 3,
}

impl CampaignStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CampaignStatus::Completed | CampaignStatus::Cancelled)
    }
}

/// Operations the owner may delegate to operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Permission {
    ManageWhitelist = 0,
    Cancel = 1,
    Pause = 2,
}

// Descriptive payload, returned verbatim and never read by accounting
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignMetadata {
    pub name: String,
    pub image: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub funding_token: Address,
    pub creator: Address,
    pub campaign_type: CampaignType,
    pub total_allocated: i128,
    pub per_recipient_cap: i128,
    pub start_time: u64,
    pub cliff_duration: u64,
    pub total_duration: u64,
    pub status: CampaignStatus,
    pub metadata: CampaignMetadata,
    pub total_entitled: i128,          // Sum of allocation entitlements
    pub total_claimed: i128,           // Sum of allocation claims
    pub recipient_count: u32,
    pub created_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub entitled_amount: i128,
    pub claimed_amount: i128,
    pub last_claim_at: Option<u64>,
}

// Custom error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AirdropError {
    Unauthorized = 1,
    TokenNotWhitelisted = 2,
    InvalidScheduleParameters = 3,
    InsufficientAllowance = 4,
    InsufficientBalance = 5,
    CampaignNotFound = 6,
    InvalidState = 7,
    NothingToClaim = 8,
    ArithmeticOverflow = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
    ContractPaused = 12,
}

// Constants
pub const FIRST_CAMPAIGN_ID: CampaignId = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
