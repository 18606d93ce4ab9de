//! Campaign and allocation records.
//!
//! Every escrowed unit is accounted for on the campaign record:
//! `total_claimed <= total_entitled <= total_allocated` holds after each
//! write, and a campaign whose whole pool has been claimed is `Completed`.

use soroban_sdk::{log, Address, Env};

use crate::storage_types::{
    AirdropError, Allocation, Campaign, CampaignId, CampaignMetadata, CampaignStatus,
    CampaignType, DataKey, PersistentKey, FIRST_CAMPAIGN_ID, TTL_PERSISTENT,
};
use crate::vesting;

pub struct CampaignParams {
    pub funding_token: Address,
    pub campaign_type: CampaignType,
    pub total_allocated: i128,
    pub per_recipient_cap: i128,
    pub start_time: u64,
    pub total_duration: u64,
    pub cliff_duration: u64,
    pub metadata: CampaignMetadata,
}

pub struct ClaimOutcome {
    pub amount: i128,
    pub funding_token: Address,
    pub claimed_total: i128,
    pub campaign_total_claimed: i128,
    pub completed: bool,
}

pub struct CancelOutcome {
    pub refund: i128,
    pub funding_token: Address,
    pub creator: Address,
}

pub fn validate_params(params: &CampaignParams, now: u64) -> Result<(), AirdropError> {
    if params.total_duration == 0
        || params.cliff_duration > params.total_duration
        || params.start_time < now
        || params.total_allocated <= 0
        || params.per_recipient_cap <= 0
        || params.per_recipient_cap > params.total_allocated
    {
        return Err(AirdropError::InvalidScheduleParameters);
    }
    vesting::vesting_end(params.start_time, params.total_duration)?;
    Ok(())
}

/// Persists a campaign whose funds are already escrowed.
pub fn create_campaign(
    env: &Env,
    creator: &Address,
    params: CampaignParams,
    now: u64,
) -> Result<CampaignId, AirdropError> {
    validate_params(&params, now)?;

    let id = next_campaign_id(env);
    let status = if params.start_time > now {
        CampaignStatus::Pending
    } else {
        CampaignStatus::Active
    };

    let campaign = Campaign {
        id,
        funding_token: params.funding_token,
        creator: creator.clone(),
        campaign_type: params.campaign_type,
        total_allocated: params.total_allocated,
        per_recipient_cap: params.per_recipient_cap,
        start_time: params.start_time,
        cliff_duration: params.cliff_duration,
        total_duration: params.total_duration,
        status,
        metadata: params.metadata,
        total_entitled: 0,
        total_claimed: 0,
        recipient_count: 0,
        created_at: now,
    };

    save_campaign(env, &campaign);
    env.storage().instance().set(&DataKey::NextCampaignId, &(id + 1));

    Ok(id)
}

/// Reserves `amount` of a fixed-list campaign's pool for `recipient`.
pub fn grant_allocation(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
    amount: i128,
    now: u64,
) -> Result<Allocation, AirdropError> {
    let mut campaign = load_campaign(env, campaign_id)?;
    if campaign.status.is_terminal() || campaign.campaign_type != CampaignType::FixedList {
        return Err(AirdropError::InvalidState);
    }
    if amount <= 0 {
        return Err(AirdropError::InvalidScheduleParameters);
    }

    let (mut allocation, is_new) = match load_allocation(env, campaign_id, recipient) {
        Some(existing) => (existing, false),
        None => (new_allocation(campaign_id, recipient, 0), true),
    };

    let entitled = allocation
        .entitled_amount
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    let total_entitled = campaign
        .total_entitled
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    if entitled > campaign.per_recipient_cap || total_entitled > campaign.total_allocated {
        return Err(AirdropError::InvalidScheduleParameters);
    }

    allocation.entitled_amount = entitled;
    campaign.total_entitled = total_entitled;
    if is_new {
        campaign.recipient_count = campaign
            .recipient_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
    }
    campaign.status = effective_status(&campaign, now);

    save_allocation(env, &allocation);
    save_campaign(env, &campaign);

    Ok(allocation)
}

/// Marks everything unlocked for `recipient` as claimed and returns the
/// amount the caller must now transfer out of escrow.
pub fn record_claim(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
    now: u64,
) -> Result<ClaimOutcome, AirdropError> {
    let mut campaign = load_campaign(env, campaign_id)?;
    if campaign.status.is_terminal() {
        return Err(AirdropError::InvalidState);
    }

    let (mut allocation, is_new) = match load_allocation(env, campaign_id, recipient) {
        Some(existing) => (existing, false),
        None => match campaign.campaign_type {
            CampaignType::Open => {
                let entitled = open_entitlement(&campaign);
                if entitled == 0 {
                    log!(env, "open pool fully reserved", campaign_id);
                    return Err(AirdropError::NothingToClaim);
                }
                (new_allocation(campaign_id, recipient, entitled), true)
            }
            CampaignType::FixedList => return Err(AirdropError::NothingToClaim),
        },
    };

    let unlocked = unlocked_for(&campaign, allocation.entitled_amount, now)?;
    let amount = unlocked
        .checked_sub(allocation.claimed_amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    if amount <= 0 {
        return Err(AirdropError::NothingToClaim);
    }

    if is_new {
        campaign.total_entitled = campaign
            .total_entitled
            .checked_add(allocation.entitled_amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        campaign.recipient_count = campaign
            .recipient_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
    }
    campaign.total_claimed = campaign
        .total_claimed
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    // Conservation: claims can never outgrow the escrowed pool.
    if campaign.total_claimed > campaign.total_entitled
        || campaign.total_entitled > campaign.total_allocated
    {
        return Err(AirdropError::InvalidState);
    }

    allocation.claimed_amount = unlocked;
    allocation.last_claim_at = Some(now);

    let completed = campaign.total_claimed == campaign.total_allocated;
    campaign.status = if completed {
        CampaignStatus::Completed
    } else {
        effective_status(&campaign, now)
    };

    save_allocation(env, &allocation);
    save_campaign(env, &campaign);

    Ok(ClaimOutcome {
        amount,
        funding_token: campaign.funding_token,
        claimed_total: allocation.claimed_amount,
        campaign_total_claimed: campaign.total_claimed,
        completed,
    })
}

/// Closes the campaign and returns the unclaimed remainder owed to its creator.
pub fn cancel(env: &Env, campaign_id: CampaignId) -> Result<CancelOutcome, AirdropError> {
    let mut campaign = load_campaign(env, campaign_id)?;
    if campaign.status.is_terminal() {
        return Err(AirdropError::InvalidState);
    }

    let refund = campaign
        .total_allocated
        .checked_sub(campaign.total_claimed)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    campaign.status = CampaignStatus::Cancelled;
    save_campaign(env, &campaign);

    Ok(CancelOutcome {
        refund,
        funding_token: campaign.funding_token,
        creator: campaign.creator,
    })
}

/// Unlocked amount for `recipient` at `now`, including an Open campaign's
/// not-yet-reserved entitlement. Never writes.
pub fn preview_unlocked(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
    now: u64,
) -> Result<i128, AirdropError> {
    let campaign = load_campaign(env, campaign_id)?;
    let entitled = prospective_allocation(env, &campaign, recipient).entitled_amount;
    unlocked_for(&campaign, entitled, now)
}

/// What a `claim` by `recipient` at `now` would transfer; zero when the
/// campaign no longer accepts claims.
pub fn preview_claimable(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
    now: u64,
) -> Result<i128, AirdropError> {
    let campaign = load_campaign(env, campaign_id)?;
    if campaign.status.is_terminal() {
        return Ok(0);
    }
    let allocation = prospective_allocation(env, &campaign, recipient);
    let unlocked = unlocked_for(&campaign, allocation.entitled_amount, now)?;
    unlocked
        .checked_sub(allocation.claimed_amount)
        .ok_or(AirdropError::ArithmeticOverflow)
}

/// Status as of `now`; `Pending` campaigns become `Active` at `start_time`.
pub fn effective_status(campaign: &Campaign, now: u64) -> CampaignStatus {
    match campaign.status {
        CampaignStatus::Pending if now >= campaign.start_time => CampaignStatus::Active,
        status => status,
    }
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, AirdropError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(AirdropError::CampaignNotFound)
}

pub fn load_allocation(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
) -> Option<Allocation> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Allocation(campaign_id, recipient.clone()))
}

pub fn campaign_count(env: &Env) -> u64 {
    next_campaign_id(env) - FIRST_CAMPAIGN_ID
}

fn next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(FIRST_CAMPAIGN_ID)
}

fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn save_allocation(env: &Env, allocation: &Allocation) {
    let key = PersistentKey::Allocation(allocation.campaign_id, allocation.recipient.clone());
    env.storage().persistent().set(&key, allocation);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn new_allocation(campaign_id: CampaignId, recipient: &Address, entitled: i128) -> Allocation {
    Allocation {
        campaign_id,
        recipient: recipient.clone(),
        entitled_amount: entitled,
        claimed_amount: 0,
        last_claim_at: None,
    }
}

// Share of the unreserved pool a newcomer to an Open campaign would receive.
fn open_entitlement(campaign: &Campaign) -> i128 {
    let unreserved = campaign.total_allocated - campaign.total_entitled;
    campaign.per_recipient_cap.min(unreserved).max(0)
}

fn prospective_allocation(env: &Env, campaign: &Campaign, recipient: &Address) -> Allocation {
    match load_allocation(env, campaign.id, recipient) {
        Some(existing) => existing,
        None => {
            let entitled = match campaign.campaign_type {
                CampaignType::Open => open_entitlement(campaign),
                CampaignType::FixedList => 0,
            };
            new_allocation(campaign.id, recipient, entitled)
        }
    }
}

fn unlocked_for(campaign: &Campaign, entitled: i128, now: u64) -> Result<i128, AirdropError> {
    vesting::unlocked_amount(
        entitled,
        campaign.start_time,
        campaign.cliff_duration,
        campaign.total_duration,
        now,
    )
}
