#![no_std]

//! Vesting airdrop campaigns.
//!
//! A creator escrows a whitelisted funding token into a campaign; recipients
//! claim their share as it unlocks along a cliff + linear schedule. Funds are
//! always pulled before a campaign is persisted, and claim/cancel bookkeeping
//! is written before any token leaves the contract.

mod admin;
mod campaign;
mod events;
mod storage_types;
mod whitelist;

pub mod vesting;


use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Vec};

use crate::campaign::CampaignParams;
use crate::events::{
    AllocationGrantedEvent, CampaignCancelledEvent, CampaignCompletedEvent, CampaignCreatedEvent,
    ClaimRecordedEvent, ContractUpgradedEvent, OwnershipTransferredEvent, PauseChangedEvent,
    PermissionUpdatedEvent,
};
pub use crate::storage_types::{
    AirdropError, Allocation, Campaign, CampaignId, CampaignMetadata, CampaignStatus,
    CampaignType, Permission,
};
use crate::storage_types::{DataKey, FIRST_CAMPAIGN_ID, TTL_INSTANCE};

#[contract]
pub struct AirdropContract;

#[contractimpl]
impl AirdropContract {
    /// Initialize the contract with its owner
    pub fn initialize(env: Env, owner: Address) -> Result<(), AirdropError> {
        if admin::has_owner(&env) {
            return Err(AirdropError::AlreadyInitialized);
        }

        admin::set_owner(&env, &owner);
        admin::set_paused(&env, false);
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &FIRST_CAMPAIGN_ID);
        env.storage()
            .instance()
            .set(&DataKey::WhitelistedTokens, &Vec::<Address>::new(&env));

        extend_instance(&env);
        Ok(())
    }

    /// Create a campaign, escrowing `total_amount` of `funding_token` from
    /// `creator`. The creator must have approved this contract for at least
    /// `total_amount` beforehand.
    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        env: Env,
        creator: Address,
        funding_token: Address,
        campaign_type: CampaignType,
        total_amount: i128,
        per_recipient_cap: i128,
        start_time: u64,
        total_duration: u64,
        cliff_duration: u64,
        metadata: CampaignMetadata,
    ) -> Result<CampaignId, AirdropError> {
        creator.require_auth();
        admin::check_not_paused(&env)?;

        if !whitelist::is_whitelisted(&env, &funding_token) {
            return Err(AirdropError::TokenNotWhitelisted);
        }

        let now = env.ledger().timestamp();
        let params = CampaignParams {
            funding_token: funding_token.clone(),
            campaign_type,
            total_allocated: total_amount,
            per_recipient_cap,
            start_time,
            total_duration,
            cliff_duration,
            metadata,
        };
        campaign::validate_params(&params, now)?;

        pull_funds(&env, &funding_token, &creator, total_amount)?;
        let campaign_id = campaign::create_campaign(&env, &creator, params, now)?;

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id,
                creator,
                funding_token,
                campaign_type,
                amount: total_amount,
                start_time,
                timestamp: now,
            },
        );

        extend_instance(&env);
        Ok(campaign_id)
    }

    /// Grant `recipient` an entitlement in a fixed-list campaign. Only the
    /// campaign creator may grant, and never beyond the per-recipient cap or
    /// the escrowed pool.
    pub fn grant_allocation(
        env: Env,
        creator: Address,
        campaign_id: CampaignId,
        recipient: Address,
        amount: i128,
    ) -> Result<Allocation, AirdropError> {
        creator.require_auth();
        admin::check_not_paused(&env)?;

        let campaign = campaign::load_campaign(&env, campaign_id)?;
        if campaign.creator != creator {
            return Err(AirdropError::Unauthorized);
        }

        let now = env.ledger().timestamp();
        let allocation = campaign::grant_allocation(&env, campaign_id, &recipient, amount, now)?;

        events::emit_allocation_granted(
            &env,
            AllocationGrantedEvent {
                campaign_id,
                recipient,
                amount,
                entitled_amount: allocation.entitled_amount,
                timestamp: now,
            },
        );

        extend_instance(&env);
        Ok(allocation)
    }

    /// Claim everything unlocked for `recipient` since their last claim.
    pub fn claim(env: Env, recipient: Address, campaign_id: CampaignId) -> Result<i128, AirdropError> {
        recipient.require_auth();
        admin::check_not_paused(&env)?;

        let now = env.ledger().timestamp();
        let outcome = campaign::record_claim(&env, campaign_id, &recipient, now)?;

        let token_client = token::Client::new(&env, &outcome.funding_token);
        token_client.transfer(&env.current_contract_address(), &recipient, &outcome.amount);

        log!(&env, "claim recorded", campaign_id, outcome.amount);
        events::emit_claim_recorded(
            &env,
            ClaimRecordedEvent {
                campaign_id,
                recipient,
                token: outcome.funding_token,
                amount: outcome.amount,
                claimed_total: outcome.claimed_total,
                timestamp: now,
            },
        );
        if outcome.completed {
            events::emit_campaign_completed(
                &env,
                CampaignCompletedEvent {
                    campaign_id,
                    total_claimed: outcome.campaign_total_claimed,
                    timestamp: now,
                },
            );
        }

        extend_instance(&env);
        Ok(outcome.amount)
    }

    /// Cancel a campaign and return its unclaimed remainder to the creator.
    pub fn cancel(env: Env, caller: Address, campaign_id: CampaignId) -> Result<i128, AirdropError> {
        admin::require_permission(&env, &caller, Permission::Cancel)?;

        let outcome = campaign::cancel(&env, campaign_id)?;

        if outcome.refund > 0 {
            let token_client = token::Client::new(&env, &outcome.funding_token);
            token_client.transfer(&env.current_contract_address(), &outcome.creator, &outcome.refund);
        }

        log!(&env, "campaign cancelled", campaign_id, outcome.refund);
        events::emit_campaign_cancelled(
            &env,
            CampaignCancelledEvent {
                campaign_id,
                creator: outcome.creator,
                token: outcome.funding_token,
                amount: outcome.refund,
                timestamp: env.ledger().timestamp(),
            },
        );

        extend_instance(&env);
        Ok(outcome.refund)
    }

    // Admin functions

    /// Add or remove `token` from the funding-token whitelist.
    pub fn set_whitelist_token(
        env: Env,
        caller: Address,
        token: Address,
        whitelisted: bool,
    ) -> Result<(), AirdropError> {
        admin::require_permission(&env, &caller, Permission::ManageWhitelist)?;
        whitelist::set_whitelisted(&env, &token, whitelisted);
        extend_instance(&env);
        Ok(())
    }

    pub fn grant_permission(
        env: Env,
        owner: Address,
        operator: Address,
        permission: Permission,
    ) -> Result<(), AirdropError> {
        Self::update_permission(&env, &owner, operator, permission, true)
    }

    pub fn revoke_permission(
        env: Env,
        owner: Address,
        operator: Address,
        permission: Permission,
    ) -> Result<(), AirdropError> {
        Self::update_permission(&env, &owner, operator, permission, false)
    }

    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), AirdropError> {
        admin::require_owner(&env, &owner)?;
        new_owner.require_auth();

        admin::set_owner(&env, &new_owner);
        extend_instance(&env);

        events::emit_ownership_transferred(
            &env,
            OwnershipTransferredEvent {
                previous_owner: owner,
                new_owner,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), AirdropError> {
        admin::require_permission(&env, &caller, Permission::Pause)?;
        admin::set_paused(&env, true);
        extend_instance(&env);
        events::emit_paused(
            &env,
            PauseChangedEvent {
                caller,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), AirdropError> {
        admin::require_permission(&env, &caller, Permission::Pause)?;
        admin::set_paused(&env, false);
        extend_instance(&env);
        events::emit_unpaused(
            &env,
            PauseChangedEvent {
                caller,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Replace the contract code in place; storage is preserved.
    pub fn upgrade(env: Env, owner: Address, new_wasm_hash: BytesN<32>) -> Result<(), AirdropError> {
        admin::require_owner(&env, &owner)?;

        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
        extend_instance(&env);

        events::emit_contract_upgraded(
            &env,
            ContractUpgradedEvent {
                wasm_hash: new_wasm_hash,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    // View functions

    pub fn is_whitelisted(env: Env, token: Address) -> bool {
        whitelist::is_whitelisted(&env, &token)
    }

    pub fn get_whitelisted_tokens(env: Env) -> Vec<Address> {
        whitelist::whitelisted_tokens(&env)
    }

    /// The campaign with its status as of the current ledger time.
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, AirdropError> {
        let mut campaign = campaign::load_campaign(&env, campaign_id)?;
        campaign.status = campaign::effective_status(&campaign, env.ledger().timestamp());
        Ok(campaign)
    }

    pub fn get_allocation(env: Env, campaign_id: CampaignId, recipient: Address) -> Option<Allocation> {
        campaign::load_allocation(&env, campaign_id, &recipient)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        campaign::campaign_count(&env)
    }

    pub fn unlocked_amount(
        env: Env,
        campaign_id: CampaignId,
        recipient: Address,
    ) -> Result<i128, AirdropError> {
        campaign::preview_unlocked(&env, campaign_id, &recipient, env.ledger().timestamp())
    }

    pub fn claimable_amount(
        env: Env,
        campaign_id: CampaignId,
        recipient: Address,
    ) -> Result<i128, AirdropError> {
        campaign::preview_claimable(&env, campaign_id, &recipient, env.ledger().timestamp())
    }

    pub fn get_owner(env: Env) -> Result<Address, AirdropError> {
        admin::get_owner(&env)
    }

    pub fn is_paused(env: Env) -> Result<bool, AirdropError> {
        admin::is_paused(&env)
    }

    pub fn has_permission(
        env: Env,
        caller: Address,
        permission: Permission,
    ) -> Result<bool, AirdropError> {
        admin::is_authorized(&env, &caller, permission)
    }
}

impl AirdropContract {
    fn update_permission(
        env: &Env,
        owner: &Address,
        operator: Address,
        permission: Permission,
        granted: bool,
    ) -> Result<(), AirdropError> {
        admin::require_owner(env, owner)?;
        admin::set_permission(env, &operator, permission, granted);
        extend_instance(env);

        events::emit_permission_updated(
            env,
            PermissionUpdatedEvent {
                operator,
                permission,
                granted,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

// Escrows `amount` from `creator`; the pull uses the creator's allowance to
// this contract so a missing approval fails before any state is written.
fn pull_funds(
    env: &Env,
    funding_token: &Address,
    creator: &Address,
    amount: i128,
) -> Result<(), AirdropError> {
    let token_client = token::Client::new(env, funding_token);
    let contract = env.current_contract_address();

    if token_client.allowance(creator, &contract) < amount {
        return Err(AirdropError::InsufficientAllowance);
    }
    if token_client.balance(creator) < amount {
        return Err(AirdropError::InsufficientBalance);
    }

    token_client.transfer_from(&contract, creator, &contract, &amount);
    Ok(())
}
