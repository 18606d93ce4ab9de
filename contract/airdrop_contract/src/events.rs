use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

use crate::storage_types::{CampaignId, CampaignType, Permission};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub funding_token: Address,
    pub campaign_type: CampaignType,
    pub amount: i128,
    pub start_time: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationGrantedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub amount: i128,
    pub entitled_amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRecordedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
    pub claimed_total: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCompletedEvent {
    pub campaign_id: CampaignId,
    pub total_claimed: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCancelledEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistUpdatedEvent {
    pub token: Address,
    pub whitelisted: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionUpdatedEvent {
    pub operator: Address,
    pub permission: Permission,
    pub granted: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractUpgradedEvent {
    pub wasm_hash: BytesN<32>,
    pub timestamp: u64,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_allocation_granted(env: &Env, event: AllocationGrantedEvent) {
    env.events().publish(
        (Symbol::new(env, "allocation_granted"), event.campaign_id),
        event,
    );
}

pub fn emit_claim_recorded(env: &Env, event: ClaimRecordedEvent) {
    env.events().publish(
        (Symbol::new(env, "claim_recorded"), event.campaign_id),
        event,
    );
}

pub fn emit_campaign_completed(env: &Env, event: CampaignCompletedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_completed"), event.campaign_id),
        event,
    );
}

pub fn emit_campaign_cancelled(env: &Env, event: CampaignCancelledEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_cancelled"), event.campaign_id),
        event,
    );
}

pub fn emit_whitelist_updated(env: &Env, event: WhitelistUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "whitelist_updated"),),
        event,
    );
}

pub fn emit_permission_updated(env: &Env, event: PermissionUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "permission_updated"),),
        event,
    );
}

pub fn emit_ownership_transferred(env: &Env, event: OwnershipTransferredEvent) {
    env.events().publish(
        (Symbol::new(env, "ownership_transferred"),),
        event,
    );
}

pub fn emit_paused(env: &Env, event: PauseChangedEvent) {
    env.events().publish((Symbol::new(env, "paused"),), event);
}

pub fn emit_unpaused(env: &Env, event: PauseChangedEvent) {
    env.events().publish((Symbol::new(env, "unpaused"),), event);
}

pub fn emit_contract_upgraded(env: &Env, event: ContractUpgradedEvent) {
    env.events().publish(
        (Symbol::new(env, "contract_upgraded"),),
        event,
    );
}
