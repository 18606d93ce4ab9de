use soroban_sdk::{Address, Env};

use crate::storage_types::{AirdropError, DataKey, Permission, PersistentKey, TTL_PERSISTENT};

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, AirdropError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(AirdropError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

/// Whether `caller` may perform operations guarded by `permission`.
///
/// The owner holds every permission; operators hold only what was granted.
pub fn is_authorized(
    env: &Env,
    caller: &Address,
    permission: Permission,
) -> Result<bool, AirdropError> {
    if *caller == get_owner(env)? {
        return Ok(true);
    }
    Ok(env
        .storage()
        .persistent()
        .get(&PersistentKey::Permission(caller.clone(), permission))
        .unwrap_or(false))
}

pub fn require_permission(
    env: &Env,
    caller: &Address,
    permission: Permission,
) -> Result<(), AirdropError> {
    caller.require_auth();
    if !is_authorized(env, caller, permission)? {
        return Err(AirdropError::Unauthorized);
    }
    Ok(())
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AirdropError> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        return Err(AirdropError::Unauthorized);
    }
    Ok(())
}

pub fn set_permission(env: &Env, operator: &Address, permission: Permission, granted: bool) {
    let key = PersistentKey::Permission(operator.clone(), permission);
    if granted {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_paused(env: &Env) -> Result<bool, AirdropError> {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .ok_or(AirdropError::NotInitialized)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn check_not_paused(env: &Env) -> Result<(), AirdropError> {
    if is_paused(env)? {
        return Err(AirdropError::ContractPaused);
    }
    Ok(())
}
