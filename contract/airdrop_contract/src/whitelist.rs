use soroban_sdk::{Address, Env, Vec};

use crate::events::{self, WhitelistUpdatedEvent};
use crate::storage_types::{DataKey, PersistentKey, TTL_PERSISTENT};

/// Funding tokens accepted for new campaigns.
///
/// Only consulted when a campaign is created: de-listing a token never locks
/// funds that are already escrowed.
pub fn is_whitelisted(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::Whitelisted(token.clone()))
        .unwrap_or(false)
}

/// Callers are responsible for authorization.
pub fn set_whitelisted(env: &Env, token: &Address, whitelisted: bool) {
    let key = PersistentKey::Whitelisted(token.clone());
    env.storage().persistent().set(&key, &whitelisted);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);

    let mut tokens = whitelisted_tokens(env);
    let position = tokens.first_index_of(token.clone());
    match (whitelisted, position) {
        (true, None) => tokens.push_back(token.clone()),
        (false, Some(index)) => {
            tokens.remove(index);
        }
        _ => {}
    }
    env.storage().instance().set(&DataKey::WhitelistedTokens, &tokens);

    events::emit_whitelist_updated(
        env,
        WhitelistUpdatedEvent {
            token: token.clone(),
            whitelisted,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn whitelisted_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::WhitelistedTokens)
        .unwrap_or_else(|| Vec::new(env))
}
