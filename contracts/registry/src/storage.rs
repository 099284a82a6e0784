use soroban_sdk::{Address, Env};
use crate::types::StorageKey;

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Asset Counter ==========

pub fn get_asset_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::AssetCounter).unwrap_or(0)
}

pub fn increment_asset_counter(env: &Env) -> u64 {
    let counter = get_asset_counter(env) + 1;
    env.storage().instance().set(&StorageKey::AssetCounter, &counter);
    counter
}

// ========== Ownership ==========

pub fn get_owner(env: &Env, asset_id: u64) -> Option<Address> {
    let key = StorageKey::Owner(asset_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

pub fn set_owner(env: &Env, asset_id: u64, owner: &Address) {
    let key = StorageKey::Owner(asset_id);
    env.storage().persistent().set(&key, owner);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Approvals ==========

pub fn get_approved(env: &Env, asset_id: u64) -> Option<Address> {
    env.storage().persistent().get(&StorageKey::Approved(asset_id))
}

pub fn set_approved(env: &Env, asset_id: u64, spender: &Address) {
    let key = StorageKey::Approved(asset_id);
    env.storage().persistent().set(&key, spender);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn clear_approved(env: &Env, asset_id: u64) {
    env.storage().persistent().remove(&StorageKey::Approved(asset_id));
}
