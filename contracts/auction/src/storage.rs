use crate::types::{Auction, DataKey};
use soroban_sdk::{Address, Env};

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

pub fn has_auction(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Auction)
}

pub fn get_auction(env: &Env) -> Option<Auction> {
    env.storage().instance().get(&DataKey::Auction)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage().instance().set(&DataKey::Auction, auction);
}

pub fn get_pending_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::PendingTotal)
        .unwrap_or(0)
}

fn set_pending_total(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::PendingTotal, &total);
}

pub fn get_pending_return(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::PendingReturn(bidder.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key);
    if amount.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    amount.unwrap_or(0)
}

/// Adds `amount` to what the engine owes `bidder`.
pub fn credit_pending_return(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::PendingReturn(bidder.clone());
    let owed = get_pending_return(env, bidder) + amount;
    env.storage().persistent().set(&key, &owed);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    set_pending_total(env, get_pending_total(env) + amount);
}

/// Zeroes what the engine owes `bidder` and returns the previous balance.
pub fn take_pending_return(env: &Env, bidder: &Address) -> i128 {
    let owed = get_pending_return(env, bidder);
    if owed > 0 {
        env.storage()
            .persistent()
            .remove(&DataKey::PendingReturn(bidder.clone()));
        set_pending_total(env, get_pending_total(env) - owed);
    }
    owed
}
