use soroban_sdk::{contracttype, Address};

/// Lifecycle of the auction. Only ever moves forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionState {
    Created = 0,
    Active = 1,
    Ended = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub registry: Address,
    pub asset_id: u64,
    pub token: Address,
    pub starting_price: i128,
    pub duration: u64,
    pub state: AuctionState,
    pub start_at: u64,
    pub end_at: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
}

#[contracttype]
pub enum DataKey {
    Auction,
    PendingTotal,
    PendingReturn(Address),
}
