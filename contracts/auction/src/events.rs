use soroban_sdk::{contractevent, Address};

/// Event emitted when the auction parameters are fixed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInitialized {
    #[topic]
    pub seller: Address,
    pub asset_id: u64,
    pub starting_price: i128,
    pub duration: u64,
}

/// Event emitted once the asset is in escrow and bidding opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStarted {
    #[topic]
    pub seller: Address,
    pub asset_id: u64,
    pub start_at: u64,
    pub end_at: u64,
}

/// Event emitted for every accepted bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub outbid: Option<Address>,
}

/// Event emitted when an outbid bidder pulls their funds back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReturnWithdrawn {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted on final settlement. `winner` is `None` when the asset went
/// back to the seller.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    #[topic]
    pub seller: Address,
    pub winner: Option<Address>,
    pub amount: i128,
}
