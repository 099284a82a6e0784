use soroban_sdk::{contractevent, Address};

/// Event emitted when the registry is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitialized {
    #[topic]
    pub admin: Address,
}

/// Event emitted when a new asset is issued
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetMinted {
    #[topic]
    pub to: Address,
    pub asset_id: u64,
}

/// Event emitted when an owner sets or clears the approved spender
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetApproved {
    #[topic]
    pub owner: Address,
    pub spender: Option<Address>,
    pub asset_id: u64,
}

/// Event emitted when an asset changes hands
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransferred {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub asset_id: u64,
}
