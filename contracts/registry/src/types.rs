use soroban_sdk::{contracttype, Address};

/// Storage keys for the asset registry
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    AssetCounter,
    Owner(u64),
    Approved(u64),
}

/// Ownership record for a single asset
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRecord {
    pub asset_id: u64,
    pub owner: Address,
    pub approved: Option<Address>,
}
