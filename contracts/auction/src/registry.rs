use crate::types::Auction;
use crate::Error;
use soroban_sdk::{contractclient, contracterror, Address, Env};

/// Error codes reported by the asset registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    Unauthorized = 102,
    AssetNotFound = 103,
    NotOwner = 104,
    NotApproved = 105,
    InvalidRecipient = 106,
}

/// The slice of the asset registry the auction relies on.
#[allow(dead_code)]
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistryInterface {
    /// Moves `asset_id` from `from` to `to`. `spender` must own the asset or
    /// hold the owner's approval.
    fn transfer(
        spender: Address,
        from: Address,
        to: Address,
        asset_id: u64,
    ) -> Result<(), RegistryError>;

    fn owner_of(asset_id: u64) -> Result<Address, RegistryError>;
}

/// Moves the auctioned asset from `from` to `to`, with this contract acting
/// as spender.
pub fn transfer_custody(env: &Env, auction: &Auction, from: &Address, to: &Address) -> Result<(), Error> {
    let client = AssetRegistryClient::new(env, &auction.registry);
    match client.try_transfer(&env.current_contract_address(), from, to, &auction.asset_id) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferDenied),
    }
}

/// Current owner of the auctioned asset as reported by the registry.
pub fn owner_of(env: &Env, auction: &Auction) -> Result<Address, Error> {
    let client = AssetRegistryClient::new(env, &auction.registry);
    match client.try_owner_of(&auction.asset_id) {
        Ok(Ok(owner)) => Ok(owner),
        Err(Ok(RegistryError::AssetNotFound)) => Err(Error::AssetNotFound),
        _ => Err(Error::RegistryUnavailable),
    }
}
