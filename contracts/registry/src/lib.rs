#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::AssetRecord;

use events::{AssetApproved, AssetMinted, AssetTransferred, RegistryInitialized};

/// Tracks ownership of uniquely identified assets and the single spender each
/// owner has approved to move them.
#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    // ========== INITIALIZATION ==========

    /// Initialize the registry with the admin allowed to issue assets
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::extend_instance_ttl(&env);

        RegistryInitialized { admin }.publish(&env);

        Ok(())
    }

    // ========== ISSUANCE (Admin Only) ==========

    /// Issue a new asset to `to`, returning its id
    pub fn mint(env: Env, admin: Address, to: Address) -> Result<u64, Error> {
        Self::require_admin(&env, &admin)?;

        let asset_id = storage::increment_asset_counter(&env);
        storage::set_owner(&env, asset_id, &to);
        storage::extend_instance_ttl(&env);

        AssetMinted { to, asset_id }.publish(&env);

        Ok(asset_id)
    }

    // ========== CUSTODY ==========

    /// Set (or clear with `None`) the spender allowed to move `asset_id`
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Option<Address>,
        asset_id: u64,
    ) -> Result<(), Error> {
        owner.require_auth();

        let current = storage::get_owner(&env, asset_id).ok_or(Error::AssetNotFound)?;
        if current != owner {
            return Err(Error::NotOwner);
        }

        match &spender {
            Some(spender) => storage::set_approved(&env, asset_id, spender),
            None => storage::clear_approved(&env, asset_id),
        }
        storage::extend_instance_ttl(&env);

        AssetApproved {
            owner,
            spender,
            asset_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Move `asset_id` from `from` to `to` on behalf of `spender`.
    ///
    /// `spender` must be the current owner or its approved spender. Any
    /// standing approval is cleared once the asset moves.
    pub fn transfer(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        asset_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner = storage::get_owner(&env, asset_id).ok_or(Error::AssetNotFound)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        if spender != owner && storage::get_approved(&env, asset_id) != Some(spender.clone()) {
            log!(&env, "transfer of asset {} refused for spender {}", asset_id, spender);
            return Err(Error::NotApproved);
        }

        if to == from {
            return Err(Error::InvalidRecipient);
        }

        storage::clear_approved(&env, asset_id);
        storage::set_owner(&env, asset_id, &to);
        storage::extend_instance_ttl(&env);

        AssetTransferred { from, to, asset_id }.publish(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    /// Current owner of `asset_id`
    pub fn owner_of(env: Env, asset_id: u64) -> Result<Address, Error> {
        storage::get_owner(&env, asset_id).ok_or(Error::AssetNotFound)
    }

    pub fn get_approved(env: Env, asset_id: u64) -> Option<Address> {
        storage::get_approved(&env, asset_id)
    }

    pub fn get_asset(env: Env, asset_id: u64) -> Result<AssetRecord, Error> {
        let owner = storage::get_owner(&env, asset_id).ok_or(Error::AssetNotFound)?;
        Ok(AssetRecord {
            asset_id,
            owner,
            approved: storage::get_approved(&env, asset_id),
        })
    }

    /// Number of assets issued so far
    pub fn total_supply(env: Env) -> u64 {
        storage::get_asset_counter(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
