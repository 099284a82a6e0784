#![no_std]

mod admin;
mod events;
mod registry;
mod storage;
mod types;

use events::{AuctionEnded, AuctionInitialized, AuctionStarted, BidPlaced, ReturnWithdrawn};
use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env};
pub use types::{Auction, AuctionState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidDuration = 3,
    InvalidStartingPrice = 4,
    AlreadyStarted = 5,
    Unauthorized = 6,
    TransferDenied = 7,
    NotActive = 8,
    SellerCannotBid = 9,
    BidTooLow = 10,
    BidNotHighEnough = 11,
    NothingToWithdraw = 12,
    TooEarly = 13,
    AssetNotFound = 14,
    RegistryUnavailable = 15,
}

/// Escrows a single registry asset and sells it to the highest bidder.
///
/// Outbid funds are never pushed back during `bid`; they are parked as pending
/// returns and pulled by their owner through `withdraw`.
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// Fix the auction parameters. The asset stays with the seller until
    /// `start`.
    pub fn initialize(
        env: Env,
        seller: Address,
        registry: Address,
        asset_id: u64,
        token: Address,
        starting_price: i128,
        duration: u64,
    ) -> Result<(), Error> {
        if storage::has_auction(&env) {
            return Err(Error::AlreadyInitialized);
        }
        seller.require_auth();

        if duration == 0 {
            return Err(Error::InvalidDuration);
        }

        if starting_price < 0 {
            return Err(Error::InvalidStartingPrice);
        }

        let auction = Auction {
            seller: seller.clone(),
            registry,
            asset_id,
            token,
            starting_price,
            duration,
            state: AuctionState::Created,
            start_at: 0,
            end_at: 0,
            highest_bidder: None,
            highest_bid: 0,
        };

        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        AuctionInitialized {
            seller,
            asset_id,
            starting_price,
            duration,
        }
        .publish(&env);

        Ok(())
    }

    /// Pull the asset into escrow and open bidding for `duration` seconds.
    ///
    /// The seller must have approved this contract on the registry
    /// beforehand; otherwise the registry refuses and nothing changes.
    pub fn start(env: Env, caller: Address) -> Result<(), Error> {
        let mut auction = load_auction(&env)?;
        admin::require_seller(&auction, &caller)?;

        if auction.state != AuctionState::Created {
            return Err(Error::AlreadyStarted);
        }

        registry::transfer_custody(
            &env,
            &auction,
            &auction.seller,
            &env.current_contract_address(),
        )?;

        let now = env.ledger().timestamp();
        auction.start_at = now;
        auction.end_at = now.saturating_add(auction.duration);
        auction.state = AuctionState::Active;

        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction started, ends at {}", auction.end_at);
        AuctionStarted {
            seller: auction.seller,
            asset_id: auction.asset_id,
            start_at: auction.start_at,
            end_at: auction.end_at,
        }
        .publish(&env);

        Ok(())
    }

    /// Place a bid of `amount`, which is moved into escrow immediately.
    ///
    /// The clock is not consulted: bids keep being accepted past `end_at`
    /// until someone calls `end`.
    pub fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = load_auction(&env)?;

        if auction.state != AuctionState::Active {
            return Err(Error::NotActive);
        }

        if bidder == auction.seller {
            return Err(Error::SellerCannotBid);
        }

        if amount < auction.starting_price {
            return Err(Error::BidTooLow);
        }

        if amount <= auction.highest_bid {
            return Err(Error::BidNotHighEnough);
        }

        let outbid = auction.highest_bidder.replace(bidder.clone());
        if let Some(previous_bidder) = &outbid {
            storage::credit_pending_return(&env, previous_bidder, auction.highest_bid);
        }
        auction.highest_bid = amount;
        storage::save_auction(&env, &auction);

        let token_client = token::TokenClient::new(&env, &auction.token);
        token_client.transfer(&bidder, &env.current_contract_address(), &amount);

        storage::extend_instance_ttl(&env);

        BidPlaced {
            bidder,
            amount,
            outbid,
        }
        .publish(&env);

        Ok(())
    }

    /// Pay out everything owed to `caller` from being outbid. Returns the
    /// amount sent.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let auction = load_auction(&env)?;

        // Balance is zeroed before the transfer; a failing transfer aborts
        // the invocation and restores it.
        let amount = storage::take_pending_return(&env, &caller);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        let token_client = token::TokenClient::new(&env, &auction.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        storage::extend_instance_ttl(&env);

        ReturnWithdrawn {
            bidder: caller,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    /// Settle the auction once `end_at` has passed. Anyone may call it.
    ///
    /// With a leading bid the asset goes to the winner and the bid to the
    /// seller; without one the asset goes back to the seller. The auction is
    /// only marked ended after both transfers went through.
    pub fn end(env: Env) -> Result<(), Error> {
        let mut auction = load_auction(&env)?;

        if auction.state != AuctionState::Active {
            return Err(Error::NotActive);
        }

        if env.ledger().timestamp() < auction.end_at {
            return Err(Error::TooEarly);
        }

        let escrow = env.current_contract_address();
        let recipient = auction
            .highest_bidder
            .clone()
            .unwrap_or_else(|| auction.seller.clone());

        registry::transfer_custody(&env, &auction, &escrow, &recipient)?;

        if auction.highest_bidder.is_some() {
            let token_client = token::TokenClient::new(&env, &auction.token);
            token_client.transfer(&escrow, &auction.seller, &auction.highest_bid);
        }

        auction.state = AuctionState::Ended;
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction settled for {}", auction.highest_bid);
        AuctionEnded {
            seller: auction.seller,
            winner: auction.highest_bidder,
            amount: auction.highest_bid,
        }
        .publish(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    pub fn get_auction(env: Env) -> Result<Auction, Error> {
        load_auction(&env)
    }

    pub fn state(env: Env) -> Result<AuctionState, Error> {
        Ok(load_auction(&env)?.state)
    }

    pub fn seller(env: Env) -> Result<Address, Error> {
        Ok(load_auction(&env)?.seller)
    }

    pub fn registry(env: Env) -> Result<Address, Error> {
        Ok(load_auction(&env)?.registry)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(load_auction(&env)?.token)
    }

    pub fn asset_id(env: Env) -> Result<u64, Error> {
        Ok(load_auction(&env)?.asset_id)
    }

    pub fn starting_price(env: Env) -> Result<i128, Error> {
        Ok(load_auction(&env)?.starting_price)
    }

    pub fn duration(env: Env) -> Result<u64, Error> {
        Ok(load_auction(&env)?.duration)
    }

    /// Zero until the auction has started.
    pub fn start_at(env: Env) -> Result<u64, Error> {
        Ok(load_auction(&env)?.start_at)
    }

    pub fn end_at(env: Env) -> Result<u64, Error> {
        Ok(load_auction(&env)?.end_at)
    }

    pub fn highest_bidder(env: Env) -> Result<Option<Address>, Error> {
        Ok(load_auction(&env)?.highest_bidder)
    }

    pub fn highest_bid(env: Env) -> Result<i128, Error> {
        Ok(load_auction(&env)?.highest_bid)
    }

    /// Amount `bidder` can currently withdraw
    pub fn pending_return(env: Env, bidder: Address) -> i128 {
        storage::get_pending_return(&env, &bidder)
    }

    /// Sum of all outstanding pending returns
    pub fn pending_total(env: Env) -> i128 {
        storage::get_pending_total(&env)
    }

    /// Who the registry currently records as the asset's owner
    pub fn asset_owner(env: Env) -> Result<Address, Error> {
        let auction = load_auction(&env)?;
        registry::owner_of(&env, &auction)
    }
}

fn load_auction(env: &Env) -> Result<Auction, Error> {
    storage::get_auction(env).ok_or(Error::NotInitialized)
}

#[cfg(test)]
mod test;
