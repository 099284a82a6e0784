pub mod bidding_test;

use crate::{AuctionContract, AuctionContractClient};
use asset_registry::{AssetRegistry, AssetRegistryClient};
use soroban_sdk::{
    testutils::{Address as _, IssuerFlags, Ledger},
    token, Address, Env,
};

pub const STARTING_PRICE: i128 = 100;
pub const DURATION: u64 = 10;
pub const INITIAL_BALANCE: i128 = 10_000;

pub struct AuctionTest {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub registry: AssetRegistryClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub seller: Address,
    pub bidder_a: Address,
    pub bidder_b: Address,
    pub asset_id: u64,
}

impl AuctionTest {
    /// Auction initialized for a freshly minted asset, with the engine already
    /// approved on the registry, but not started.
    pub fn new() -> Self {
        Self::with_params(STARTING_PRICE, DURATION)
    }

    pub fn with_params(starting_price: i128, duration: u64) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let registry_admin = Address::generate(&env);
        let registry_id = env.register(AssetRegistry, ());
        let registry = AssetRegistryClient::new(&env, &registry_id);
        registry.initialize(&registry_admin);

        let seller = Address::generate(&env);
        let bidder_a = Address::generate(&env);
        let bidder_b = Address::generate(&env);
        let asset_id = registry.mint(&registry_admin, &seller);

        let token_admin = Address::generate(&env);
        let token_contract = env.register_stellar_asset_contract_v2(token_admin);
        // Lets tests deauthorize a holder to make transfers to it fail
        token_contract.issuer().set_flag(IssuerFlags::RevocableFlag);
        let token_client = token::TokenClient::new(&env, &token_contract.address());
        let token_admin_client = token::StellarAssetClient::new(&env, &token_contract.address());
        token_admin_client.mint(&bidder_a, &INITIAL_BALANCE);
        token_admin_client.mint(&bidder_b, &INITIAL_BALANCE);

        let contract_id = env.register(AuctionContract, ());
        let client = AuctionContractClient::new(&env, &contract_id);
        client.initialize(
            &seller,
            &registry_id,
            &asset_id,
            &token_client.address,
            &starting_price,
            &duration,
        );

        registry.approve(&seller, &Some(contract_id), &asset_id);

        AuctionTest {
            env,
            client,
            registry,
            token: token_client,
            token_admin: token_admin_client,
            seller,
            bidder_a,
            bidder_b,
            asset_id,
        }
    }

    pub fn started() -> Self {
        let test = Self::new();
        test.client.start(&test.seller);
        test
    }

    pub fn escrow_balance(&self) -> i128 {
        self.token.balance(&self.client.address)
    }

    /// Value the engine must be holding on behalf of bidders right now.
    pub fn owed_to_bidders(&self) -> i128 {
        let auction = self.client.get_auction();
        let held = if auction.state == crate::AuctionState::Active {
            auction.highest_bid
        } else {
            0
        };
        held + self.client.pending_total()
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
