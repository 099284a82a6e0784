use crate::test::{advance_ledger, AuctionTest, DURATION, INITIAL_BALANCE, STARTING_PRICE};
use crate::{AuctionState, Error};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_place_valid_bid() {
    let t = AuctionTest::started();

    t.client.bid(&t.bidder_a, &150);

    assert_eq!(t.client.highest_bidder(), Some(t.bidder_a.clone()));
    assert_eq!(t.client.highest_bid(), 150);
    assert_eq!(t.token.balance(&t.bidder_a), INITIAL_BALANCE - 150);
    assert_eq!(t.escrow_balance(), 150);
}

#[test]
fn test_bid_at_starting_price() {
    let t = AuctionTest::started();

    t.client.bid(&t.bidder_a, &STARTING_PRICE);
    assert_eq!(t.client.highest_bid(), STARTING_PRICE);
}

#[test]
fn test_bid_before_start() {
    let t = AuctionTest::new();

    let result = t.client.try_bid(&t.bidder_a, &150);
    assert_eq!(result, Err(Ok(Error::NotActive)));
    assert_eq!(t.token.balance(&t.bidder_a), INITIAL_BALANCE);
}

#[test]
fn test_reject_low_bid() {
    let t = AuctionTest::started();

    let result = t.client.try_bid(&t.bidder_a, &(STARTING_PRICE - 1));
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
    assert_eq!(t.client.highest_bidder(), None);
    assert_eq!(t.escrow_balance(), 0);
}

#[test]
fn test_reject_equal_bid() {
    let t = AuctionTest::started();
    t.client.bid(&t.bidder_a, &150);

    let result = t.client.try_bid(&t.bidder_b, &150);
    assert_eq!(result, Err(Ok(Error::BidNotHighEnough)));

    assert_eq!(t.client.highest_bidder(), Some(t.bidder_a.clone()));
    assert_eq!(t.client.highest_bid(), 150);
    assert_eq!(t.client.pending_return(&t.bidder_a), 0);
    assert_eq!(t.token.balance(&t.bidder_b), INITIAL_BALANCE);
}

#[test]
fn test_seller_cannot_bid() {
    let t = AuctionTest::started();

    let result = t.client.try_bid(&t.seller, &150);
    assert_eq!(result, Err(Ok(Error::SellerCannotBid)));
}

#[test]
fn test_zero_starting_price_still_needs_positive_bid() {
    let t = AuctionTest::with_params(0, DURATION);
    t.client.start(&t.seller);

    let result = t.client.try_bid(&t.bidder_a, &0);
    assert_eq!(result, Err(Ok(Error::BidNotHighEnough)));

    t.client.bid(&t.bidder_a, &1);
    assert_eq!(t.client.highest_bid(), 1);
}

#[test]
fn test_outbid_credits_pending_return() {
    let t = AuctionTest::started();

    t.client.bid(&t.bidder_a, &150);
    t.client.bid(&t.bidder_b, &200);

    assert_eq!(t.client.highest_bidder(), Some(t.bidder_b.clone()));
    assert_eq!(t.client.highest_bid(), 200);
    assert_eq!(t.client.pending_return(&t.bidder_a), 150);
    assert_eq!(t.client.pending_return(&t.bidder_b), 0);
    assert_eq!(t.client.pending_total(), 150);
    assert_eq!(t.escrow_balance(), 350);
}

#[test]
fn test_pending_returns_accumulate() {
    let t = AuctionTest::started();

    t.client.bid(&t.bidder_a, &150);
    t.client.bid(&t.bidder_b, &200);
    t.client.bid(&t.bidder_a, &250);
    t.client.bid(&t.bidder_b, &300);

    assert_eq!(t.client.pending_return(&t.bidder_a), 150 + 250);
    assert_eq!(t.client.pending_return(&t.bidder_b), 200);
    assert_eq!(t.client.pending_total(), 600);
    assert_eq!(t.escrow_balance(), t.owed_to_bidders());
}

#[test]
fn test_leader_raising_own_bid() {
    let t = AuctionTest::started();

    t.client.bid(&t.bidder_a, &150);
    t.client.bid(&t.bidder_a, &180);

    assert_eq!(t.client.highest_bidder(), Some(t.bidder_a.clone()));
    assert_eq!(t.client.pending_return(&t.bidder_a), 150);
    assert_eq!(t.escrow_balance(), 330);
}

#[test]
fn test_bids_strictly_increase() {
    let t = AuctionTest::started();
    let bidders = [t.bidder_a.clone(), t.bidder_b.clone(), Address::generate(&t.env)];
    t.token_admin.mint(&bidders[2], &INITIAL_BALANCE);

    let mut last = 0;
    for round in 0..9u32 {
        let bidder = &bidders[(round % 3) as usize];
        let amount = STARTING_PRICE + 10 * round as i128;

        // Anything not above the current leader bounces
        if last > 0 {
            assert_eq!(t.client.try_bid(bidder, &last), Err(Ok(Error::BidNotHighEnough)));
        }

        t.client.bid(bidder, &amount);
        assert!(t.client.highest_bid() > last);
        assert_eq!(t.client.highest_bidder(), Some(bidder.clone()));
        assert_eq!(t.escrow_balance(), t.owed_to_bidders());
        last = amount;
    }
}

#[test]
fn test_bid_after_deadline_accepted_until_end() {
    let t = AuctionTest::started();
    t.client.bid(&t.bidder_a, &150);

    advance_ledger(&t.env, DURATION + 100);

    t.client.bid(&t.bidder_b, &200);
    assert_eq!(t.client.state(), AuctionState::Active);
    assert_eq!(t.client.highest_bidder(), Some(t.bidder_b.clone()));

    t.client.end();
    assert_eq!(t.registry.owner_of(&t.asset_id), t.bidder_b);
}

#[test]
fn test_bid_after_end() {
    let t = AuctionTest::started();
    advance_ledger(&t.env, DURATION);
    t.client.end();

    let result = t.client.try_bid(&t.bidder_a, &150);
    assert_eq!(result, Err(Ok(Error::NotActive)));
}

#[test]
#[should_panic(expected = "Error(Contract, #10)")] // token BalanceError
fn test_bid_without_funds() {
    let t = AuctionTest::started();
    let broke = Address::generate(&t.env);

    t.client.bid(&broke, &150);
}
