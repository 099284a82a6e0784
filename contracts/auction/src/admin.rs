use crate::types::Auction;
use crate::Error;
use soroban_sdk::Address;

pub fn require_seller(auction: &Auction, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if auction.seller != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
