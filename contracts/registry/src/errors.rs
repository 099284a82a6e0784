use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    Unauthorized = 102,
    AssetNotFound = 103,
    NotOwner = 104,
    NotApproved = 105,
    InvalidRecipient = 106,
}
