//! Factory that deploys edition-sale collections as subaccounts.
//!
//! The sale-engine code is published as a global contract under the
//! factory account. Each collection subaccount references that code by
//! account id instead of carrying its own copy, so republishing retargets
//! every collection, existing and future, on its next call; only their
//! per-account storage stays put.

use near_sdk::store::IterableMap;
use near_sdk::{AccountId, NearToken, PanicOnDefault, PublicKey, env, near};

mod constants;
mod create;
mod errors;
mod events;
mod types;

mod admin;

pub use constants::*;
pub use errors::FactoryError;
pub use types::CollectionRecord;

#[near(contract_state, contract_metadata(
    version = "0.1.0",
    standard(standard = "nep297", version = "1.0.0"),
))]
#[derive(PanicOnDefault)]
pub struct Factory {
    pub version: String,
    pub owner_id: AccountId,
    /// Off-chain platform key that co-signs every collection creation.
    pub platform_key: PublicKey,
    /// Base URI handed to every new collection for fallback token metadata.
    pub default_base_uri: String,
    pub collections: IterableMap<AccountId, CollectionRecord>,
    pub collection_count: u64,
    /// Bumped each time new sale-engine code is published.
    pub implementation_version: u32,
}
