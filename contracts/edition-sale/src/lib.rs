use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, PublicKey, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;

mod edition;
mod item;

mod metadata;
mod purchase;
mod royalties;
mod tickets;
mod withdraw;

mod admin;
mod storage;
mod upgrade;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use edition::{Edition, EditionConfig};
pub use errors::EditionError;
pub use item::{Item, edition_id_of, item_id, parse_item_id, serial_of};
pub use royalties::RoyaltyInfo;
pub use storage::StorageKey;

/// Per-collection sale engine. One instance lives on each collection
/// subaccount created by the factory; all instances share one logic
/// implementation through the factory's global-contract beacon while
/// keeping this state per account.
#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    // Custody safety net: may reassign ownership without the creator's key.
    pub recovery_id: AccountId,
    pub admins: IterableSet<AccountId>,

    pub name: String,
    pub symbol: String,
    pub default_base_uri: String,

    pub editions: IterableMap<u64, Edition>,
    // Sequential id source of truth: the next edition must be created with
    // id `edition_count + 1`.
    pub edition_count: u64,

    pub items: IterableMap<String, Item>,
    pub(crate) items_per_owner: LookupMap<AccountId, IterableSet<String>>,
    pub total_supply: u64,

    // Replay protection: packed per-edition bitmap of consumed presale
    // ticket numbers, keyed "{edition_id}:{word_index}".
    pub(crate) used_tickets: LookupMap<String, u64>,
}
