use near_sdk::{Gas, NearToken};

/// Storage key prefixes for persistent collections.
#[near_sdk::near]
#[derive(near_sdk::BorshStorageKey)]
pub enum StorageKey {
    Collections,
}

/// Deposit forwarded to a new collection subaccount to cover its state.
pub const COLLECTION_STORAGE_DEPOSIT: NearToken = NearToken::from_millinear(3500);

/// Gas reserved for the collection `new` call inside the deploy batch.
pub const GAS_COLLECTION_INIT: Gas = Gas::from_tgas(50);

/// Gas reserved for the factory's own deploy callback.
pub const GAS_CREATE_CALLBACK: Gas = Gas::from_tgas(10);

pub const MIN_SYMBOL_LEN: usize = 2;
pub const MAX_SYMBOL_LEN: usize = 32;
pub const MAX_NAME_LEN: usize = 64;
pub const MAX_BASE_URI_LEN: usize = 256;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
