use near_sdk::AccountId;
use near_sdk::near;
use primitive_types::U256;

/// One minted unit of an edition.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Item {
    pub owner_id: AccountId,
    pub edition_id: u64,
    /// 1-based serial within the edition, equal to `num_sold` at mint time.
    pub serial: u32,
    pub minted_at: u64,
}

/// Composite item id: edition id in the high 128 bits, serial in the low
/// bits. Unique and ordered across all editions without a global counter,
/// and invertible so royalty and URI lookups need only the id.
pub fn item_id(edition_id: u64, serial: u32) -> U256 {
    (U256::from(edition_id) << 128) | U256::from(serial)
}

/// Inverse shift of [`item_id`]. `None` when the high bits do not fit an
/// edition id (the id cannot have been minted here).
pub fn edition_id_of(item_id: U256) -> Option<u64> {
    let hi = item_id >> 128;
    if hi > U256::from(u64::MAX) {
        return None;
    }
    Some(hi.low_u64())
}

pub fn serial_of(item_id: U256) -> u128 {
    item_id.low_u128()
}

/// Item ids cross the JSON ABI as decimal strings.
pub fn parse_item_id(raw: &str) -> Option<U256> {
    U256::from_dec_str(raw).ok()
}
