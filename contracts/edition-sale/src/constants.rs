use near_sdk::NearToken;

pub const BASIS_POINTS: u16 = 10_000; // 100%

/// `end_time` value meaning "public sale never closes".
pub const END_TIME_UNBOUNDED: u64 = u64::MAX;

/// An edition base URI must have more than this many characters after
/// trimming to override the collection-wide metadata endpoint.
pub const MIN_BASE_URI_LEN: usize = 3;
pub const MAX_BASE_URI_LEN: usize = 256;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_SYMBOL_LEN: usize = 16;

/// Batch view ceiling shared by `owners_of_item_ids` and
/// `check_ticket_numbers`.
pub const MAX_BATCH_QUERY: usize = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const NANOS_PER_SEC: u64 = 1_000_000_000;

pub const GAS_MIGRATE_TGAS: u64 = 200;
