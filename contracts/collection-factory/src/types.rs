use near_sdk::{AccountId, near};

/// Registry entry for a deployed collection, recorded once its deploy
/// batch succeeds.
#[near(serializers=[borsh, json])]
#[derive(Debug, Clone)]
pub struct CollectionRecord {
    pub creator_id: AccountId,
    pub name: String,
    pub symbol: String,
    /// Value of `implementation_version` at deploy time.
    pub implementation_version: u32,
    /// Nanosecond block timestamp of the deploy callback.
    pub created_at: u64,
}
