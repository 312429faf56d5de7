use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::{AccountId, PublicKey};

/// One limited-run sale offer.
///
/// Upgrade rule: fields are append-only and never reordered or removed, so
/// logic deployed through the shared beacon can always read records written
/// by older versions. New fields go at the end with `#[serde(default)]`.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Edition {
    pub funding_recipient: AccountId,
    pub price: U128,
    pub quantity: u32,
    pub num_sold: u32,
    pub royalty_bps: u16,
    /// Public sale window, Unix seconds. `end_time == u64::MAX` means the
    /// sale never closes.
    pub start_time: u64,
    pub end_time: u64,
    /// Units sellable before `start_time` against a signed ticket.
    pub permissioned_quantity: u32,
    pub signer_key: Option<PublicKey>,
    /// Per-edition metadata override; empty or whitespace-ish values fall
    /// back to the collection endpoint at read time.
    pub base_uri: String,
    /// Sale proceeds accrued and not yet withdrawn, in yoctoNEAR.
    pub balance: U128,
    pub created_at: u64,
}

/// Creation arguments for `create_edition`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct EditionConfig {
    /// Must equal `edition_count + 1`; rejects racing duplicate creations
    /// and keeps ids externally predictable.
    pub edition_id: u64,
    pub funding_recipient: AccountId,
    pub price: U128,
    pub quantity: u32,
    pub royalty_bps: u16,
    pub start_time: u64,
    pub end_time: u64,
    #[serde(default)]
    pub permissioned_quantity: u32,
    #[serde(default)]
    pub signer_key: Option<PublicKey>,
    #[serde(default)]
    pub base_uri: Option<String>,
}
