use near_sdk::json_types::U128;
use near_sdk::{AccountId, PublicKey};

use super::EDITION;
use super::EventBuilder;

pub struct EditionCreated<'a> {
    pub edition_id: u64,
    pub funding_recipient: &'a AccountId,
    pub price: U128,
    pub quantity: u32,
    pub royalty_bps: u16,
    pub start_time: u64,
    pub end_time: u64,
    pub permissioned_quantity: u32,
    pub signer_key: Option<&'a PublicKey>,
    pub base_uri: &'a str,
}

pub fn emit_edition_created(e: &EditionCreated) {
    EventBuilder::new(EDITION, "create")
        .field("edition_id", e.edition_id)
        .field("funding_recipient", e.funding_recipient)
        .field("price", e.price)
        .field("quantity", e.quantity)
        .field("royalty_bps", e.royalty_bps)
        .field("start_time", e.start_time)
        .field("end_time", e.end_time)
        .field("permissioned_quantity", e.permissioned_quantity)
        .field("signer_key", e.signer_key)
        .field("base_uri", e.base_uri)
        .emit();
}

/// Discriminator for `emit_time_set`, matching the start/end setter pair.
#[derive(Clone, Copy)]
pub enum TimeType {
    Start,
    End,
}

impl TimeType {
    fn as_str(self) -> &'static str {
        match self {
            TimeType::Start => "start",
            TimeType::End => "end",
        }
    }
}

pub fn emit_time_set(edition_id: u64, time_type: TimeType, new_time: u64) {
    EventBuilder::new(EDITION, "time_set")
        .field("edition_id", edition_id)
        .field("time_type", time_type.as_str())
        .field("new_time", new_time)
        .emit();
}

pub fn emit_signer_key_set(edition_id: u64, signer_key: Option<&PublicKey>) {
    EventBuilder::new(EDITION, "signer_key_set")
        .field("edition_id", edition_id)
        .field("signer_key", signer_key)
        .emit();
}

pub fn emit_permissioned_quantity_set(edition_id: u64, permissioned_quantity: u32) {
    EventBuilder::new(EDITION, "permissioned_quantity_set")
        .field("edition_id", edition_id)
        .field("permissioned_quantity", permissioned_quantity)
        .emit();
}

pub fn emit_base_uri_set(edition_id: u64, base_uri: &str) {
    EventBuilder::new(EDITION, "base_uri_set")
        .field("edition_id", edition_id)
        .field("base_uri", base_uri)
        .emit();
}

pub fn emit_funds_withdrawn(edition_id: u64, funding_recipient: &AccountId, amount: U128) {
    EventBuilder::new(EDITION, "funds_withdrawn")
        .field("edition_id", edition_id)
        .field("funding_recipient", funding_recipient)
        .field("amount", amount)
        .emit();
}
