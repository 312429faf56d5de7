//! Canonical signing payloads.
//!
//! Each payload is a newline-framed field list. Field values are NEAR
//! account ids and decimal integers, neither of which can contain a
//! newline, so the framing is unambiguous without length prefixes.

use near_sdk::AccountId;

/// Domain tag for platform approval of a new collection.
pub const COLLECTION_APPROVAL_DOMAIN: &str = "edition-factory.create-collection.v1";

/// Domain tag for presale purchase approval of a single ticket.
pub const PRESALE_APPROVAL_DOMAIN: &str = "edition-sale.presale.v1";

/// Payload the platform key signs to approve `creator_id` onboarding a
/// collection through `factory_id`.
pub fn collection_approval_payload(factory_id: &AccountId, creator_id: &AccountId) -> Vec<u8> {
    format!("{COLLECTION_APPROVAL_DOMAIN}\n{factory_id}\n{creator_id}").into_bytes()
}

/// Payload an edition's signer key signs to approve one presale ticket
/// for one buyer on one collection.
pub fn presale_approval_payload(
    collection_id: &AccountId,
    edition_id: u64,
    ticket_number: u64,
    buyer_id: &AccountId,
) -> Vec<u8> {
    format!("{PRESALE_APPROVAL_DOMAIN}\n{collection_id}\n{edition_id}\n{ticket_number}\n{buyer_id}")
        .into_bytes()
}
