use near_sdk::AccountId;

use super::CONTRACT;
use super::EventBuilder;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred")
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_owner_overridden(actor_id: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_overridden")
        .field("actor_id", actor_id)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_admin_granted(account_id: &AccountId) {
    EventBuilder::new(CONTRACT, "admin_granted")
        .field("account_id", account_id)
        .emit();
}

pub fn emit_admin_revoked(account_id: &AccountId) {
    EventBuilder::new(CONTRACT, "admin_revoked")
        .field("account_id", account_id)
        .emit();
}

pub fn emit_contract_upgraded(account_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "upgrade")
        .field("account_id", account_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}
