use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::EventBuilder;
use super::ITEM;

pub fn emit_item_purchased(edition_id: u64, buyer_id: &AccountId, item_id: &str, price: U128) {
    EventBuilder::new(ITEM, "purchase")
        .field("edition_id", edition_id)
        .field("buyer_id", buyer_id)
        .field("item_id", item_id)
        .field("price", price)
        .emit();
}
