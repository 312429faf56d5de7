use crate::*;
use near_sdk::json_types::U128;
use primitive_types::U256;

#[near(serializers = [json])]
pub struct RoyaltyInfo {
    pub recipient: Option<AccountId>,
    pub amount: U128,
}

#[near]
impl Contract {
    /// Royalty owed on a secondary sale of `item_id` at `sale_amount`.
    ///
    /// Null-object contract: an unparseable id, an unknown edition or a
    /// never-minted item yields `(None, 0)` — "no royalty owed", never an
    /// error, so marketplaces can call this blindly.
    pub fn royalty_info(&self, item_id: String, sale_amount: U128) -> RoyaltyInfo {
        let none = RoyaltyInfo {
            recipient: None,
            amount: U128(0),
        };

        let Some(item) = self.items.get(&item_id) else {
            return none;
        };
        let Some(edition) = self.editions.get(&item.edition_id) else {
            return none;
        };

        // bps <= 10_000 so the result fits u128; widen for the product.
        let amount = (U256::from(sale_amount.0) * U256::from(edition.royalty_bps)
            / U256::from(BASIS_POINTS))
        .low_u128();

        RoyaltyInfo {
            recipient: Some(edition.funding_recipient.clone()),
            amount: U128(amount),
        }
    }
}
