use crate::*;

#[near]
impl Contract {
    pub fn get_item(&self, item_id: String) -> Option<&Item> {
        self.items.get(&item_id)
    }

    pub fn get_total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Owner of every id, in input order. The whole batch fails on the
    /// first id that was never minted; no partial results.
    #[handle_result]
    pub fn owners_of_item_ids(
        &self,
        item_ids: Vec<String>,
    ) -> Result<Vec<AccountId>, EditionError> {
        if item_ids.len() > MAX_BATCH_QUERY {
            return Err(EditionError::InvalidInput(format!(
                "At most {} ids per call",
                MAX_BATCH_QUERY
            )));
        }
        item_ids
            .iter()
            .map(|id| {
                self.items
                    .get(id)
                    .map(|item| item.owner_id.clone())
                    .ok_or_else(EditionError::nonexistent_item)
            })
            .collect()
    }

    pub fn items_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<String> {
        let Some(ids) = self.items_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100);

        ids.iter()
            .skip(start as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    pub fn item_count_for_owner(&self, account_id: AccountId) -> u64 {
        self.items_per_owner
            .get(&account_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }
}
