use crate::*;

#[near]
impl Contract {
    pub fn get_edition(&self, edition_id: u64) -> Option<&Edition> {
        self.editions.get(&edition_id)
    }

    pub fn get_editions(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<(u64, &Edition)> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100);

        (start + 1..=self.edition_count)
            .take(limit as usize)
            .filter_map(|id| self.editions.get(&id).map(|e| (id, e)))
            .collect()
    }

    pub fn get_edition_count(&self) -> u64 {
        self.edition_count
    }
}
