use crate::*;

#[near(serializers = [json])]
pub struct ContractMetadata {
    pub name: String,
    pub symbol: String,
    pub default_base_uri: String,
}

#[near]
impl Contract {
    /// Metadata URI for a minted item. An edition-level base URI wins when
    /// it has more than 3 meaningful characters (an accidental handful of
    /// spaces keeps the collection endpoint); otherwise the collection-wide
    /// endpoint is used, scoped by this collection's account.
    #[handle_result]
    pub fn token_uri(&self, item_id: String) -> Result<String, EditionError> {
        let item = self
            .items
            .get(&item_id)
            .ok_or_else(EditionError::nonexistent_item)?;
        let edition = self
            .editions
            .get(&item.edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;

        if edition.base_uri.trim().len() > MIN_BASE_URI_LEN {
            Ok(format!("{}{}/metadata.json", edition.base_uri, item_id))
        } else {
            Ok(format!(
                "{}{}/{}",
                self.default_base_uri,
                env::current_account_id(),
                item_id
            ))
        }
    }

    /// Collection-level metadata document URI.
    pub fn contract_uri(&self) -> String {
        format!(
            "{}{}/storefront",
            self.default_base_uri,
            env::current_account_id()
        )
    }

    pub fn get_contract_metadata(&self) -> ContractMetadata {
        ContractMetadata {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            default_base_uri: self.default_base_uri.clone(),
        }
    }
}
