use crate::*;
use near_sdk::Promise;

impl Factory {
    fn check_owner(&self) -> Result<(), FactoryError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(FactoryError::only_owner());
        }
        Ok(())
    }

    fn check_one_yocto(&self) -> Result<(), FactoryError> {
        if env::attached_deposit() != ONE_YOCTO {
            return Err(FactoryError::InvalidInput(
                "Requires attached deposit of exactly 1 yoctoNEAR".to_string(),
            ));
        }
        Ok(())
    }
}

#[near]
impl Factory {
    #[init]
    pub fn new(owner_id: AccountId, platform_key: PublicKey, default_base_uri: String) -> Self {
        assert!(
            default_base_uri.len() <= MAX_BASE_URI_LEN,
            "Default base URI too long"
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            platform_key,
            default_base_uri,
            collections: IterableMap::new(StorageKey::Collections),
            collection_count: 0,
            implementation_version: 0,
        }
    }

    /// Publishes the sale-engine wasm passed as raw call input under the
    /// factory account as a global contract. Raw input avoids the JSON and
    /// base64 overhead a multi-hundred-kilobyte argument would cost.
    #[payable]
    #[handle_result]
    pub fn publish_implementation(&mut self) -> Result<Promise, FactoryError> {
        self.check_one_yocto()?;
        self.check_owner()?;
        let code = env::input().ok_or_else(|| {
            FactoryError::InvalidInput("No contract code supplied in call input".to_string())
        })?;
        if code.is_empty() {
            return Err(FactoryError::InvalidInput(
                "Contract code must not be empty".to_string(),
            ));
        }
        self.implementation_version += 1;
        events::FactoryEvent::ImplementationPublished {
            implementation_version: self.implementation_version,
            code_len: code.len() as u64,
        }
        .emit();
        Ok(Promise::new(env::current_account_id()).deploy_global_contract_by_account_id(code))
    }

    #[payable]
    #[handle_result]
    pub fn set_platform_key(&mut self, platform_key: PublicKey) -> Result<(), FactoryError> {
        self.check_one_yocto()?;
        self.check_owner()?;
        if platform_key.curve_type() != near_sdk::CurveType::ED25519 {
            return Err(FactoryError::InvalidInput(
                "Platform key must be ed25519".to_string(),
            ));
        }
        self.platform_key = platform_key;
        events::FactoryEvent::PlatformKeySet {
            platform_key: self.platform_key.clone(),
        }
        .emit();
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner_id: AccountId) -> Result<(), FactoryError> {
        self.check_one_yocto()?;
        self.check_owner()?;
        if new_owner_id == self.owner_id {
            return Err(FactoryError::InvalidInput(
                "New owner matches the current owner".to_string(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner_id);
        events::FactoryEvent::OwnerTransferred {
            old_owner,
            new_owner: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_platform_key(&self) -> &PublicKey {
        &self.platform_key
    }

    pub fn get_default_base_uri(&self) -> &str {
        &self.default_base_uri
    }

    pub fn get_implementation_version(&self) -> u32 {
        self.implementation_version
    }

    pub fn get_collection(&self, collection_id: AccountId) -> Option<&CollectionRecord> {
        self.collections.get(&collection_id)
    }

    pub fn get_collections(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(&AccountId, &CollectionRecord)> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50) as usize;
        self.collections.iter().skip(start).take(limit).collect()
    }

    pub fn get_collection_count(&self) -> u64 {
        self.collection_count
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
