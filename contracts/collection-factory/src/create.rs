use crate::*;
use edition_auth::{AuthError, collection_approval_payload, verify_signature};
use near_sdk::json_types::Base64VecU8;
use near_sdk::serde_json::json;
use near_sdk::{Promise, is_promise_success};

fn valid_symbol(symbol: &str) -> bool {
    (MIN_SYMBOL_LEN..=MAX_SYMBOL_LEN).contains(&symbol.len())
        && symbol
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

#[near]
impl Factory {
    /// Deploys a new collection at `<symbol>.<factory>`.
    ///
    /// Requires a platform signature approving the caller, so collection
    /// creation stays curated even though the method itself is open. The
    /// attached deposit seeds the subaccount and must cover its storage.
    #[payable]
    #[handle_result]
    pub fn create_collection(
        &mut self,
        name: String,
        symbol: String,
        signature: Base64VecU8,
    ) -> Result<Promise, FactoryError> {
        if self.implementation_version == 0 {
            return Err(FactoryError::InvalidInput(
                "No sale-engine code has been published yet".to_string(),
            ));
        }
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(FactoryError::InvalidInput(format!(
                "Collection name must be 1-{MAX_NAME_LEN} bytes"
            )));
        }
        let symbol = symbol.to_lowercase();
        if !valid_symbol(&symbol) {
            return Err(FactoryError::InvalidInput(format!(
                "Symbol must be {MIN_SYMBOL_LEN}-{MAX_SYMBOL_LEN} chars of [a-z0-9_-]"
            )));
        }

        let creator_id = env::predecessor_account_id();
        let factory_id = env::current_account_id();
        let payload = collection_approval_payload(&factory_id, &creator_id);
        verify_signature(&payload, &signature.0, &self.platform_key).map_err(|e| match e {
            AuthError::InvalidInput(_) => FactoryError::SignatureInvalid(e.to_string()),
            AuthError::SignatureInvalid => {
                FactoryError::Unauthorized("Platform signature does not approve this caller".into())
            }
        })?;

        let collection_id: AccountId = format!("{symbol}.{factory_id}")
            .parse()
            .map_err(|_| {
                FactoryError::InvalidInput(format!(
                    "Symbol '{symbol}' does not form a valid subaccount of {factory_id}"
                ))
            })?;
        if self.collections.contains_key(&collection_id) {
            return Err(FactoryError::symbol_taken(&symbol));
        }

        let deposit = env::attached_deposit();
        if deposit < COLLECTION_STORAGE_DEPOSIT {
            return Err(FactoryError::InvalidInput(format!(
                "Attach at least {COLLECTION_STORAGE_DEPOSIT} to fund collection storage"
            )));
        }

        let init_args = json!({
            "owner_id": &creator_id,
            "recovery_id": &self.owner_id,
            "name": &name,
            "symbol": &symbol,
            "default_base_uri": &self.default_base_uri,
        })
        .to_string()
        .into_bytes();

        Ok(Promise::new(collection_id.clone())
            .create_account()
            .transfer(deposit)
            .use_global_contract_by_account_id(factory_id.clone())
            .function_call(
                "new".to_string(),
                init_args,
                NearToken::from_yoctonear(0),
                GAS_COLLECTION_INIT,
            )
            .then(
                Self::ext(factory_id)
                    .with_static_gas(GAS_CREATE_CALLBACK)
                    .on_collection_created(collection_id, creator_id, name, symbol, deposit),
            ))
    }

    /// Records the collection after its deploy batch resolves. On failure
    /// the attached deposit is returned to the creator; the subaccount was
    /// never created so nothing else needs rollback.
    #[private]
    pub fn on_collection_created(
        &mut self,
        collection_id: AccountId,
        creator_id: AccountId,
        name: String,
        symbol: String,
        deposit: NearToken,
    ) -> bool {
        if !is_promise_success() {
            events::FactoryEvent::CollectionCreateFailed {
                collection_id,
                creator_id: creator_id.clone(),
                refund: deposit,
            }
            .emit();
            Promise::new(creator_id).transfer(deposit);
            return false;
        }
        self.collections.insert(
            collection_id.clone(),
            CollectionRecord {
                creator_id: creator_id.clone(),
                name,
                symbol: symbol.clone(),
                implementation_version: self.implementation_version,
                created_at: env::block_timestamp(),
            },
        );
        self.collection_count += 1;
        events::FactoryEvent::CollectionCreated {
            collection_id,
            creator_id,
            symbol,
            implementation_version: self.implementation_version,
        }
        .emit();
        true
    }
}
