use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        recovery_id: AccountId,
        name: String,
        symbol: String,
        default_base_uri: String,
    ) -> Self {
        assert!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            "Name must be 1-{} characters",
            MAX_NAME_LEN
        );
        assert!(
            !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
            "Symbol must be 1-{} characters",
            MAX_SYMBOL_LEN
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            recovery_id,
            admins: IterableSet::new(StorageKey::Admins),
            name,
            symbol,
            default_base_uri,
            editions: IterableMap::new(StorageKey::Editions),
            edition_count: 0,
            items: IterableMap::new(StorageKey::Items),
            items_per_owner: LookupMap::new(StorageKey::ItemsPerOwner),
            total_supply: 0,
            used_tickets: LookupMap::new(StorageKey::UsedTickets),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), EditionError> {
        crate::guards::check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(EditionError::InvalidInput(
                "New owner must differ from current owner".into(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Reassign ownership without the current owner's cooperation.
    /// Restricted to the current owner and the platform recovery account;
    /// exists as a lost-key custody safety net.
    #[handle_result]
    pub fn set_owner_override(&mut self, new_owner: AccountId) -> Result<(), EditionError> {
        let actor_id = env::predecessor_account_id();
        if actor_id != self.owner_id && actor_id != self.recovery_id {
            return Err(EditionError::only_owner(
                "the collection owner or the recovery account",
            ));
        }
        self.owner_id = new_owner;
        events::emit_owner_overridden(&actor_id, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn grant_admin(&mut self, account_id: AccountId) -> Result<(), EditionError> {
        crate::guards::check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        if !self.admins.insert(account_id.clone()) {
            return Err(EditionError::InvalidInput("Already an admin".into()));
        }
        events::emit_admin_granted(&account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn revoke_admin(&mut self, account_id: AccountId) -> Result<(), EditionError> {
        crate::guards::check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        if !self.admins.remove(&account_id) {
            return Err(EditionError::NotFound("Not an admin".into()));
        }
        events::emit_admin_revoked(&account_id);
        Ok(())
    }

    pub fn is_admin(&self, account_id: AccountId) -> bool {
        self.admins.contains(&account_id)
    }

    pub fn get_admins(&self) -> Vec<&AccountId> {
        self.admins.iter().collect()
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_recovery_account(&self) -> &AccountId {
        &self.recovery_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
