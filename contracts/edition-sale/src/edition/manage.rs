use crate::*;
use near_sdk::CurveType;

#[near]
impl Contract {
    #[handle_result]
    pub fn set_start_time(&mut self, edition_id: u64, start_time: u64) -> Result<(), EditionError> {
        self.check_owner_or_admin(&env::predecessor_account_id())?;
        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;
        if edition.end_time <= start_time {
            return Err(EditionError::InvalidInput(
                "End time must be greater than start time".into(),
            ));
        }
        edition.start_time = start_time;
        events::emit_time_set(edition_id, events::TimeType::Start, start_time);
        Ok(())
    }

    #[handle_result]
    pub fn set_end_time(&mut self, edition_id: u64, end_time: u64) -> Result<(), EditionError> {
        self.check_owner_or_admin(&env::predecessor_account_id())?;
        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;
        if end_time <= edition.start_time {
            return Err(EditionError::InvalidInput(
                "End time must be greater than start time".into(),
            ));
        }
        edition.end_time = end_time;
        events::emit_time_set(edition_id, events::TimeType::End, end_time);
        Ok(())
    }

    #[handle_result]
    pub fn set_permissioned_quantity(
        &mut self,
        edition_id: u64,
        permissioned_quantity: u32,
    ) -> Result<(), EditionError> {
        self.check_owner_or_admin(&env::predecessor_account_id())?;
        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;
        if permissioned_quantity > 0 && edition.signer_key.is_none() {
            return Err(EditionError::InvalidState(
                "Edition has no signer key configured".into(),
            ));
        }
        edition.permissioned_quantity = permissioned_quantity;
        events::emit_permissioned_quantity_set(edition_id, permissioned_quantity);
        Ok(())
    }

    /// Replace or clear the edition's presale signer. Clearing is rejected
    /// while the edition still carries permissioned quantity.
    #[handle_result]
    pub fn set_signer_key(
        &mut self,
        edition_id: u64,
        signer_key: Option<PublicKey>,
    ) -> Result<(), EditionError> {
        self.check_owner_or_admin(&env::predecessor_account_id())?;
        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;
        match &signer_key {
            None if edition.permissioned_quantity > 0 => {
                return Err(EditionError::InvalidInput(
                    "Cannot clear signer key while permissioned quantity is set".into(),
                ));
            }
            Some(key) if key.curve_type() != CurveType::ED25519 => {
                return Err(EditionError::InvalidInput(
                    "Signer key must be ed25519".into(),
                ));
            }
            _ => {}
        }
        edition.signer_key = signer_key.clone();
        events::emit_signer_key_set(edition_id, signer_key.as_ref());
        Ok(())
    }

    #[handle_result]
    pub fn set_edition_base_uri(
        &mut self,
        edition_id: u64,
        base_uri: String,
    ) -> Result<(), EditionError> {
        self.check_owner_or_admin(&env::predecessor_account_id())?;
        if base_uri.len() > MAX_BASE_URI_LEN {
            return Err(EditionError::InvalidInput(format!(
                "Base URI exceeds max length of {}",
                MAX_BASE_URI_LEN
            )));
        }
        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;
        edition.base_uri = base_uri.clone();
        events::emit_base_uri_set(edition_id, &base_uri);
        Ok(())
    }
}
