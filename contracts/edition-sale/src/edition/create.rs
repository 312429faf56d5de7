use crate::*;
use near_sdk::CurveType;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    /// Create the next edition. Caller must be the owner or an admin; the
    /// supplied `edition_id` must equal `edition_count + 1`.
    #[handle_result]
    pub fn create_edition(&mut self, config: EditionConfig) -> Result<u64, EditionError> {
        self.check_owner_or_admin(&env::predecessor_account_id())?;

        let EditionConfig {
            edition_id,
            funding_recipient,
            price,
            quantity,
            royalty_bps,
            start_time,
            end_time,
            permissioned_quantity,
            signer_key,
            base_uri,
        } = config;

        if quantity == 0 {
            return Err(EditionError::InvalidInput("Quantity must be > 0".into()));
        }
        if royalty_bps > BASIS_POINTS {
            return Err(EditionError::InvalidInput(format!(
                "Royalty must be 0-{} bps",
                BASIS_POINTS
            )));
        }
        if end_time <= start_time {
            return Err(EditionError::InvalidInput(
                "End time must be greater than start time".into(),
            ));
        }
        if permissioned_quantity > 0 {
            match &signer_key {
                None => {
                    return Err(EditionError::InvalidInput(
                        "Permissioned edition must have a signer key".into(),
                    ));
                }
                Some(key) if key.curve_type() != CurveType::ED25519 => {
                    return Err(EditionError::InvalidInput(
                        "Signer key must be ed25519".into(),
                    ));
                }
                Some(_) => {}
            }
        }
        // Sequential assignment: external indexers can predict the next id,
        // and two racing creations cannot both land on it.
        if edition_id != self.edition_count + 1 {
            return Err(EditionError::InvalidInput(format!(
                "Wrong edition id: expected {}",
                self.edition_count + 1
            )));
        }

        let base_uri = base_uri.unwrap_or_default();
        if base_uri.len() > MAX_BASE_URI_LEN {
            return Err(EditionError::InvalidInput(format!(
                "Base URI exceeds max length of {}",
                MAX_BASE_URI_LEN
            )));
        }

        let edition = Edition {
            funding_recipient: funding_recipient.clone(),
            price,
            quantity,
            num_sold: 0,
            royalty_bps,
            start_time,
            end_time,
            permissioned_quantity,
            signer_key: signer_key.clone(),
            base_uri: base_uri.clone(),
            balance: U128(0),
            created_at: env::block_timestamp(),
        };

        self.editions.insert(edition_id, edition);
        self.edition_count += 1;

        events::emit_edition_created(&events::EditionCreated {
            edition_id,
            funding_recipient: &funding_recipient,
            price,
            quantity,
            royalty_bps,
            start_time,
            end_time,
            permissioned_quantity,
            signer_key: signer_key.as_ref(),
            base_uri: &base_uri,
        });

        Ok(edition_id)
    }
}
