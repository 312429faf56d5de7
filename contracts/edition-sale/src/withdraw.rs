use crate::*;
use near_sdk::json_types::U128;
use near_sdk::{NearToken, Promise, PromiseOrValue};

#[near]
impl Contract {
    /// Send an edition's accrued balance to its funding recipient.
    ///
    /// Deliberately unrestricted: the funds can only ever go to the
    /// recipient fixed on the edition, so the caller gains nothing. A zero
    /// balance is a no-op, not an error, making repeat calls harmless.
    #[handle_result]
    pub fn withdraw_funds(
        &mut self,
        edition_id: u64,
    ) -> Result<PromiseOrValue<()>, EditionError> {
        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;

        let amount = edition.balance.0;
        if amount == 0 {
            return Ok(PromiseOrValue::Value(()));
        }

        edition.balance = U128(0);
        let recipient = edition.funding_recipient.clone();

        events::emit_funds_withdrawn(edition_id, &recipient, U128(amount));

        Ok(PromiseOrValue::Promise(
            Promise::new(recipient).transfer(NearToken::from_yoctonear(amount)),
        ))
    }
}
