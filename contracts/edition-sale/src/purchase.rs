use crate::*;
use near_sdk::json_types::{Base64VecU8, U128};

#[near]
impl Contract {
    /// Buy one unit of an edition. Before `start_time` this is a presale
    /// attempt and requires a ticket number plus a signature from the
    /// edition's signer key; during the public window signature and ticket
    /// are ignored. The attached deposit must equal the price exactly.
    ///
    /// Returns the minted item id as a decimal string.
    #[payable]
    #[handle_result]
    pub fn buy_edition(
        &mut self,
        edition_id: u64,
        signature: Option<Base64VecU8>,
        ticket_number: Option<u64>,
    ) -> Result<String, EditionError> {
        let buyer_id = env::predecessor_account_id();

        let edition = self
            .editions
            .get(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;

        if edition.num_sold >= edition.quantity {
            return Err(EditionError::sold_out());
        }

        let now = env::block_timestamp() / NANOS_PER_SEC;
        let is_presale = now < edition.start_time;
        // Public-sale convention: callers pass no ticket; the zero default
        // only matters on the presale branch.
        let ticket_number = ticket_number.unwrap_or(0);

        if is_presale {
            // Presale. The permissioned allocation caps how many units can
            // sell before the public window opens; it may exceed `quantity`
            // for an open presale-only edition.
            if edition.permissioned_quantity == 0 {
                return Err(EditionError::not_started());
            }
            if edition.num_sold >= edition.permissioned_quantity {
                return Err(EditionError::InvalidState(
                    "Presale allocation exhausted".into(),
                ));
            }

            let signer_key = edition.signer_key.as_ref().ok_or_else(|| {
                // Unreachable while create/set validation holds; fail closed.
                EditionError::InvalidState("Edition has no signer key configured".into())
            })?;
            let signature = signature.ok_or_else(|| {
                EditionError::SignatureInvalid("Presale purchase requires a signature".into())
            })?;

            let payload = edition_auth::presale_approval_payload(
                &env::current_account_id(),
                edition_id,
                ticket_number,
                &buyer_id,
            );
            edition_auth::verify_signature(&payload, &signature.0, signer_key)
                .map_err(|e| EditionError::SignatureInvalid(e.to_string()))?;

            if self.is_ticket_used(edition_id, ticket_number) {
                return Err(EditionError::ticket_already_used());
            }
        } else if now >= edition.end_time {
            // END_TIME_UNBOUNDED never trips this branch.
            return Err(EditionError::sale_ended());
        }

        let price = edition.price.0;
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit != price {
            return Err(EditionError::IncorrectPayment(format!(
                "Must attach exactly {} yoctoNEAR, got {}",
                price, deposit
            )));
        }

        // All checks passed; apply every effect of the purchase. A failure
        // above aborts the call with no state change and the deposit
        // refunded, so payment and mint are atomic.
        if is_presale {
            self.mark_ticket_used(edition_id, ticket_number);
        }

        let edition = self
            .editions
            .get_mut(&edition_id)
            .ok_or_else(EditionError::nonexistent_edition)?;
        edition.num_sold += 1;
        edition.balance = U128(edition.balance.0 + price);
        let serial = edition.num_sold;

        let item_id = item::item_id(edition_id, serial).to_string();
        self.items.insert(
            item_id.clone(),
            Item {
                owner_id: buyer_id.clone(),
                edition_id,
                serial,
                minted_at: env::block_timestamp(),
            },
        );
        self.add_item_to_owner(&buyer_id, &item_id);
        self.total_supply += 1;

        events::emit_item_purchased(edition_id, &buyer_id, &item_id, U128(price));

        Ok(item_id)
    }
}

impl Contract {
    pub(crate) fn add_item_to_owner(&mut self, owner_id: &AccountId, item_id: &str) {
        if !self.items_per_owner.contains_key(owner_id) {
            self.items_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::ItemsPerOwnerInner {
                    account_id_hash: crate::guards::hash_account_id(owner_id),
                }),
            );
        }
        self.items_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(item_id.to_string());
    }
}
