use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), EditionError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(EditionError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_owner(&self, actor_id: &AccountId) -> Result<(), EditionError> {
        if actor_id != &self.owner_id {
            return Err(EditionError::only_owner("the collection owner"));
        }
        Ok(())
    }

    /// Capability check for protected operations: owner or any admin.
    pub(crate) fn check_owner_or_admin(&self, actor_id: &AccountId) -> Result<(), EditionError> {
        if actor_id != &self.owner_id && !self.admins.contains(actor_id) {
            return Err(EditionError::only_owner("the collection owner or an admin"));
        }
        Ok(())
    }
}
