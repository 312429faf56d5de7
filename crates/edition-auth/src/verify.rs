//! Ed25519 signature verification using NEAR host functions.

use near_sdk::{CurveType, PublicKey, env};

use crate::AuthError;

/// Verify `signature` over sha256(`payload`) against `public_key`.
///
/// Deterministic and state-free. Malformed key or signature bytes fail
/// closed as `InvalidInput`; a well-formed signature that does not match
/// is `SignatureInvalid`, so callers can distinguish the two.
pub fn verify_signature(
    payload: &[u8],
    signature: &[u8],
    public_key: &PublicKey,
) -> Result<(), AuthError> {
    if public_key.curve_type() != CurveType::ED25519 {
        return Err(AuthError::InvalidInput(
            "only ed25519 public keys are supported".into(),
        ));
    }
    let pk_bytes = crate::ed25519_public_key_bytes(public_key.as_bytes())?;
    let sig_bytes = crate::ed25519_signature_bytes(signature)?;

    let payload_hash = env::sha256_array(payload);
    if !env::ed25519_verify(&sig_bytes, &payload_hash, &pk_bytes) {
        return Err(AuthError::SignatureInvalid);
    }

    Ok(())
}
