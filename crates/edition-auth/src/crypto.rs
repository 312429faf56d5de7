//! Ed25519 byte extraction helpers.

use crate::AuthError;

/// Extract 32 raw ed25519 public key bytes.
/// Accepts 32-byte (raw) or 33-byte (curve-type prefix + key) input.
pub fn ed25519_public_key_bytes(pk_raw: &[u8]) -> Result<[u8; 32], AuthError> {
    match pk_raw.len() {
        32 => pk_raw
            .try_into()
            .map_err(|_| AuthError::InvalidInput("malformed ed25519 public key".into())),
        33 => pk_raw
            .get(1..)
            .ok_or_else(|| AuthError::InvalidInput("malformed ed25519 public key".into()))?
            .try_into()
            .map_err(|_| AuthError::InvalidInput("malformed ed25519 public key".into())),
        _ => Err(AuthError::InvalidInput(
            "malformed ed25519 public key".into(),
        )),
    }
}

/// Extract 64 raw ed25519 signature bytes.
pub fn ed25519_signature_bytes(signature: &[u8]) -> Result<[u8; 64], AuthError> {
    signature
        .try_into()
        .map_err(|_| AuthError::InvalidInput("malformed ed25519 signature".into()))
}
