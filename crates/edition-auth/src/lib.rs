//! Signature verification shared by the collection factory and the
//! edition sale engine.
//!
//! Two payload shapes exist, each under its own domain tag, so a signature
//! produced for one purpose can never validate for the other. NEAR exposes
//! no chain id to contracts; the verifying contract's own account id is
//! bound into every payload for replay separation instead.

mod crypto;
mod error;
mod payload;
mod verify;

pub use crypto::{ed25519_public_key_bytes, ed25519_signature_bytes};
pub use error::AuthError;
pub use payload::{collection_approval_payload, presale_approval_payload};
pub use verify::verify_signature;
