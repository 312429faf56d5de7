/// Verification error, independent of either contract's error surface.
#[derive(Debug, Clone)]
pub enum AuthError {
    InvalidInput(String),
    SignatureInvalid,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::SignatureInvalid => write!(f, "invalid ed25519 signature"),
        }
    }
}

impl std::error::Error for AuthError {}
