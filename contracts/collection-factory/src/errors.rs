use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum FactoryError {
    Unauthorized(String),
    InvalidInput(String),
    SignatureInvalid(String),
    AlreadyExists(String),
}

impl std::fmt::Display for FactoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            FactoryError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            FactoryError::SignatureInvalid(msg) => write!(f, "Signature invalid: {msg}"),
            FactoryError::AlreadyExists(msg) => write!(f, "Already exists: {msg}"),
        }
    }
}

impl FactoryError {
    pub fn only_owner() -> Self {
        FactoryError::Unauthorized("Only the factory owner can call this method".to_string())
    }

    pub fn symbol_taken(symbol: &str) -> Self {
        FactoryError::AlreadyExists(format!("Collection symbol '{symbol}' is already in use"))
    }
}
