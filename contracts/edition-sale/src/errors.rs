use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum EditionError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    SignatureInvalid(String),
    IncorrectPayment(String),
}

impl std::fmt::Display for EditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::SignatureInvalid(msg) => write!(f, "Invalid signature: {}", msg),
            Self::IncorrectPayment(msg) => write!(f, "Incorrect payment: {}", msg),
        }
    }
}

impl EditionError {
    pub fn nonexistent_edition() -> Self {
        Self::NotFound("Nonexistent edition".into())
    }
    pub fn nonexistent_item() -> Self {
        Self::NotFound("Nonexistent item".into())
    }
    pub fn sold_out() -> Self {
        Self::InvalidState("Edition is sold out".into())
    }
    pub fn sale_ended() -> Self {
        Self::InvalidState("Sale has ended".into())
    }
    pub fn not_started() -> Self {
        Self::InvalidState("Public sale has not started".into())
    }
    pub fn ticket_already_used() -> Self {
        Self::InvalidState("Ticket number already used".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
