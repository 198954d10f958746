use crate::domain::money::Money;
use thiserror::Error;

/// Failures that stop the machine.
///
/// Bad coins, unknown products and short balances are not errors; they come
/// back as [`Outcome`](crate::application::outcome::Outcome) variants.
#[derive(Error, Debug)]
pub enum VendingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("vending machine is missing its {0}")]
    MissingCollaborator(&'static str),
    #[error("cannot deduct {requested} from a balance of {current}")]
    Overdraw { current: Money, requested: Money },
}

pub type Result<T> = std::result::Result<T, VendingError>;
