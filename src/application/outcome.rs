use crate::domain::coin::Coin;
use crate::domain::money::Money;
use crate::domain::product::Product;
use thiserror::Error;

/// What a single command did to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    CoinAccepted { coin: Coin, balance: Money },
    PurchaseCompleted { product: Product, change: Money },
    Refunded(Money),
    NothingToReturn,
    /// The input was refused; the balance is untouched.
    Declined(Declined),
}

/// Expected user mistakes. None of them change the balance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Declined {
    #[error("rejected coin {name} ({value})")]
    RejectedCoin { name: String, value: Money },
    #[error("unknown coin type '{0}'")]
    UnknownCoinType(String),
    #[error("unknown product '{0}'")]
    InvalidProduct(String),
    #[error("insufficient funds for {product}: price {price}, balance {balance}")]
    InsufficientFunds {
        product: String,
        price: Money,
        balance: Money,
    },
    #[error("invalid command '{0}'")]
    InvalidCommand(String),
}

impl From<Declined> for Outcome {
    fn from(declined: Declined) -> Self {
        Outcome::Declined(declined)
    }
}
