use super::money::Money;
use serde::{Deserialize, Serialize};

/// A coin type the machine recognizes, whether it credits it or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    pub name: String,
    pub value: Money,
    pub accepted: bool,
}

impl Denomination {
    pub fn new(name: impl Into<String>, value: Money, accepted: bool) -> Self {
        Self {
            name: name.into(),
            value,
            accepted,
        }
    }
}

/// How a validator classified an inserted coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinStatus {
    Accepted,
    /// Known denomination that the machine refuses to credit.
    Rejected,
    Unknown,
}

/// The result of one insertion, built fresh for every coin put in the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub name: String,
    pub value: Money,
    pub status: CoinStatus,
}

impl Coin {
    pub fn accepted(name: impl Into<String>, value: Money) -> Self {
        Self {
            name: name.into(),
            value,
            status: CoinStatus::Accepted,
        }
    }

    pub fn rejected(name: impl Into<String>, value: Money) -> Self {
        Self {
            name: name.into(),
            value,
            status: CoinStatus::Rejected,
        }
    }

    /// Unknown coins carry a zero value.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Money::ZERO,
            status: CoinStatus::Unknown,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == CoinStatus::Accepted
    }
}

impl From<&Denomination> for Coin {
    fn from(denomination: &Denomination) -> Self {
        if denomination.accepted {
            Coin::accepted(denomination.name.clone(), denomination.value)
        } else {
            Coin::rejected(denomination.name.clone(), denomination.value)
        }
    }
}
