use crate::domain::money::Money;
use crate::domain::ports::BalanceTracker;
use crate::error::{Result, VendingError};

/// Balance kept in process memory; it does not survive a restart.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBalance {
    amount: Money,
}

impl InMemoryBalance {
    /// Creates a tracker holding zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BalanceTracker for InMemoryBalance {
    fn add(&mut self, amount: Money) {
        self.amount += amount;
    }

    fn deduct(&mut self, amount: Money) -> Result<()> {
        if amount > self.amount {
            return Err(VendingError::Overdraw {
                current: self.amount,
                requested: amount,
            });
        }
        self.amount -= amount;
        Ok(())
    }

    fn reset(&mut self) {
        self.amount = Money::ZERO;
    }

    fn current(&self) -> Money {
        self.amount
    }
}
