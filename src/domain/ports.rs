use super::coin::Coin;
use super::money::Money;
use super::product::Product;
use crate::error::Result;
use std::io;

/// Classifies whatever was put in the coin slot.
pub trait CoinValidator {
    fn validate(&self, coin_name: &str) -> Coin;
}

/// Holds the money inserted so far.
///
/// The balance never goes below zero: `deduct` refuses amounts larger than
/// the current balance.
pub trait BalanceTracker {
    fn add(&mut self, amount: Money);
    fn deduct(&mut self, amount: Money) -> Result<()>;
    fn reset(&mut self);
    fn current(&self) -> Money;
}

pub trait ProductDispenser {
    fn dispense(&mut self, product: &Product) -> io::Result<()>;
}

pub trait ChangeDispenser {
    /// A zero amount is a valid call and dispenses nothing.
    fn dispense_change(&mut self, amount: Money) -> io::Result<()>;
}

/// The machine's front panel.
pub trait Display {
    fn show_idle_prompt(&mut self) -> io::Result<()>;
    fn show_balance(&mut self, amount: Money) -> io::Result<()>;
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}

pub type CoinValidatorBox = Box<dyn CoinValidator>;
pub type BalanceTrackerBox = Box<dyn BalanceTracker>;
pub type ProductDispenserBox = Box<dyn ProductDispenser>;
pub type ChangeDispenserBox = Box<dyn ChangeDispenser>;
pub type DisplayBox = Box<dyn Display>;
