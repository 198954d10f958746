//! Application layer containing the transaction state machine.
//!
//! [`machine::VendingMachine`] ties the catalog, coin validator and balance
//! tracker together and drives the dispensers and display. Commands arrive
//! already parsed as [`command::Command`] and every call answers with an
//! [`outcome::Outcome`].

pub mod command;
pub mod machine;
pub mod outcome;
