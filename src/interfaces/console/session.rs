use super::terminal::Terminal;
use crate::application::command::Command;
use crate::application::machine::VendingMachine;
use crate::application::outcome::{Declined, Outcome};
use crate::domain::catalog::Catalog;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Reads commands line by line and feeds them to the machine until `exit`
/// or end of input.
pub struct Session<R: BufRead, W: Write> {
    machine: VendingMachine,
    terminal: Terminal<W>,
    input: R,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(machine: VendingMachine, terminal: Terminal<W>, input: R) -> Self {
        Self {
            machine,
            terminal,
            input,
        }
    }

    pub fn run(mut self) -> Result<()> {
        self.banner()?;
        self.machine.show_status()?;

        let hint = usage_hint(self.machine.catalog());
        let mut line = String::new();
        loop {
            self.terminal.line("")?;
            self.terminal.line(&hint)?;
            self.terminal.prompt("> ")?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            let outcome = match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(Command::Insert(coin)) => self.machine.insert_coin(&coin),
                Ok(Command::Select(product)) => self.machine.select_product(&product)?,
                Ok(Command::Return) => self.machine.return_coins()?,
                Err(declined) => {
                    info!(reason = %declined, "command ignored");
                    Outcome::Declined(declined)
                }
            };

            self.report(&outcome)?;
            self.machine.show_status()?;
        }

        self.terminal
            .line("Thank you for using the Vending Machine Simulator!")?;
        Ok(())
    }

    fn banner(&self) -> Result<()> {
        let catalog = self.machine.catalog();
        let t = &self.terminal;

        t.line("--- Vending Machine Simulator ---")?;
        t.line("Products:")?;
        for product in catalog.all_products() {
            t.line(&format!("  - {} ({})", product.name, product.price))?;
        }

        let accepted: Vec<_> = catalog
            .accepted_coins()
            .map(|c| format!("{} ({})", c.name, c.value))
            .collect();
        t.line(&format!("Accepted Coins: {}", accepted.join(", ")))?;

        let rejected: Vec<_> = catalog
            .rejected_coins()
            .map(|c| format!("{} ({})", c.name, c.value))
            .collect();
        match rejected.len() {
            0 => {}
            1 => t.line(&format!("Rejected Coin: {}", rejected[0]))?,
            _ => t.line(&format!("Rejected Coins: {}", rejected.join(", ")))?,
        }

        t.line("---------------------------------")?;
        Ok(())
    }

    fn report(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::CoinAccepted { coin, .. } => {
                self.terminal
                    .line(&format!("Accepted: {} ({}).", coin.name, coin.value))?;
            }
            Outcome::PurchaseCompleted { .. } => {
                self.machine.show_message("THANK YOU")?;
            }
            // The change dispenser has already announced the refund.
            Outcome::Refunded(_) => {}
            Outcome::NothingToReturn => {
                self.terminal.line("No coins to return.")?;
            }
            Outcome::Declined(declined) => self.report_declined(declined)?,
        }
        Ok(())
    }

    fn report_declined(&mut self, declined: &Declined) -> Result<()> {
        match declined {
            Declined::RejectedCoin { name, value } => {
                self.terminal
                    .line(&format!("Rejected: {name} ({value}). Returning coin."))?;
            }
            Declined::UnknownCoinType(name) => {
                let accepted: Vec<_> = self
                    .machine
                    .catalog()
                    .accepted_coins()
                    .map(|c| c.name.clone())
                    .collect();
                self.terminal.line(&format!(
                    "Invalid coin type: '{name}'. Please use {}.",
                    or_list(&accepted)
                ))?;
            }
            Declined::InvalidProduct(name) => {
                self.machine.show_message("INVALID PRODUCT")?;
                self.terminal
                    .line(&format!("Product '{name}' does not exist."))?;
            }
            Declined::InsufficientFunds {
                product,
                price,
                balance,
            } => {
                self.machine.show_message(&format!("PRICE {price}"))?;
                self.terminal.line(&format!(
                    "Not enough money for {product}. Price: {price}. Current: {balance}."
                ))?;
            }
            Declined::InvalidCommand(_) => {
                self.terminal.line("Invalid command. Please try again.")?;
            }
        }
        Ok(())
    }
}

fn usage_hint(catalog: &Catalog) -> String {
    let coin = catalog
        .accepted_coins()
        .last()
        .map_or("quarter", |c| c.name.as_str());
    let products = catalog.all_products();
    let product = products.first().map_or("cola", |p| p.name.as_str());
    format!(
        "Enter 'insert <coin>' (e.g., 'insert {coin}') or 'select <product>' (e.g., 'select {product}') or 'return' or 'exit'."
    )
}

/// `a`, `a or b`, `a, b, or c`.
fn or_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    }
}
