use super::terminal::Terminal;
use crate::domain::money::Money;
use crate::domain::ports::{ChangeDispenser, Display, ProductDispenser};
use crate::domain::product::Product;
use crossterm::style::Color;
use std::io::{self, Write};

pub const IDLE_PROMPT: &str = "INSERT COIN";

/// Front panel lines, prefixed with `DISPLAY:`.
pub struct ConsoleDisplay<W: Write> {
    terminal: Terminal<W>,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(terminal: Terminal<W>) -> Self {
        Self { terminal }
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn show_idle_prompt(&mut self) -> io::Result<()> {
        self.show_message(IDLE_PROMPT)
    }

    fn show_balance(&mut self, amount: Money) -> io::Result<()> {
        self.terminal
            .colored_line(&format!("DISPLAY: {amount}"), Color::DarkYellow)
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.terminal
            .colored_line(&format!("DISPLAY: {message}"), Color::Green)
    }
}

pub struct ConsoleProductDispenser<W: Write> {
    terminal: Terminal<W>,
}

impl<W: Write> ConsoleProductDispenser<W> {
    pub fn new(terminal: Terminal<W>) -> Self {
        Self { terminal }
    }
}

impl<W: Write> ProductDispenser for ConsoleProductDispenser<W> {
    fn dispense(&mut self, product: &Product) -> io::Result<()> {
        self.terminal
            .line(&format!("Dispensing {}. Enjoy!", product.name))
    }
}

pub struct ConsoleChangeDispenser<W: Write> {
    terminal: Terminal<W>,
}

impl<W: Write> ConsoleChangeDispenser<W> {
    pub fn new(terminal: Terminal<W>) -> Self {
        Self { terminal }
    }
}

impl<W: Write> ChangeDispenser for ConsoleChangeDispenser<W> {
    fn dispense_change(&mut self, amount: Money) -> io::Result<()> {
        if amount.is_positive() {
            self.terminal
                .line(&format!("Returning change: {amount}."))?;
        }
        Ok(())
    }
}
