//! Text console front end: a colored terminal, the console dispensers and
//! display, and the read-eval loop that drives the machine.

pub mod display;
pub mod session;
pub mod terminal;

use crate::application::machine::VendingMachine;
use crate::domain::catalog::Catalog;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryBalance;
use crate::infrastructure::validator::CatalogCoinValidator;
use display::{ConsoleChangeDispenser, ConsoleDisplay, ConsoleProductDispenser};
use std::io::Write;
use std::sync::Arc;
use terminal::Terminal;

/// Wires a machine whose devices all print to `terminal`.
pub fn console_machine<W: Write + 'static>(
    catalog: Arc<Catalog>,
    terminal: &Terminal<W>,
) -> Result<VendingMachine> {
    VendingMachine::builder()
        .validator(CatalogCoinValidator::new(Arc::clone(&catalog)))
        .catalog(catalog)
        .balance(InMemoryBalance::new())
        .product_dispenser(ConsoleProductDispenser::new(terminal.clone()))
        .change_dispenser(ConsoleChangeDispenser::new(terminal.clone()))
        .display(ConsoleDisplay::new(terminal.clone()))
        .build()
}
