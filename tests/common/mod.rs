#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use vending_machine::application::machine::VendingMachine;
use vending_machine::domain::catalog::Catalog;
use vending_machine::domain::money::Money;
use vending_machine::domain::ports::{BalanceTracker, ChangeDispenser, Display, ProductDispenser};
use vending_machine::domain::product::Product;
use vending_machine::error::Result;
use vending_machine::infrastructure::in_memory::InMemoryBalance;
use vending_machine::infrastructure::validator::CatalogCoinValidator;

/// Everything the machine did to its collaborators, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dispensed(String),
    Change(Money),
    IdlePrompt,
    ShowBalance(Money),
    Message(String),
    Added(Money),
    Deducted(Money),
    Reset,
}

/// One shared log, handed to every fake so ordering across devices is kept.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn dispensed(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Dispensed(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn change(&self) -> Vec<Money> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Change(amount) => Some(amount),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl ProductDispenser for Recorder {
    fn dispense(&mut self, product: &Product) -> io::Result<()> {
        self.push(Event::Dispensed(product.name.clone()));
        Ok(())
    }
}

impl ChangeDispenser for Recorder {
    fn dispense_change(&mut self, amount: Money) -> io::Result<()> {
        self.push(Event::Change(amount));
        Ok(())
    }
}

impl Display for Recorder {
    fn show_idle_prompt(&mut self) -> io::Result<()> {
        self.push(Event::IdlePrompt);
        Ok(())
    }

    fn show_balance(&mut self, amount: Money) -> io::Result<()> {
        self.push(Event::ShowBalance(amount));
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.push(Event::Message(message.to_string()));
        Ok(())
    }
}

/// Real balance arithmetic with every mutation logged.
pub struct RecordingBalance {
    inner: InMemoryBalance,
    log: Recorder,
}

impl RecordingBalance {
    pub fn new(log: Recorder) -> Self {
        Self {
            inner: InMemoryBalance::new(),
            log,
        }
    }
}

impl BalanceTracker for RecordingBalance {
    fn add(&mut self, amount: Money) {
        self.log.push(Event::Added(amount));
        self.inner.add(amount);
    }

    fn deduct(&mut self, amount: Money) -> Result<()> {
        self.log.push(Event::Deducted(amount));
        self.inner.deduct(amount)
    }

    fn reset(&mut self) {
        self.log.push(Event::Reset);
        self.inner.reset();
    }

    fn current(&self) -> Money {
        self.inner.current()
    }
}

/// A standard-catalog machine whose devices all report to the returned recorder.
pub fn recorded_machine() -> (VendingMachine, Recorder) {
    let recorder = Recorder::default();
    let catalog = Arc::new(Catalog::standard());
    let machine = VendingMachine::builder()
        .validator(CatalogCoinValidator::new(Arc::clone(&catalog)))
        .catalog(catalog)
        .balance(RecordingBalance::new(recorder.clone()))
        .product_dispenser(recorder.clone())
        .change_dispenser(recorder.clone())
        .display(recorder.clone())
        .build()
        .expect("all collaborators supplied");
    (machine, recorder)
}
