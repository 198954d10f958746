use super::outcome::{Declined, Outcome};
use crate::domain::catalog::Catalog;
use crate::domain::coin::CoinStatus;
use crate::domain::money::Money;
use crate::domain::ports::{
    BalanceTracker, BalanceTrackerBox, ChangeDispenser, ChangeDispenserBox, CoinValidator,
    CoinValidatorBox, Display, DisplayBox, ProductDispenser, ProductDispenserBox,
};
use crate::error::{Result, VendingError};
use std::io;
use std::sync::Arc;
use tracing::info;

/// What the front panel should show between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing inserted yet; the panel asks for a coin.
    Idle,
    Balance(Money),
}

/// The transaction controller.
///
/// Owns the balance and every output device. The machine is `Idle` while the
/// balance is zero and accumulating otherwise; a purchase or a refund always
/// brings it back to `Idle`.
pub struct VendingMachine {
    catalog: Arc<Catalog>,
    validator: CoinValidatorBox,
    balance: BalanceTrackerBox,
    product_dispenser: ProductDispenserBox,
    change_dispenser: ChangeDispenserBox,
    display: DisplayBox,
}

impl VendingMachine {
    pub fn builder() -> VendingMachineBuilder {
        VendingMachineBuilder::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn balance(&self) -> Money {
        self.balance.current()
    }

    /// Credits an accepted coin. Rejected and unknown coins leave the balance
    /// as it was.
    pub fn insert_coin(&mut self, coin_name: &str) -> Outcome {
        let coin = self.validator.validate(coin_name);
        let declined = match coin.status {
            CoinStatus::Accepted => {
                self.balance.add(coin.value);
                let balance = self.balance.current();
                info!(coin = %coin.name, value = %coin.value, balance = %balance, "coin accepted");
                return Outcome::CoinAccepted { coin, balance };
            }
            CoinStatus::Rejected => Declined::RejectedCoin {
                name: coin.name,
                value: coin.value,
            },
            CoinStatus::Unknown => Declined::UnknownCoinType(coin.name),
        };
        info!(reason = %declined, "coin returned");
        declined.into()
    }

    /// Sells a product if the balance covers it.
    ///
    /// On success the product is dispensed first, then the change computed
    /// from the balance before any deduction, and only then is the balance
    /// cleared. The balance is cleared even if the change dispenser fails.
    pub fn select_product(&mut self, product_name: &str) -> Result<Outcome> {
        let Some(product) = self.catalog.product(product_name).cloned() else {
            let declined = Declined::InvalidProduct(product_name.trim().to_string());
            info!(reason = %declined, "selection refused");
            return Ok(declined.into());
        };

        let balance = self.balance.current();
        if balance < product.price {
            let declined = Declined::InsufficientFunds {
                product: product.name,
                price: product.price,
                balance,
            };
            info!(reason = %declined, "selection refused");
            return Ok(declined.into());
        }

        self.product_dispenser.dispense(&product)?;
        let change = balance - product.price;
        self.balance.deduct(product.price)?;
        let dispensed = self.change_dispenser.dispense_change(change);
        self.balance.reset();
        dispensed?;

        info!(product = %product.name, price = %product.price, change = %change, "purchase completed");
        Ok(Outcome::PurchaseCompleted { product, change })
    }

    /// Hands back everything inserted so far.
    pub fn return_coins(&mut self) -> Result<Outcome> {
        let balance = self.balance.current();
        if !balance.is_positive() {
            return Ok(Outcome::NothingToReturn);
        }

        self.change_dispenser.dispense_change(balance)?;
        self.balance.reset();

        info!(amount = %balance, "coins returned");
        Ok(Outcome::Refunded(balance))
    }

    pub fn current_status(&self) -> Status {
        let balance = self.balance.current();
        if balance.is_zero() {
            Status::Idle
        } else {
            Status::Balance(balance)
        }
    }

    /// Pushes the current status to the display.
    pub fn show_status(&mut self) -> io::Result<()> {
        match self.current_status() {
            Status::Idle => self.display.show_idle_prompt(),
            Status::Balance(amount) => self.display.show_balance(amount),
        }
    }

    pub fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.display.show_message(message)
    }
}

/// Collects the machine's collaborators. Every one of them is required.
#[derive(Default)]
pub struct VendingMachineBuilder {
    catalog: Option<Arc<Catalog>>,
    validator: Option<CoinValidatorBox>,
    balance: Option<BalanceTrackerBox>,
    product_dispenser: Option<ProductDispenserBox>,
    change_dispenser: Option<ChangeDispenserBox>,
    display: Option<DisplayBox>,
}

impl VendingMachineBuilder {
    pub fn catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn validator(mut self, validator: impl CoinValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn balance(mut self, balance: impl BalanceTracker + 'static) -> Self {
        self.balance = Some(Box::new(balance));
        self
    }

    pub fn product_dispenser(mut self, dispenser: impl ProductDispenser + 'static) -> Self {
        self.product_dispenser = Some(Box::new(dispenser));
        self
    }

    pub fn change_dispenser(mut self, dispenser: impl ChangeDispenser + 'static) -> Self {
        self.change_dispenser = Some(Box::new(dispenser));
        self
    }

    pub fn display(mut self, display: impl Display + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    pub fn build(self) -> Result<VendingMachine> {
        Ok(VendingMachine {
            catalog: self
                .catalog
                .ok_or(VendingError::MissingCollaborator("catalog"))?,
            validator: self
                .validator
                .ok_or(VendingError::MissingCollaborator("coin validator"))?,
            balance: self
                .balance
                .ok_or(VendingError::MissingCollaborator("balance tracker"))?,
            product_dispenser: self
                .product_dispenser
                .ok_or(VendingError::MissingCollaborator("product dispenser"))?,
            change_dispenser: self
                .change_dispenser
                .ok_or(VendingError::MissingCollaborator("change dispenser"))?,
            display: self
                .display
                .ok_or(VendingError::MissingCollaborator("display"))?,
        })
    }
}
