//! Composite — portfolios that contain accounts or other portfolios.
//!
//! A balance query should not care whether it is asked of a single savings
//! account or the customer's whole holdings tree. Leaves and groups share
//! one trait and groups sum their children recursively.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

/// Anything with a balance: a single account or a whole portfolio.
pub trait AccountComponent {
    fn name(&self) -> &str;
    fn balance(&self) -> Money;
}

/// Leaf: a concrete account.
pub struct Account {
    name: String,
    balance: Money,
}

impl Account {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self { name: name.into(), balance }
    }
}

impl AccountComponent for Account {
    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Money {
        self.balance
    }
}

/// Composite: a named group of components.
pub struct Portfolio {
    name: String,
    children: Vec<Box<dyn AccountComponent>>,
}

impl Portfolio {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), children: Vec::new() }
    }

    pub fn add(mut self, child: impl AccountComponent + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl AccountComponent for Portfolio {
    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Money {
        self.children
            .iter()
            .map(|child| child.balance())
            .fold(Money::default(), |total, balance| total + balance)
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Composite);

    let investments = Portfolio::new("Investments")
        .add(Account::new("Stocks", Money::from_dollars(12_000)))
        .add(Account::new("Bonds", Money::from_dollars(8_000)));

    let main = Portfolio::new("Main")
        .add(Account::new("Savings", Money::from_dollars(5_000)))
        .add(investments);

    report.record(format!("Portfolio {} total balance: {}", main.name(), main.balance()));

    Ok(report)
}
