//! Iterator — walk a customer's accounts without exposing the container.
//!
//! The collection hands out a standard `Iterator`, so callers get `for`
//! loops and the whole adapter toolbox for free instead of a bespoke
//! cursor API.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub kind: String,
    pub balance: Money,
}

impl Account {
    pub fn new(kind: impl Into<String>, balance: Money) -> Self {
        Self { kind: kind.into(), balance }
    }
}

/// The aggregate. Storage stays private; traversal goes through `iter`.
#[derive(Default)]
pub struct AccountBook {
    accounts: Vec<Account>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }
}

impl<'a> IntoIterator for &'a AccountBook {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Iterator);

    let mut book = AccountBook::new();
    book.add(Account::new("Savings", Money::from_dollars(5_000)));
    book.add(Account::new("Loan", Money::from_dollars(-12_000)));

    for account in &book {
        report.record(format!("Account {}: {}", account.kind, account.balance));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut book = AccountBook::new();
        book.add(Account::new("Savings", Money::from_dollars(5_000)));
        book.add(Account::new("Loan", Money::from_dollars(-12_000)));

        let kinds: Vec<&str> = book.iter().map(|account| account.kind.as_str()).collect();
        assert_eq!(kinds, ["Savings", "Loan"]);
    }

    #[test]
    fn standard_adapters_work_on_the_aggregate() {
        let mut book = AccountBook::new();
        book.add(Account::new("Savings", Money::from_dollars(5_000)));
        book.add(Account::new("Loan", Money::from_dollars(-12_000)));

        let negatives = book.iter().filter(|a| a.balance < Money::default()).count();
        assert_eq!(negatives, 1);
    }

    #[test]
    fn demo_narrates_each_account() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "Account Savings: $5,000.00",
                "Account Loan: -$12,000.00",
            ]
        );
    }
}
