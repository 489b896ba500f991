//! Null object — an unknown customer that behaves like a customer.
//!
//! Lookups always return a usable `Customer`; callers never branch on a
//! missing one. The null object answers with safe defaults instead.

use crate::domain::{DemoReport, DomainError, Pattern};

pub trait Customer {
    fn name(&self) -> &str;
    fn is_known(&self) -> bool;
}

pub struct RealCustomer {
    name: String,
}

impl RealCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Customer for RealCustomer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_known(&self) -> bool {
        true
    }
}

/// Stands in for a customer the registry does not have.
pub struct UnknownCustomer;

impl Customer for UnknownCustomer {
    fn name(&self) -> &str {
        "Unknown"
    }

    fn is_known(&self) -> bool {
        false
    }
}

/// Tiny in-memory registry. Never hands back a missing customer.
pub struct CustomerRegistry {
    names: Vec<String>,
}

impl CustomerRegistry {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self { names: names.into_iter().collect() }
    }

    pub fn find(&self, name: &str) -> Box<dyn Customer> {
        if self.names.iter().any(|known| known == name) {
            Box::new(RealCustomer::new(name))
        } else {
            Box::new(UnknownCustomer)
        }
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::NullObject);

    let registry = CustomerRegistry::new(["Alice".to_string(), "Bob".to_string()]);

    let found = registry.find("Alice");
    report.record(format!("Lookup 'Alice': name={}, known={}", found.name(), found.is_known()));

    let missing = registry.find("Mallory");
    report.record(format!(
        "Lookup 'Mallory': name={}, known={}",
        missing.name(),
        missing.is_known(),
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_customers_come_back_real() {
        let registry = CustomerRegistry::new(["Alice".to_string()]);
        let customer = registry.find("Alice");
        assert_eq!(customer.name(), "Alice");
        assert!(customer.is_known());
    }

    #[test]
    fn missing_customers_come_back_as_the_null_object() {
        let registry = CustomerRegistry::new(["Alice".to_string()]);
        let customer = registry.find("Mallory");
        assert_eq!(customer.name(), "Unknown");
        assert!(!customer.is_known());
    }

    #[test]
    fn demo_narrates_both_lookups() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "Lookup 'Alice': name=Alice, known=true",
                "Lookup 'Mallory': name=Unknown, known=false",
            ]
        );
    }
}
