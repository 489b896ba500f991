//! Decorator — layer encryption onto a transaction without touching it.
//!
//! The base processor just executes; wrappers add behavior around it.
//! Because decorators implement the same trait they wrap, layers stack in
//! any order and callers stay oblivious.

use crate::domain::{DemoReport, DomainError, Pattern};

pub trait TransactionStep {
    fn execute(&self, payload: &str) -> String;
}

/// Plain execution, no extras.
pub struct BasicTransaction;

impl TransactionStep for BasicTransaction {
    fn execute(&self, payload: &str) -> String {
        format!("Processed transaction: {payload}")
    }
}

/// Encrypts the payload before handing off to the wrapped step.
pub struct EncryptedTransaction {
    inner: Box<dyn TransactionStep>,
}

impl EncryptedTransaction {
    pub fn new(inner: Box<dyn TransactionStep>) -> Self {
        Self { inner }
    }
}

impl TransactionStep for EncryptedTransaction {
    fn execute(&self, payload: &str) -> String {
        let encrypted = format!("encrypted({payload})");
        self.inner.execute(&encrypted)
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Decorator);

    let step = EncryptedTransaction::new(Box::new(BasicTransaction));
    report.record(step.execute("wire $500 to ACME Corp"));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorator_wraps_the_base_step() {
        let step = EncryptedTransaction::new(Box::new(BasicTransaction));
        assert_eq!(
            step.execute("payload"),
            "Processed transaction: encrypted(payload)"
        );
    }

    #[test]
    fn decorators_stack() {
        let step = EncryptedTransaction::new(Box::new(EncryptedTransaction::new(Box::new(
            BasicTransaction,
        ))));
        assert_eq!(
            step.execute("payload"),
            "Processed transaction: encrypted(encrypted(payload))"
        );
    }

    #[test]
    fn demo_narrates_the_encrypted_run() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            ["Processed transaction: encrypted(wire $500 to ACME Corp)"]
        );
    }
}
