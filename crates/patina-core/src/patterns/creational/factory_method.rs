//! Factory Method — create transaction processors without naming their
//! concrete types.
//!
//! Payment rails differ (card networks settle differently from wire
//! transfers), but callers only care about "process this amount". The
//! factory keeps the rail choice in one place.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

/// Which payment rail a transaction rides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    Credit,
    Wire,
}

/// Product interface: something that can move money.
pub trait TransactionProcessor {
    /// Process a transaction, returning the narration of what happened.
    fn process(&self, amount: Money) -> String;
}

pub struct CreditCardProcessor;

impl TransactionProcessor for CreditCardProcessor {
    fn process(&self, amount: Money) -> String {
        format!("Processing credit-card transaction: {amount}")
    }
}

pub struct WireTransferProcessor;

impl TransactionProcessor for WireTransferProcessor {
    fn process(&self, amount: Money) -> String {
        format!("Processing wire transfer transaction: {amount}")
    }
}

/// The factory method: callers pick a [`ProcessorKind`], never a concrete
/// processor type.
pub struct ProcessorFactory;

impl ProcessorFactory {
    pub fn create(kind: ProcessorKind) -> Box<dyn TransactionProcessor> {
        match kind {
            ProcessorKind::Credit => Box::new(CreditCardProcessor),
            ProcessorKind::Wire => Box::new(WireTransferProcessor),
        }
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::FactoryMethod);

    let processor = ProcessorFactory::create(ProcessorKind::Credit);
    report.record(processor.process(Money::from_dollars(250)));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_selects_the_right_rail() {
        let credit = ProcessorFactory::create(ProcessorKind::Credit);
        let wire = ProcessorFactory::create(ProcessorKind::Wire);
        assert!(credit.process(Money::from_dollars(1)).contains("credit-card"));
        assert!(wire.process(Money::from_dollars(1)).contains("wire transfer"));
    }

    #[test]
    fn demo_processes_250_dollars_by_card() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            &["Processing credit-card transaction: $250.00"]
        );
    }
}
