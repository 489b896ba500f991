//! Template method — fix the transfer skeleton, vary the steps.
//!
//! Every transfer validates, authenticates, moves the money, and notifies,
//! in that order. The trait pins the sequence in a default method; each
//! transfer kind overrides only the steps that differ.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

pub trait TransferFlow {
    fn validate(&self, amount: Money) -> String {
        format!("Validated transfer of {amount}")
    }

    fn authenticate(&self) -> String {
        "Authenticated sender".to_string()
    }

    fn transfer(&self, amount: Money) -> String;

    fn notify(&self) -> String {
        "Notified both parties".to_string()
    }

    /// The template. Step order is fixed; steps themselves are hooks.
    fn run(&self, amount: Money) -> Vec<String> {
        vec![
            self.validate(amount),
            self.authenticate(),
            self.transfer(amount),
            self.notify(),
        ]
    }
}

/// Same-country transfer over the local clearing system.
pub struct DomesticTransfer;

impl TransferFlow for DomesticTransfer {
    fn transfer(&self, amount: Money) -> String {
        format!("Moved {amount} via domestic clearing")
    }
}

/// Cross-border transfer with an extra compliance hook.
pub struct InternationalTransfer;

impl TransferFlow for InternationalTransfer {
    fn validate(&self, amount: Money) -> String {
        format!("Validated cross-border transfer of {amount} against sanctions lists")
    }

    fn transfer(&self, amount: Money) -> String {
        format!("Moved {amount} via correspondent bank")
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::TemplateMethod);

    for line in DomesticTransfer.run(Money::from_dollars(750)) {
        report.record(line);
    }

    Ok(report)
}
