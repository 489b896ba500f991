//! Command — reify a transfer as an object the invoker can queue and log.
//!
//! The invoker executes commands without knowing what they do and keeps a
//! history of their receipts, which is what makes replay and audit trails
//! possible.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

pub trait Command {
    fn execute(&self) -> String;
}

/// Moves money between two named accounts.
pub struct TransferCommand {
    from: String,
    to: String,
    amount: Money,
}

impl TransferCommand {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Money) -> Self {
        Self { from: from.into(), to: to.into(), amount }
    }
}

impl Command for TransferCommand {
    fn execute(&self) -> String {
        format!("Transferred {} from {} to {}", self.amount, self.from, self.to)
    }
}

/// Runs commands and remembers what they reported.
#[derive(Default)]
pub struct Invoker {
    history: Vec<String>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, command: &dyn Command) -> String {
        let receipt = command.execute();
        self.history.push(receipt.clone());
        receipt
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Command);

    let mut invoker = Invoker::new();
    let transfer = TransferCommand::new("Checking", "Savings", Money::from_dollars(500));

    report.record(invoker.run(&transfer));
    report.record(format!("Invoker history holds {} receipt(s)", invoker.history().len()));

    Ok(report)
}
