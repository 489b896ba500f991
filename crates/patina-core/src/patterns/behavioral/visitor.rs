//! Visitor — run new reports over ledger entries without editing them.
//!
//! Ledger entry types accept a visitor and double-dispatch to the matching
//! `visit_*` method. A new report is a new visitor; the entries stay
//! closed.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

pub trait LedgerVisitor {
    fn visit_transaction(&mut self, entry: &Transaction);
    fn visit_fee(&mut self, entry: &Fee);
}

pub trait LedgerEntry {
    fn accept(&self, visitor: &mut dyn LedgerVisitor);
}

pub struct Transaction {
    pub description: String,
    pub amount: Money,
}

impl Transaction {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self { description: description.into(), amount }
    }
}

impl LedgerEntry for Transaction {
    fn accept(&self, visitor: &mut dyn LedgerVisitor) {
        visitor.visit_transaction(self);
    }
}

pub struct Fee {
    pub description: String,
    pub amount: Money,
}

impl Fee {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self { description: description.into(), amount }
    }
}

impl LedgerEntry for Fee {
    fn accept(&self, visitor: &mut dyn LedgerVisitor) {
        visitor.visit_fee(self);
    }
}

/// One concrete report: a line per entry plus a running total.
#[derive(Default)]
pub struct SummaryReport {
    lines: Vec<String>,
    total: Money,
}

impl SummaryReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

impl LedgerVisitor for SummaryReport {
    fn visit_transaction(&mut self, entry: &Transaction) {
        self.lines.push(format!("Transaction '{}': {}", entry.description, entry.amount));
        self.total = self.total + entry.amount;
    }

    fn visit_fee(&mut self, entry: &Fee) {
        self.lines.push(format!("Fee '{}': {}", entry.description, entry.amount));
        self.total = self.total + entry.amount;
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Visitor);

    let entries: Vec<Box<dyn LedgerEntry>> = vec![
        Box::new(Transaction::new("Payroll deposit", Money::from_dollars(3_000))),
        Box::new(Fee::new("Wire fee", Money::from_dollars(25))),
    ];

    let mut summary = SummaryReport::default();
    for entry in &entries {
        entry.accept(&mut summary);
    }

    for line in summary.lines() {
        report.record(line.clone());
    }
    report.record(format!("Summary total: {}", summary.total()));

    Ok(report)
}
