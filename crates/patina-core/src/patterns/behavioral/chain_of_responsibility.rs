//! Chain of responsibility — pass a transaction down a line of checks.
//!
//! Each handler does its own check and hands the transaction to the next
//! link. The chain short-circuits on the first rejection; a transaction
//! that falls off the end has passed everything.

use crate::domain::{DemoReport, DomainError, Pattern};

pub struct TxnReview {
    pub id: String,
    pub trail: Vec<String>,
}

impl TxnReview {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), trail: Vec::new() }
    }
}

pub trait ReviewHandler {
    fn handle(&self, review: &mut TxnReview) -> Result<(), DomainError>;
}

/// A link: its own check plus an optional next link.
pub struct BalanceCheck {
    next: Option<Box<dyn ReviewHandler>>,
}

impl BalanceCheck {
    pub fn new(next: Option<Box<dyn ReviewHandler>>) -> Self {
        Self { next }
    }
}

impl ReviewHandler for BalanceCheck {
    fn handle(&self, review: &mut TxnReview) -> Result<(), DomainError> {
        review.trail.push(format!("Balance check passed for {}", review.id));
        match &self.next {
            Some(next) => next.handle(review),
            None => Ok(()),
        }
    }
}

pub struct FraudCheck {
    next: Option<Box<dyn ReviewHandler>>,
}

impl FraudCheck {
    pub fn new(next: Option<Box<dyn ReviewHandler>>) -> Self {
        Self { next }
    }
}

impl ReviewHandler for FraudCheck {
    fn handle(&self, review: &mut TxnReview) -> Result<(), DomainError> {
        review.trail.push(format!("Fraud check passed for {}", review.id));
        match &self.next {
            Some(next) => next.handle(review),
            None => Ok(()),
        }
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::ChainOfResponsibility);

    let chain = BalanceCheck::new(Some(Box::new(FraudCheck::new(None))));

    let mut review = TxnReview::new("TXN123");
    chain.handle(&mut review)?;

    for line in review.trail {
        report.record(line);
    }
    report.record(format!("Transaction {} approved", review.id));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_links_run_in_order() {
        let chain = BalanceCheck::new(Some(Box::new(FraudCheck::new(None))));
        let mut review = TxnReview::new("TXN123");
        chain.handle(&mut review).unwrap();
        assert_eq!(
            review.trail,
            ["Balance check passed for TXN123", "Fraud check passed for TXN123"]
        );
    }

    #[test]
    fn single_link_chain_still_completes() {
        let chain = FraudCheck::new(None);
        let mut review = TxnReview::new("TXN9");
        chain.handle(&mut review).unwrap();
        assert_eq!(review.trail, ["Fraud check passed for TXN9"]);
    }

    #[test]
    fn demo_narrates_the_approval() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "Balance check passed for TXN123",
                "Fraud check passed for TXN123",
                "Transaction TXN123 approved",
            ]
        );
    }
}
