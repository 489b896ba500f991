//! State — a payment's behavior changes as its status does.
//!
//! Each status is its own type implementing the same trait; processing a
//! payment swaps the boxed state for the next one. There is no status
//! `match` in the payment itself.

use crate::domain::{DemoReport, DomainError, Pattern};

pub trait PaymentState {
    fn name(&self) -> &'static str;
    /// Returns the narration for this step and the state to move into.
    fn process(self: Box<Self>) -> (String, Box<dyn PaymentState>);
}

pub struct Draft;

impl PaymentState for Draft {
    fn name(&self) -> &'static str {
        "Draft"
    }

    fn process(self: Box<Self>) -> (String, Box<dyn PaymentState>) {
        ("Draft payment processed, now approved".to_string(), Box::new(Approved))
    }
}

pub struct Approved;

impl PaymentState for Approved {
    fn name(&self) -> &'static str {
        "Approved"
    }

    fn process(self: Box<Self>) -> (String, Box<dyn PaymentState>) {
        ("Approved payment settled".to_string(), Box::new(Settled))
    }
}

pub struct Settled;

impl PaymentState for Settled {
    fn name(&self) -> &'static str {
        "Settled"
    }

    fn process(self: Box<Self>) -> (String, Box<dyn PaymentState>) {
        ("Settled payment, nothing left to do".to_string(), self)
    }
}

/// Context. Delegates every `process` to its current state.
pub struct Payment {
    state: Box<dyn PaymentState>,
}

impl Payment {
    pub fn draft() -> Self {
        Self { state: Box::new(Draft) }
    }

    pub fn status(&self) -> &'static str {
        self.state.name()
    }

    pub fn process(&mut self) -> String {
        // Park a placeholder while the old state decides the next one.
        let current = std::mem::replace(&mut self.state, Box::new(Draft));
        let (narration, next) = current.process();
        self.state = next;
        narration
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::State);

    let mut payment = Payment::draft();
    report.record(format!("Payment status: {}", payment.status()));

    let narration = payment.process();
    report.record(narration);
    report.record(format!("Payment status: {}", payment.status()));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_moves_to_approved() {
        let mut payment = Payment::draft();
        payment.process();
        assert_eq!(payment.status(), "Approved");
    }

    #[test]
    fn approved_moves_to_settled_and_settled_stays_put() {
        let mut payment = Payment::draft();
        payment.process();
        payment.process();
        assert_eq!(payment.status(), "Settled");
        payment.process();
        assert_eq!(payment.status(), "Settled");
    }

    #[test]
    fn demo_narrates_the_transition() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "Payment status: Draft",
                "Draft payment processed, now approved",
                "Payment status: Approved",
            ]
        );
    }
}
