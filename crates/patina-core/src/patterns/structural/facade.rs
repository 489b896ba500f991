//! Facade — one payment entry point over three back-office subsystems.
//!
//! Card validation, fraud screening, and ledger posting are separate
//! subsystems with their own interfaces. The facade runs them in order and
//! gives callers a single `pay` call, with each stage narrated.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

struct CardValidator;

impl CardValidator {
    // Toy check standing in for a BIN lookup: valid cards start with '4'.
    fn is_valid(&self, card_number: &str) -> bool {
        card_number.starts_with('4')
    }
}

struct FraudScreen;

impl FraudScreen {
    fn is_suspicious(&self, card_number: &str) -> bool {
        card_number == "4000000000000000"
    }
}

struct Ledger;

impl Ledger {
    fn post(&self, card_number: &str, amount: Money) -> String {
        let tail = &card_number[card_number.len().saturating_sub(4)..];
        format!("Posted {amount} charge to card ending {tail}")
    }
}

/// The single entry point callers see.
pub struct PaymentFacade {
    validator: CardValidator,
    fraud: FraudScreen,
    ledger: Ledger,
}

impl PaymentFacade {
    pub fn new() -> Self {
        Self { validator: CardValidator, fraud: FraudScreen, ledger: Ledger }
    }

    /// Validate, screen, then post. Fails fast on the first stage that rejects.
    pub fn pay(&self, card_number: &str, amount: Money) -> Result<String, DomainError> {
        if !self.validator.is_valid(card_number) {
            return Err(DomainError::PaymentDeclined { card: card_number.to_string() });
        }
        if self.fraud.is_suspicious(card_number) {
            return Err(DomainError::PaymentDeclined { card: card_number.to_string() });
        }
        Ok(self.ledger.post(card_number, amount))
    }
}

impl Default for PaymentFacade {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Facade);

    let facade = PaymentFacade::new();

    match facade.pay("4111111111111111", Money::from_dollars(250)) {
        Ok(receipt) => report.record(receipt),
        Err(err) => report.record(format!("Payment declined: {err}")),
    }

    // A screened-out card is part of the story, not a failure of the demo.
    match facade.pay("4000000000000000", Money::from_dollars(90)) {
        Ok(receipt) => report.record(receipt),
        Err(_) => report.record("Payment declined by fraud screen".to_string()),
    }

    Ok(report)
}
