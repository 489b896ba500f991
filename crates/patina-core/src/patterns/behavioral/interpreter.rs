//! Interpreter — evaluate compliance rules as an expression tree.
//!
//! Rules like "amount over 1000 and country is US" are built from small
//! expression nodes and evaluated against a transaction context. New rule
//! vocabulary is a new node type, not a parser rewrite.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

/// What a rule is evaluated against.
pub struct TxnContext {
    pub amount: Money,
    pub country: String,
}

impl TxnContext {
    pub fn new(amount: Money, country: impl Into<String>) -> Self {
        Self { amount, country: country.into() }
    }
}

pub trait RuleExpr {
    fn interpret(&self, ctx: &TxnContext) -> bool;
}

pub struct AmountOver(pub Money);

impl RuleExpr for AmountOver {
    fn interpret(&self, ctx: &TxnContext) -> bool {
        ctx.amount > self.0
    }
}

pub struct CountryIs(pub String);

impl RuleExpr for CountryIs {
    fn interpret(&self, ctx: &TxnContext) -> bool {
        ctx.country == self.0
    }
}

pub struct And(pub Box<dyn RuleExpr>, pub Box<dyn RuleExpr>);

impl RuleExpr for And {
    fn interpret(&self, ctx: &TxnContext) -> bool {
        self.0.interpret(ctx) && self.1.interpret(ctx)
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Interpreter);

    let rule = And(
        Box::new(AmountOver(Money::from_dollars(1_000))),
        Box::new(CountryIs("US".to_string())),
    );

    let ctx = TxnContext::new(Money::from_dollars(1_200), "US");
    report.record(format!(
        "Rule 'amount > $1,000.00 AND country == US' on ($1,200.00, US): {}",
        rule.interpret(&ctx),
    ));

    Ok(report)
}
