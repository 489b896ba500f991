//! Strategy — swap the tax calculation per jurisdiction.
//!
//! Each jurisdiction taxes income differently; the calculator holds a
//! boxed strategy and never branches on country codes itself. Adding a
//! jurisdiction is a new strategy type, not a new `match` arm.

use crate::domain::{DemoReport, DomainError, Money, Pattern, Rate};

pub trait TaxStrategy {
    fn jurisdiction(&self) -> &'static str;
    fn tax_for(&self, income: Money) -> Money;
}

/// Flat 30% on all income.
pub struct UsTax;

impl TaxStrategy for UsTax {
    fn jurisdiction(&self) -> &'static str {
        "US"
    }

    fn tax_for(&self, income: Money) -> Money {
        Rate::from_percent(30).of(income)
    }
}

/// Flat 25% on all income.
pub struct UkTax;

impl TaxStrategy for UkTax {
    fn jurisdiction(&self) -> &'static str {
        "UK"
    }

    fn tax_for(&self, income: Money) -> Money {
        Rate::from_percent(25).of(income)
    }
}

pub struct TaxCalculator {
    strategy: Box<dyn TaxStrategy>,
}

impl TaxCalculator {
    pub fn new(strategy: Box<dyn TaxStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn TaxStrategy>) {
        self.strategy = strategy;
    }

    pub fn calculate(&self, income: Money) -> Money {
        self.strategy.tax_for(income)
    }

    pub fn jurisdiction(&self) -> &'static str {
        self.strategy.jurisdiction()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Strategy);

    let income = Money::from_dollars(100_000);
    let calculator = TaxCalculator::new(Box::new(UsTax));

    report.record(format!(
        "{} tax on {income}: {}",
        calculator.jurisdiction(),
        calculator.calculate(income),
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_strategy_takes_thirty_percent() {
        let calc = TaxCalculator::new(Box::new(UsTax));
        assert_eq!(calc.calculate(Money::from_dollars(100_000)), Money::from_dollars(30_000));
    }

    #[test]
    fn uk_strategy_takes_twenty_five_percent() {
        let calc = TaxCalculator::new(Box::new(UkTax));
        assert_eq!(calc.calculate(Money::from_dollars(100_000)), Money::from_dollars(25_000));
    }

    #[test]
    fn strategy_can_be_swapped_at_runtime() {
        let mut calc = TaxCalculator::new(Box::new(UsTax));
        calc.set_strategy(Box::new(UkTax));
        assert_eq!(calc.jurisdiction(), "UK");
    }

    #[test]
    fn demo_narrates_the_us_calculation() {
        let report = demo().unwrap();
        assert_eq!(report.lines(), ["US tax on $100,000.00: $30,000.00"]);
    }
}
