//! Flyweight — share one instrument definition across many positions.
//!
//! Thousands of positions reference the same handful of instruments. The
//! factory caches each definition behind an `Rc`, so every position holding
//! "AAPL" points at the same allocation. The cache never evicts; the
//! instrument universe is small and long-lived.

use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::{DemoReport, DomainError, Pattern};

/// Intrinsic, shared state of an instrument.
#[derive(Debug, PartialEq, Eq)]
pub struct Instrument {
    symbol: String,
    exchange: String,
}

impl Instrument {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }
}

/// Hands out shared instrument definitions, creating each once.
#[derive(Default)]
pub struct InstrumentFactory {
    cache: HashMap<String, Rc<Instrument>>,
}

impl InstrumentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, symbol: &str, exchange: &str) -> Rc<Instrument> {
        Rc::clone(self.cache.entry(symbol.to_string()).or_insert_with(|| {
            Rc::new(Instrument {
                symbol: symbol.to_string(),
                exchange: exchange.to_string(),
            })
        }))
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Flyweight);

    let mut factory = InstrumentFactory::new();
    let first = factory.get("AAPL", "NASDAQ");
    let second = factory.get("AAPL", "NASDAQ");

    report.record(format!(
        "Two positions share one {} definition: {}",
        first.symbol(),
        Rc::ptr_eq(&first, &second),
    ));
    report.record(format!("Instruments cached: {}", factory.cached()));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_symbol_returns_the_shared_instance() {
        let mut factory = InstrumentFactory::new();
        let a = factory.get("AAPL", "NASDAQ");
        let b = factory.get("AAPL", "NASDAQ");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.cached(), 1);
    }

    #[test]
    fn different_symbols_get_distinct_instances() {
        let mut factory = InstrumentFactory::new();
        let aapl = factory.get("AAPL", "NASDAQ");
        let msft = factory.get("MSFT", "NASDAQ");
        assert!(!Rc::ptr_eq(&aapl, &msft));
        assert_eq!(factory.cached(), 2);
    }

    #[test]
    fn demo_narrates_the_sharing() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "Two positions share one AAPL definition: true",
                "Instruments cached: 1",
            ]
        );
    }
}
