//! Mediator — trading desk components coordinate through one hub.
//!
//! The order entry and risk components never reference each other; both
//! talk to the desk, which decides who hears what. Components receive the
//! mediator as `&mut dyn` at call time instead of holding a back-reference.

use crate::domain::{DemoReport, DomainError, Pattern};

pub trait DeskMediator {
    fn notify(&mut self, sender: &str, event: &str);
    fn log(&self) -> &[String];
}

/// Concrete mediator. Routes events and keeps the desk log.
#[derive(Default)]
pub struct TradingDesk {
    log: Vec<String>,
}

impl TradingDesk {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeskMediator for TradingDesk {
    fn notify(&mut self, sender: &str, event: &str) {
        self.log.push(format!("{sender}: {event}"));
        // Routing lives here so components stay unaware of one another.
        if sender == "order-entry" && event.starts_with("order placed") {
            self.log.push("risk: reviewing new order".to_string());
        }
    }

    fn log(&self) -> &[String] {
        &self.log
    }
}

pub struct OrderEntry;

impl OrderEntry {
    pub fn place_order(&self, desk: &mut dyn DeskMediator, symbol: &str) {
        desk.notify("order-entry", &format!("order placed for {symbol}"));
    }
}

pub struct RiskDesk;

impl RiskDesk {
    pub fn clear(&self, desk: &mut dyn DeskMediator, symbol: &str) {
        desk.notify("risk", &format!("cleared {symbol}"));
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Mediator);

    let mut desk = TradingDesk::new();
    OrderEntry.place_order(&mut desk, "AAPL");
    RiskDesk.clear(&mut desk, "AAPL");

    for line in desk.log() {
        report.record(line.clone());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_placement_triggers_risk_review() {
        let mut desk = TradingDesk::new();
        OrderEntry.place_order(&mut desk, "AAPL");
        assert_eq!(
            desk.log(),
            ["order-entry: order placed for AAPL", "risk: reviewing new order"]
        );
    }

    #[test]
    fn risk_events_do_not_echo() {
        let mut desk = TradingDesk::new();
        RiskDesk.clear(&mut desk, "AAPL");
        assert_eq!(desk.log(), ["risk: cleared AAPL"]);
    }

    #[test]
    fn demo_narrates_the_coordination() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "order-entry: order placed for AAPL",
                "risk: reviewing new order",
                "risk: cleared AAPL",
            ]
        );
    }
}
