//! Observer — price feed pushes ticks to whoever subscribed.
//!
//! The feed knows nothing about dashboards or alert engines; it holds a
//! list of `PriceObserver` trait objects and notifies them all on every
//! tick.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

pub trait PriceObserver {
    fn on_price(&mut self, symbol: &str, price: Money);
}

/// Subject. Fans each tick out to every registered observer.
#[derive(Default)]
pub struct PriceFeed {
    observers: Vec<Box<dyn PriceObserver>>,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn PriceObserver>) {
        self.observers.push(observer);
    }

    pub fn publish(&mut self, symbol: &str, price: Money) {
        for observer in &mut self.observers {
            observer.on_price(symbol, price);
        }
    }
}

/// Keeps the latest tick it has seen, formatted for display.
#[derive(Default)]
pub struct Dashboard {
    latest: Option<String>,
}

impl Dashboard {
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

impl PriceObserver for Dashboard {
    fn on_price(&mut self, symbol: &str, price: Money) {
        self.latest = Some(format!("Dashboard: {symbol} now at {price}"));
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Observer);

    // The feed owns its observers, so the demo captures output through a
    // shared buffer instead of reading the dashboard back.
    struct Recorder {
        lines: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    }

    impl PriceObserver for Recorder {
        fn on_price(&mut self, symbol: &str, price: Money) {
            self.lines.borrow_mut().push(format!("Dashboard: {symbol} now at {price}"));
        }
    }

    let lines = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut feed = PriceFeed::new();
    feed.subscribe(Box::new(Recorder { lines: std::rc::Rc::clone(&lines) }));

    feed.publish("BTC", Money::from_dollars(30_500));

    for line in lines.borrow().iter() {
        report.record(line.clone());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dashboard_tracks_the_latest_tick() {
        let mut dashboard = Dashboard::default();
        dashboard.on_price("BTC", Money::from_dollars(30_500));
        assert_eq!(dashboard.latest(), Some("Dashboard: BTC now at $30,500.00"));
    }

    #[test]
    fn every_subscriber_is_notified() {
        struct Counter {
            seen: Rc<RefCell<u32>>,
        }

        impl PriceObserver for Counter {
            fn on_price(&mut self, _symbol: &str, _price: Money) {
                *self.seen.borrow_mut() += 1;
            }
        }

        let seen = Rc::new(RefCell::new(0));
        let mut feed = PriceFeed::new();
        feed.subscribe(Box::new(Counter { seen: Rc::clone(&seen) }));
        feed.subscribe(Box::new(Counter { seen: Rc::clone(&seen) }));

        feed.publish("ETH", Money::from_dollars(2_000));
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn demo_narrates_the_tick() {
        let report = demo().unwrap();
        assert_eq!(report.lines(), ["Dashboard: BTC now at $30,500.00"]);
    }
}
