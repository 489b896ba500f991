//! Singleton — a single shared instance of the rate configuration.
//!
//! Every desk quotes from the same base rate; two copies of the config
//! drifting apart is exactly the bug this prevents. Rust's take on the
//! pattern is a `LazyLock` static behind accessor functions — no nullable
//! instance field, no synchronized getter.

use std::sync::{LazyLock, RwLock};

use crate::domain::{DemoReport, DomainError, Pattern, Rate};

/// Shared configuration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConfig {
    rate: Rate,
}

impl RateConfig {
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

/// The one instance. Initialised on first touch, at 5.00%.
static RATE_CONFIG: LazyLock<RwLock<RateConfig>> = LazyLock::new(|| {
    RwLock::new(RateConfig {
        rate: Rate::from_basis_points(500),
    })
});

/// Read the current base rate.
pub fn current_rate() -> Rate {
    // A poisoned lock means a writer panicked; the stored value is a plain
    // Copy type so it is still sound to read.
    RATE_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .rate
}

/// Update the base rate for every reader at once.
pub fn set_rate(rate: Rate) {
    RATE_CONFIG
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .rate = rate;
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Singleton);

    report.record(format!("Current rate: {}%", current_rate()));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The static is process-wide and the test harness runs threads in
    // parallel, so everything that mutates it lives in one test.
    #[test]
    fn one_instance_and_updates_reach_later_readers() {
        set_rate(Rate::from_basis_points(500));
        assert_eq!(current_rate(), current_rate());

        set_rate(Rate::from_basis_points(725));
        assert_eq!(current_rate(), Rate::from_basis_points(725));

        set_rate(Rate::from_basis_points(500));
    }
}
