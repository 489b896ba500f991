//! Object pool — recycle expensive market-data connections.
//!
//! Opening a connection to the exchange feed is slow, so a fixed-size pool
//! hands out the same handful of connections over and over. `acquire`
//! returns `None` once the pool is drained; callers release handles back
//! when done.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::domain::{DemoReport, DomainError, Pattern};

/// A connection to the market-data feed. Construction stands in for the
/// expensive part worth pooling.
#[derive(Debug, PartialEq, Eq)]
pub struct MarketConnection {
    id: Uuid,
}

impl MarketConnection {
    fn open() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Fixed-size pool of market connections.
#[derive(Debug)]
pub struct ConnectionPool {
    idle: VecDeque<MarketConnection>,
    capacity: usize,
}

impl ConnectionPool {
    /// Open `capacity` connections up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            idle: (0..capacity).map(|_| MarketConnection::open()).collect(),
            capacity,
        }
    }

    /// Take a connection out of the pool, or `None` if all are in use.
    pub fn acquire(&mut self) -> Option<MarketConnection> {
        self.idle.pop_front()
    }

    /// Return a connection for reuse. Handles beyond capacity are dropped.
    pub fn release(&mut self, connection: MarketConnection) {
        if self.idle.len() < self.capacity {
            self.idle.push_back(connection);
        }
    }

    pub fn available(&self) -> usize {
        self.idle.len()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::ObjectPool);

    let mut pool = ConnectionPool::with_capacity(2);

    let first = pool.acquire().ok_or(DomainError::PoolExhausted)?;
    report.record(format!("Acquired connection {}", first.id()));

    let second = pool.acquire().ok_or(DomainError::PoolExhausted)?;
    report.record(format!("Acquired connection {}", second.id()));

    if pool.acquire().is_none() {
        report.record("Pool exhausted, no connection available".to_string());
    }

    let first_id = first.id();
    pool.release(first);
    report.record(format!("Released connection {first_id}"));

    let reused = pool.acquire().ok_or(DomainError::PoolExhausted)?;
    report.record(format!("Reacquired connection {}", reused.id()));

    Ok(report)
}
