//! Bridge — decouple what an alert says from how it is delivered.
//!
//! Alert kinds and delivery channels grow independently; the bridge keeps
//! them on separate axes so adding a channel never touches the alerts and
//! vice versa.

use crate::domain::{DemoReport, DomainError, Pattern};

/// Delivery channel. The implementation side of the bridge.
pub trait MessageSender {
    fn send(&self, message: &str) -> String;
}

pub struct SmsSender;

impl MessageSender for SmsSender {
    fn send(&self, message: &str) -> String {
        format!("SMS: {message}")
    }
}

pub struct EmailSender;

impl MessageSender for EmailSender {
    fn send(&self, message: &str) -> String {
        format!("Email: {message}")
    }
}

/// An alert bound to a delivery channel. The abstraction side.
pub struct LowBalanceAlert {
    sender: Box<dyn MessageSender>,
}

impl LowBalanceAlert {
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self { sender }
    }

    pub fn raise(&self) -> String {
        self.sender.send("Balance below $100")
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Bridge);

    let alert = LowBalanceAlert::new(Box::new(SmsSender));
    report.record(alert.raise());

    Ok(report)
}
