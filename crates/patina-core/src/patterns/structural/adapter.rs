//! Adapter — bridge a legacy XML customer feed into a JSON-speaking core.
//!
//! The old core banking system only emits XML; everything downstream wants
//! JSON. The adapter wraps the legacy interface and translates on the way
//! out, so callers never see a pointy bracket.

use serde_json::json;

use crate::domain::{DemoReport, DomainError, Pattern};

/// What downstream consumers expect: customer records as JSON.
pub trait CustomerSource {
    fn customer_json(&self, id: &str) -> String;
}

/// The legacy system. Its interface is fixed and XML-only.
pub struct LegacyCustomerSystem;

impl LegacyCustomerSystem {
    pub fn customer_xml(&self, id: &str) -> String {
        format!("<customer><id>{id}</id></customer>")
    }
}

/// Adapts the legacy XML interface to `CustomerSource`.
pub struct LegacyCustomerAdapter {
    legacy: LegacyCustomerSystem,
}

impl LegacyCustomerAdapter {
    pub fn new(legacy: LegacyCustomerSystem) -> Self {
        Self { legacy }
    }

    fn extract_id(xml: &str) -> Option<&str> {
        let start = xml.find("<id>")? + "<id>".len();
        let end = xml.find("</id>")?;
        xml.get(start..end)
    }
}

impl CustomerSource for LegacyCustomerAdapter {
    fn customer_json(&self, id: &str) -> String {
        let xml = self.legacy.customer_xml(id);
        let id = Self::extract_id(&xml).unwrap_or_default();
        json!({ "id": id }).to_string()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Adapter);

    let source = LegacyCustomerAdapter::new(LegacyCustomerSystem);
    report.record(format!("Adapted legacy customer record: {}", source.customer_json("123")));

    Ok(report)
}
