//! Prototype — clone a pre-verified KYC profile instead of re-verifying.
//!
//! Onboarding a linked account reuses the customer's existing know-your-
//! customer record. `Clone` is the pattern here; the interesting part is
//! that the copy is independent of the original.

use crate::domain::{DemoReport, DomainError, Pattern};

/// A verified know-your-customer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycProfile {
    customer_name: String,
    document_id: String,
    verified: bool,
}

impl KycProfile {
    pub fn verified(customer_name: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            document_id: document_id.into(),
            verified: true,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn rename(&mut self, customer_name: impl Into<String>) {
        self.customer_name = customer_name.into();
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Prototype);

    let original = KycProfile::verified("Alice", "A1234");
    let copy = original.clone();

    report.record(format!(
        "Cloned KYC profile: name={}, document={}, verified={}",
        copy.customer_name(),
        copy.document_id(),
        copy.is_verified(),
    ));

    Ok(report)
}
