//! Builder — assemble a mortgage application step by step.
//!
//! An application has one required field (the applicant) and a tail of
//! optional ones. The builder keeps the partially-assembled state private
//! and validates at `build()`, so a half-finished application can never
//! escape into the domain.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

/// A fully-assembled mortgage application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MortgageApplication {
    applicant: String,
    annual_income: Money,
    has_credit_history: bool,
}

impl MortgageApplication {
    pub fn builder() -> MortgageApplicationBuilder {
        MortgageApplicationBuilder::default()
    }

    pub fn applicant(&self) -> &str {
        &self.applicant
    }

    pub fn annual_income(&self) -> Money {
        self.annual_income
    }

    pub fn has_credit_history(&self) -> bool {
        self.has_credit_history
    }
}

#[derive(Debug, Default)]
pub struct MortgageApplicationBuilder {
    applicant: Option<String>,
    annual_income: Money,
    has_credit_history: bool,
}

impl MortgageApplicationBuilder {
    pub fn applicant(mut self, name: impl Into<String>) -> Self {
        self.applicant = Some(name.into());
        self
    }

    pub fn annual_income(mut self, income: Money) -> Self {
        self.annual_income = income;
        self
    }

    pub fn credit_history(mut self, has_history: bool) -> Self {
        self.has_credit_history = has_history;
        self
    }

    pub fn build(self) -> Result<MortgageApplication, DomainError> {
        let applicant = self.applicant.filter(|name| !name.trim().is_empty()).ok_or_else(|| {
            DomainError::InvalidApplication("applicant name is required".to_string())
        })?;

        Ok(MortgageApplication {
            applicant,
            annual_income: self.annual_income,
            has_credit_history: self.has_credit_history,
        })
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Builder);

    let application = MortgageApplication::builder()
        .applicant("John Doe")
        .annual_income(Money::from_dollars(95_000))
        .credit_history(true)
        .build()?;

    report.record(format!(
        "Mortgage application: applicant={}, income={}, credit history={}",
        application.applicant(),
        application.annual_income(),
        application.has_credit_history(),
    ));

    Ok(report)
}
