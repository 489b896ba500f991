//! Proxy — gate access to the real account service by caller role.
//!
//! The real service answers balance queries for anyone who reaches it; the
//! proxy stands in front and only lets `admin` and `audit` callers through.
//! Both sides implement the same trait, so the caller cannot tell which
//! one it holds.

use crate::domain::{DemoReport, DomainError, Money, Pattern};

pub trait AccountService {
    fn balance(&self, role: &str, account: &str) -> Result<Money, DomainError>;
}

/// The real thing. Trusts whoever calls it.
pub struct CoreAccountService;

impl AccountService for CoreAccountService {
    fn balance(&self, _role: &str, _account: &str) -> Result<Money, DomainError> {
        Ok(Money::from_dollars(1_250))
    }
}

/// Protection proxy. Checks the caller's role before delegating.
pub struct AccessControlProxy {
    inner: Box<dyn AccountService>,
}

impl AccessControlProxy {
    pub fn new(inner: Box<dyn AccountService>) -> Self {
        Self { inner }
    }
}

impl AccountService for AccessControlProxy {
    fn balance(&self, role: &str, account: &str) -> Result<Money, DomainError> {
        match role {
            "admin" | "audit" => self.inner.balance(role, account),
            _ => Err(DomainError::AccessDenied { role: role.to_string() }),
        }
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Proxy);

    let service = AccessControlProxy::new(Box::new(CoreAccountService));

    let balance = service.balance("admin", "ACC-1")?;
    report.record(format!("admin read balance of ACC-1: {balance}"));

    match service.balance("teller", "ACC-1") {
        Ok(_) => report.record("teller read the balance".to_string()),
        Err(err) => report.record(format!("teller denied: {err}")),
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_audit_pass_through() {
        let service = AccessControlProxy::new(Box::new(CoreAccountService));
        assert!(service.balance("admin", "ACC-1").is_ok());
        assert!(service.balance("audit", "ACC-1").is_ok());
    }

    #[test]
    fn other_roles_are_denied() {
        let service = AccessControlProxy::new(Box::new(CoreAccountService));
        let err = service.balance("teller", "ACC-1").unwrap_err();
        assert!(matches!(err, DomainError::AccessDenied { role } if role == "teller"));
    }

    #[test]
    fn demo_narrates_grant_and_denial() {
        let report = demo().unwrap();
        let lines = report.lines();
        assert_eq!(lines[0], "admin read balance of ACC-1: $1,250.00");
        assert!(lines[1].starts_with("teller denied: "));
    }
}
