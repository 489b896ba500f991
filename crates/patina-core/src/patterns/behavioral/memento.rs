//! Memento — snapshot a loan application and roll it back.
//!
//! The application hands out opaque snapshots of its state; a caretaker
//! stores them without looking inside. Restoring a snapshot undoes every
//! change made since it was taken.

use crate::domain::{DemoReport, DomainError, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Submitted,
    Approved,
    Rejected,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

/// Opaque snapshot. Only `LoanApplication` can read the state back out.
pub struct LoanSnapshot {
    status: LoanStatus,
}

/// Originator.
pub struct LoanApplication {
    status: LoanStatus,
}

impl LoanApplication {
    pub fn submitted() -> Self {
        Self { status: LoanStatus::Submitted }
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn set_status(&mut self, status: LoanStatus) {
        self.status = status;
    }

    pub fn save(&self) -> LoanSnapshot {
        LoanSnapshot { status: self.status }
    }

    pub fn restore(&mut self, snapshot: &LoanSnapshot) {
        self.status = snapshot.status;
    }
}

/// Caretaker. Holds snapshots, never inspects them.
#[derive(Default)]
pub struct SnapshotHistory {
    snapshots: Vec<LoanSnapshot>,
}

impl SnapshotHistory {
    pub fn push(&mut self, snapshot: LoanSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<LoanSnapshot> {
        self.snapshots.pop()
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::Memento);

    let mut application = LoanApplication::submitted();
    let mut history = SnapshotHistory::default();

    report.record(format!("Application status: {}", application.status()));

    history.push(application.save());
    application.set_status(LoanStatus::Approved);
    report.record(format!("Application status: {}", application.status()));

    if let Some(snapshot) = history.pop() {
        application.restore(&snapshot);
        report.record(format!("Restored status: {}", application.status()));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_rolls_back_to_the_snapshot() {
        let mut app = LoanApplication::submitted();
        let snapshot = app.save();
        app.set_status(LoanStatus::Approved);
        app.restore(&snapshot);
        assert_eq!(app.status(), LoanStatus::Submitted);
    }

    #[test]
    fn history_hands_back_the_most_recent_snapshot() {
        let mut app = LoanApplication::submitted();
        let mut history = SnapshotHistory::default();

        history.push(app.save());
        app.set_status(LoanStatus::Approved);
        history.push(app.save());
        app.set_status(LoanStatus::Rejected);

        app.restore(&history.pop().unwrap());
        assert_eq!(app.status(), LoanStatus::Approved);
    }

    #[test]
    fn demo_narrates_save_and_restore() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            [
                "Application status: Submitted",
                "Application status: Approved",
                "Restored status: Submitted",
            ]
        );
    }
}
