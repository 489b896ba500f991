//! Abstract Factory — produce families of related UI components without
//! specifying concrete types.
//!
//! The banking app renders the same screens on web and mobile; a factory
//! per channel guarantees a screen never mixes components from two
//! families.

use crate::domain::{DemoReport, DomainError, Pattern};

pub trait Button {
    fn render(&self) -> String;
}

pub trait TextField {
    fn render(&self) -> String;
}

/// The abstract factory: one creation method per product in the family.
pub trait UiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_field(&self) -> Box<dyn TextField>;
}

// ── Web family ───────────────────────────────────────────────────────────────

pub struct WebUiFactory;

struct WebButton;
struct WebTextField;

impl Button for WebButton {
    fn render(&self) -> String {
        "Rendering Web Button".into()
    }
}

impl TextField for WebTextField {
    fn render(&self) -> String {
        "Rendering Web TextField".into()
    }
}

impl UiFactory for WebUiFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WebButton)
    }

    fn create_text_field(&self) -> Box<dyn TextField> {
        Box::new(WebTextField)
    }
}

// ── Mobile family ────────────────────────────────────────────────────────────

pub struct MobileUiFactory;

struct MobileButton;
struct MobileTextField;

impl Button for MobileButton {
    fn render(&self) -> String {
        "Rendering Mobile Button".into()
    }
}

impl TextField for MobileTextField {
    fn render(&self) -> String {
        "Rendering Mobile TextField".into()
    }
}

impl UiFactory for MobileUiFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MobileButton)
    }

    fn create_text_field(&self) -> Box<dyn TextField> {
        Box::new(MobileTextField)
    }
}

pub fn demo() -> Result<DemoReport, DomainError> {
    let mut report = DemoReport::new(Pattern::AbstractFactory);

    let factory: Box<dyn UiFactory> = Box::new(MobileUiFactory);
    report.record(factory.create_button().render());
    report.record(factory.create_text_field().render());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_stay_consistent() {
        let web: Box<dyn UiFactory> = Box::new(WebUiFactory);
        assert!(web.create_button().render().contains("Web"));
        assert!(web.create_text_field().render().contains("Web"));

        let mobile: Box<dyn UiFactory> = Box::new(MobileUiFactory);
        assert!(mobile.create_button().render().contains("Mobile"));
        assert!(mobile.create_text_field().render().contains("Mobile"));
    }

    #[test]
    fn demo_uses_the_mobile_family() {
        let report = demo().unwrap();
        assert_eq!(
            report.lines(),
            &["Rendering Mobile Button", "Rendering Mobile TextField"]
        );
    }
}
