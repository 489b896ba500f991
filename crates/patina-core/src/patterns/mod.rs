//! The pattern implementations themselves.
//!
//! Each pattern lives in its own module: a handful of types showing the
//! pattern's shape on a small fintech example, plus a `demo()` entry point
//! that wires them together and narrates what happens into a
//! [`DemoReport`]. Modules are self-contained — nothing here coordinates
//! more than one pattern's objects at a time.
//!
//! Dispatch is a single match over [`Pattern`]; adding a pattern means
//! adding the module and one arm here (see `domain::pattern` for the rest
//! of the checklist).

pub mod behavioral;
pub mod creational;
pub mod structural;

use crate::domain::{DemoReport, DomainError, Pattern};

/// Run one pattern's demonstration.
pub fn run(pattern: Pattern) -> Result<DemoReport, DomainError> {
    match pattern {
        // Creational
        Pattern::FactoryMethod => creational::factory_method::demo(),
        Pattern::AbstractFactory => creational::abstract_factory::demo(),
        Pattern::Singleton => creational::singleton::demo(),
        Pattern::Builder => creational::builder::demo(),
        Pattern::Prototype => creational::prototype::demo(),
        Pattern::ObjectPool => creational::object_pool::demo(),
        // Structural
        Pattern::Adapter => structural::adapter::demo(),
        Pattern::Bridge => structural::bridge::demo(),
        Pattern::Composite => structural::composite::demo(),
        Pattern::Decorator => structural::decorator::demo(),
        Pattern::Facade => structural::facade::demo(),
        Pattern::Flyweight => structural::flyweight::demo(),
        Pattern::Proxy => structural::proxy::demo(),
        // Behavioral
        Pattern::Iterator => behavioral::iterator::demo(),
        Pattern::Command => behavioral::command::demo(),
        Pattern::Observer => behavioral::observer::demo(),
        Pattern::TemplateMethod => behavioral::template_method::demo(),
        Pattern::Strategy => behavioral::strategy::demo(),
        Pattern::ChainOfResponsibility => behavioral::chain_of_responsibility::demo(),
        Pattern::Interpreter => behavioral::interpreter::demo(),
        Pattern::Mediator => behavioral::mediator::demo(),
        Pattern::Memento => behavioral::memento::demo(),
        Pattern::NullObject => behavioral::null_object::demo(),
        Pattern::State => behavioral::state::demo(),
        Pattern::Visitor => behavioral::visitor::demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_demo_runs_and_narrates() {
        for pattern in Pattern::all() {
            let report = run(pattern).unwrap_or_else(|e| panic!("{pattern} failed: {e}"));
            assert_eq!(report.pattern(), pattern);
            assert!(!report.is_empty(), "{pattern} produced no narration");
        }
    }
}
