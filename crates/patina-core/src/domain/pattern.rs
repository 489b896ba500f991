//! Catalogue value objects: Pattern and Category, plus the pattern registry.
//!
//! # Design
//!
//! `Pattern` and `Category` are pure value types — `Copy`, equality-by-value,
//! no identity. They hold NO catalogue knowledge of their own: slug, summary,
//! ordering, and grouping all live in [`PATTERN_REGISTRY`], a single static
//! table. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding a New Pattern
//!
//! 1. Add the enum variant here
//! 2. Add one [`PatternDef`] entry to [`PATTERN_REGISTRY`]
//! 3. Add the `demo` module and its dispatch arm in `crate::patterns`
//! 4. Add a doc in `patina-adapters::builtin_docs`
//! 5. Done — nothing else changes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── Category ─────────────────────────────────────────────────────────────────

/// A GoF pattern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Creational => "creational",
            Self::Structural => "structural",
            Self::Behavioral => "behavioral",
        }
    }

    /// Catalogue order: creational, structural, behavioral.
    pub const fn all() -> &'static [Category] {
        &[Self::Creational, Self::Structural, Self::Behavioral]
    }

    /// Heading used by the category demo aggregator,
    /// e.g. `"Creational Design Patterns"`.
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Creational => "Creational Design Patterns",
            Self::Structural => "Structural Design Patterns",
            Self::Behavioral => "Behavioral Design Patterns",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "creational" => Ok(Self::Creational),
            "structural" => Ok(Self::Structural),
            "behavioral" | "behavioural" => Ok(Self::Behavioral),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

// ── Pattern ──────────────────────────────────────────────────────────────────

/// One of the 25 catalogued design patterns.
///
/// Everything about a pattern beyond its identity (slug, category, summary,
/// ordinal) comes from [`PATTERN_REGISTRY`]. Do not add match arms here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    // Creational
    FactoryMethod,
    AbstractFactory,
    Singleton,
    Builder,
    Prototype,
    ObjectPool,
    // Structural
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
    // Behavioral
    Iterator,
    Command,
    Observer,
    TemplateMethod,
    Strategy,
    ChainOfResponsibility,
    Interpreter,
    Mediator,
    Memento,
    NullObject,
    State,
    Visitor,
}

impl Pattern {
    /// The registry entry for this pattern.
    ///
    /// Every variant has exactly one entry; the invariant is covered by a
    /// test in `domain::tests`.
    pub fn def(&self) -> &'static PatternDef {
        PATTERN_REGISTRY
            .iter()
            .find(|def| def.pattern == *self)
            .expect("every Pattern variant has a registry entry")
    }

    /// Kebab-case identifier used on the command line (`factory-method`).
    pub fn slug(&self) -> &'static str {
        self.def().slug
    }

    /// Conventional display name (`Factory Method`).
    pub fn name(&self) -> &'static str {
        self.def().name
    }

    pub fn category(&self) -> Category {
        self.def().category
    }

    /// One-line summary shown in listings.
    pub fn summary(&self) -> &'static str {
        self.def().summary
    }

    /// All patterns in catalogue order.
    pub fn all() -> impl Iterator<Item = Pattern> {
        PATTERN_REGISTRY.iter().map(|def| def.pattern)
    }

    /// Patterns of one category, in catalogue order.
    pub fn in_category(category: Category) -> impl Iterator<Item = Pattern> {
        PATTERN_REGISTRY
            .iter()
            .filter(move |def| def.category == category)
            .map(|def| def.pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Pattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace('_', "-");
        PATTERN_REGISTRY
            .iter()
            .find(|def| def.slug == wanted || def.aliases.contains(&wanted.as_str()))
            .map(|def| def.pattern)
            .ok_or_else(|| DomainError::UnknownPattern(s.to_string()))
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Describes one catalogued pattern.
///
/// Replaces scattered `match` arms: slug, name, grouping, ordering, and
/// summary are declared exactly once per pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub pattern: Pattern,
    pub category: Category,
    /// 1-based position within the category; drives demo numbering.
    pub ordinal: u8,
    pub slug: &'static str,
    pub name: &'static str,
    /// Accepted `FromStr` spellings besides the slug.
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
}

/// Single source of truth for the catalogue.
///
/// Order matters: it is the order the original catalogue presents the
/// patterns in, and the order every listing and aggregate demo uses.
pub static PATTERN_REGISTRY: &[PatternDef] = &[
    // ── Creational ────────────────────────────────────────────────────────
    PatternDef {
        pattern: Pattern::FactoryMethod,
        category: Category::Creational,
        ordinal: 1,
        slug: "factory-method",
        name: "Factory Method",
        aliases: &["factory"],
        summary: "Creates transaction processors without exposing concrete types",
    },
    PatternDef {
        pattern: Pattern::AbstractFactory,
        category: Category::Creational,
        ordinal: 2,
        slug: "abstract-factory",
        name: "Abstract Factory",
        aliases: &[],
        summary: "Produces families of related UI components per channel",
    },
    PatternDef {
        pattern: Pattern::Singleton,
        category: Category::Creational,
        ordinal: 3,
        slug: "singleton",
        name: "Singleton",
        aliases: &[],
        summary: "Ensures a single instance of the shared rate configuration",
    },
    PatternDef {
        pattern: Pattern::Builder,
        category: Category::Creational,
        ordinal: 4,
        slug: "builder",
        name: "Builder",
        aliases: &[],
        summary: "Separates mortgage application construction from its representation",
    },
    PatternDef {
        pattern: Pattern::Prototype,
        category: Category::Creational,
        ordinal: 5,
        slug: "prototype",
        name: "Prototype",
        aliases: &[],
        summary: "Duplicates KYC profiles without re-running onboarding",
    },
    PatternDef {
        pattern: Pattern::ObjectPool,
        category: Category::Creational,
        ordinal: 6,
        slug: "object-pool",
        name: "Object Pool",
        aliases: &["pool"],
        summary: "Reuses expensive market data connections",
    },
    // ── Structural ────────────────────────────────────────────────────────
    PatternDef {
        pattern: Pattern::Adapter,
        category: Category::Structural,
        ordinal: 1,
        slug: "adapter",
        name: "Adapter",
        aliases: &[],
        summary: "Adapts the legacy XML customer service to a JSON interface",
    },
    PatternDef {
        pattern: Pattern::Bridge,
        category: Category::Structural,
        ordinal: 2,
        slug: "bridge",
        name: "Bridge",
        aliases: &[],
        summary: "Separates alert kinds from notification channels",
    },
    PatternDef {
        pattern: Pattern::Composite,
        category: Category::Structural,
        ordinal: 3,
        slug: "composite",
        name: "Composite",
        aliases: &[],
        summary: "Represents portfolios and accounts uniformly",
    },
    PatternDef {
        pattern: Pattern::Decorator,
        category: Category::Structural,
        ordinal: 4,
        slug: "decorator",
        name: "Decorator",
        aliases: &[],
        summary: "Adds encryption to transactions dynamically",
    },
    PatternDef {
        pattern: Pattern::Facade,
        category: Category::Structural,
        ordinal: 5,
        slug: "facade",
        name: "Facade",
        aliases: &[],
        summary: "Unifies card validation, fraud checks, and ledger posting",
    },
    PatternDef {
        pattern: Pattern::Flyweight,
        category: Category::Structural,
        ordinal: 6,
        slug: "flyweight",
        name: "Flyweight",
        aliases: &[],
        summary: "Shares instrument definitions across many positions",
    },
    PatternDef {
        pattern: Pattern::Proxy,
        category: Category::Structural,
        ordinal: 7,
        slug: "proxy",
        name: "Proxy",
        aliases: &[],
        summary: "Gates the account service behind role checks",
    },
    // ── Behavioral ────────────────────────────────────────────────────────
    PatternDef {
        pattern: Pattern::Iterator,
        category: Category::Behavioral,
        ordinal: 1,
        slug: "iterator",
        name: "Iterator",
        aliases: &[],
        summary: "Traverses an account collection without exposing its storage",
    },
    PatternDef {
        pattern: Pattern::Command,
        category: Category::Behavioral,
        ordinal: 2,
        slug: "command",
        name: "Command",
        aliases: &[],
        summary: "Encapsulates financial operations with an invoker history",
    },
    PatternDef {
        pattern: Pattern::Observer,
        category: Category::Behavioral,
        ordinal: 3,
        slug: "observer",
        name: "Observer",
        aliases: &[],
        summary: "Notifies dashboards when the price feed updates",
    },
    PatternDef {
        pattern: Pattern::TemplateMethod,
        category: Category::Behavioral,
        ordinal: 4,
        slug: "template-method",
        name: "Template Method",
        aliases: &["template"],
        summary: "Fixes the fund transfer skeleton, varies the transfer step",
    },
    PatternDef {
        pattern: Pattern::Strategy,
        category: Category::Behavioral,
        ordinal: 5,
        slug: "strategy",
        name: "Strategy",
        aliases: &[],
        summary: "Swaps regional tax calculation algorithms",
    },
    PatternDef {
        pattern: Pattern::ChainOfResponsibility,
        category: Category::Behavioral,
        ordinal: 6,
        slug: "chain-of-responsibility",
        name: "Chain of Responsibility",
        aliases: &["chain", "cor"],
        summary: "Runs transaction validation steps as a handler chain",
    },
    PatternDef {
        pattern: Pattern::Interpreter,
        category: Category::Behavioral,
        ordinal: 7,
        slug: "interpreter",
        name: "Interpreter",
        aliases: &[],
        summary: "Evaluates boolean compliance rules against a context",
    },
    PatternDef {
        pattern: Pattern::Mediator,
        category: Category::Behavioral,
        ordinal: 8,
        slug: "mediator",
        name: "Mediator",
        aliases: &[],
        summary: "Coordinates trading desk components through one hub",
    },
    PatternDef {
        pattern: Pattern::Memento,
        category: Category::Behavioral,
        ordinal: 9,
        slug: "memento",
        name: "Memento",
        aliases: &[],
        summary: "Snapshots and restores loan status",
    },
    PatternDef {
        pattern: Pattern::NullObject,
        category: Category::Behavioral,
        ordinal: 10,
        slug: "null-object",
        name: "Null Object",
        aliases: &["null"],
        summary: "Stands in for missing customers with a safe placeholder",
    },
    PatternDef {
        pattern: Pattern::State,
        category: Category::Behavioral,
        ordinal: 11,
        slug: "state",
        name: "State",
        aliases: &[],
        summary: "Changes payment behavior with its lifecycle status",
    },
    PatternDef {
        pattern: Pattern::Visitor,
        category: Category::Behavioral,
        ordinal: 12,
        slug: "visitor",
        name: "Visitor",
        aliases: &[],
        summary: "Applies report operations to transactions without modifying them",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, a) in PATTERN_REGISTRY.iter().enumerate() {
            for b in &PATTERN_REGISTRY[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.pattern, b.pattern);
            }
        }
    }

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("factory".parse::<Pattern>().unwrap(), Pattern::FactoryMethod);
        assert_eq!("chain".parse::<Pattern>().unwrap(), Pattern::ChainOfResponsibility);
        assert_eq!("cor".parse::<Pattern>().unwrap(), Pattern::ChainOfResponsibility);
        assert_eq!("pool".parse::<Pattern>().unwrap(), Pattern::ObjectPool);
    }

    #[test]
    fn from_str_accepts_underscores_and_case() {
        assert_eq!(
            "Template_Method".parse::<Pattern>().unwrap(),
            Pattern::TemplateMethod
        );
    }

    #[test]
    fn from_str_unknown_errors() {
        assert!("monoid".parse::<Pattern>().is_err());
        assert!("".parse::<Pattern>().is_err());
    }

    #[test]
    fn category_from_str_accepts_british_spelling() {
        assert_eq!(
            "behavioural".parse::<Category>().unwrap(),
            Category::Behavioral
        );
        assert!("functional".parse::<Category>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for pattern in Pattern::all() {
            assert_eq!(pattern.to_string().parse::<Pattern>().unwrap(), pattern);
        }
    }
}
