//! Built-in pattern documentation.
//!
//! This module provides [`all_docs`], the single entry-point for the
//! write-ups that ship with Patina: one [`PatternDoc`] per catalogued
//! pattern, with the intent, a fintech-flavored motivation, and the cast of
//! participants. The catalog adapter seeds itself from here. Entries follow
//! catalogue order, same as the pattern registry.

use tracing::debug;

use patina_core::domain::{Pattern, PatternDoc};

/// One doc per pattern, in catalogue order.
///
/// Every [`Pattern`] variant has an entry; `CatalogService` relies on that
/// when resolving a demo's accompanying write-up.
pub fn all_docs() -> Vec<PatternDoc> {
    let docs = [creational_docs(), structural_docs(), behavioral_docs()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    debug!(count = docs.len(), "loaded built-in pattern docs");
    docs
}

fn creational_docs() -> Vec<PatternDoc> {
    vec![
        PatternDoc::new(
            Pattern::FactoryMethod,
            "Let a factory decide which concrete type to instantiate behind a common interface.",
            "A payment desk handles card and wire transactions through one processor interface; \
             the factory picks the concrete processor so callers never name a type.",
        )
        .participant("TransactionProcessor (product trait)")
        .participant("CreditCardProcessor, WireTransferProcessor (concrete products)")
        .participant("ProcessorFactory (creator)"),
        PatternDoc::new(
            Pattern::AbstractFactory,
            "Create families of related objects without naming their concrete types.",
            "Banking frontends ship web and mobile variants; each factory produces a matched set \
             of widgets so a screen never mixes families.",
        )
        .participant("UiFactory (abstract factory)")
        .participant("WebUiFactory, MobileUiFactory (concrete factories)")
        .participant("Button, TextField (product traits)"),
        PatternDoc::new(
            Pattern::Singleton,
            "Guarantee a single shared instance with one global access point.",
            "Every desk quotes from the same base rate; a lazily-initialised shared config keeps \
             two copies from drifting apart.",
        )
        .participant("RateConfig (shared state)")
        .participant("current_rate / set_rate (access points)"),
        PatternDoc::new(
            Pattern::Builder,
            "Assemble a complex object step by step and validate before releasing it.",
            "A mortgage application mixes one required field with optional ones; the builder \
             keeps partial state private and rejects incomplete applications at build time.",
        )
        .participant("MortgageApplication (product)")
        .participant("MortgageApplicationBuilder (builder)"),
        PatternDoc::new(
            Pattern::Prototype,
            "Create new objects by cloning a configured prototype.",
            "Onboarding a linked account reuses the customer's verified KYC record; cloning the \
             profile skips a second verification round.",
        )
        .participant("KycProfile (prototype, Clone)"),
        PatternDoc::new(
            Pattern::ObjectPool,
            "Reuse a fixed set of expensive objects instead of creating new ones.",
            "Market-data connections are slow to open; a fixed pool hands the same handful out \
             repeatedly and reports exhaustion rather than opening more.",
        )
        .participant("MarketConnection (pooled resource)")
        .participant("ConnectionPool (pool)"),
    ]
}

fn structural_docs() -> Vec<PatternDoc> {
    vec![
        PatternDoc::new(
            Pattern::Adapter,
            "Convert one interface into the one callers expect.",
            "The legacy core only emits XML customer records; the adapter translates them to \
             JSON so downstream consumers never parse XML.",
        )
        .participant("CustomerSource (target trait)")
        .participant("LegacyCustomerSystem (adaptee)")
        .participant("LegacyCustomerAdapter (adapter)"),
        PatternDoc::new(
            Pattern::Bridge,
            "Decouple an abstraction from its implementation so both vary independently.",
            "Alert kinds and delivery channels grow on separate axes; an alert holds a boxed \
             sender, so adding a channel never touches the alerts.",
        )
        .participant("LowBalanceAlert (abstraction)")
        .participant("MessageSender (implementor trait)")
        .participant("SmsSender, EmailSender (concrete implementors)"),
        PatternDoc::new(
            Pattern::Composite,
            "Treat single objects and groups of objects uniformly.",
            "A balance query should not care whether it is asked of one savings account or a \
             whole holdings tree; portfolios sum their children recursively.",
        )
        .participant("AccountComponent (component trait)")
        .participant("Account (leaf)")
        .participant("Portfolio (composite)"),
        PatternDoc::new(
            Pattern::Decorator,
            "Layer extra behavior onto an object without changing its interface.",
            "Encryption wraps the basic transaction step; because the wrapper implements the \
             same trait, layers stack in any order.",
        )
        .participant("TransactionStep (component trait)")
        .participant("BasicTransaction (concrete component)")
        .participant("EncryptedTransaction (decorator)"),
        PatternDoc::new(
            Pattern::Facade,
            "Offer one simple entry point over several subsystems.",
            "Card validation, fraud screening, and ledger posting are separate subsystems; the \
             facade runs them in order behind a single pay call.",
        )
        .participant("PaymentFacade (facade)")
        .participant("CardValidator, FraudScreen, Ledger (subsystems)"),
        PatternDoc::new(
            Pattern::Flyweight,
            "Share immutable state between many objects to save memory.",
            "Thousands of positions reference the same instruments; the factory caches each \
             definition so every position holding AAPL points at one allocation.",
        )
        .participant("Instrument (flyweight)")
        .participant("InstrumentFactory (flyweight factory)"),
        PatternDoc::new(
            Pattern::Proxy,
            "Stand in for another object to control access to it.",
            "The real account service trusts its callers; the protection proxy in front only \
             lets admin and audit roles through.",
        )
        .participant("AccountService (subject trait)")
        .participant("CoreAccountService (real subject)")
        .participant("AccessControlProxy (proxy)"),
    ]
}

fn behavioral_docs() -> Vec<PatternDoc> {
    vec![
        PatternDoc::new(
            Pattern::Iterator,
            "Traverse a collection without exposing how it stores its elements.",
            "A customer's account book hands out a standard iterator, so callers get for loops \
             and adapters for free.",
        )
        .participant("AccountBook (aggregate)")
        .participant("Account (element)"),
        PatternDoc::new(
            Pattern::Command,
            "Reify a request as an object that can be queued, logged, and replayed.",
            "A transfer becomes a command the invoker executes blindly and records, which is \
             what makes audit trails possible.",
        )
        .participant("Command (command trait)")
        .participant("TransferCommand (concrete command)")
        .participant("Invoker (invoker with history)"),
        PatternDoc::new(
            Pattern::Observer,
            "Notify a set of subscribers whenever a subject changes.",
            "The price feed knows nothing about dashboards; it holds observer trait objects and \
             fans every tick out to all of them.",
        )
        .participant("PriceFeed (subject)")
        .participant("PriceObserver (observer trait)")
        .participant("Dashboard (concrete observer)"),
        PatternDoc::new(
            Pattern::TemplateMethod,
            "Fix an algorithm's skeleton and let subtypes override individual steps.",
            "Every transfer validates, authenticates, moves money, and notifies in that order; \
             each transfer kind overrides only the steps that differ.",
        )
        .participant("TransferFlow (trait with template method)")
        .participant("DomesticTransfer, InternationalTransfer (concrete flows)"),
        PatternDoc::new(
            Pattern::Strategy,
            "Make an algorithm interchangeable behind a common interface.",
            "Each jurisdiction taxes income differently; the calculator holds a boxed strategy \
             and never branches on country codes itself.",
        )
        .participant("TaxStrategy (strategy trait)")
        .participant("UsTax, UkTax (concrete strategies)")
        .participant("TaxCalculator (context)"),
        PatternDoc::new(
            Pattern::ChainOfResponsibility,
            "Pass a request along a chain of handlers until one handles it.",
            "A transaction review runs balance and fraud checks in sequence; the chain \
             short-circuits on the first rejection.",
        )
        .participant("ReviewHandler (handler trait)")
        .participant("BalanceCheck, FraudCheck (concrete handlers)")
        .participant("TxnReview (request)"),
        PatternDoc::new(
            Pattern::Interpreter,
            "Represent a grammar as an object tree and evaluate sentences against a context.",
            "Compliance rules like 'amount over 1000 and country is US' compose from small \
             expression nodes; new vocabulary is a new node type.",
        )
        .participant("RuleExpr (expression trait)")
        .participant("AmountOver, CountryIs, And (expressions)")
        .participant("TxnContext (context)"),
        PatternDoc::new(
            Pattern::Mediator,
            "Centralise how a set of components talk to each other.",
            "Order entry and risk never reference each other; both talk to the trading desk, \
             which decides who hears what.",
        )
        .participant("DeskMediator (mediator trait)")
        .participant("TradingDesk (concrete mediator)")
        .participant("OrderEntry, RiskDesk (colleagues)"),
        PatternDoc::new(
            Pattern::Memento,
            "Snapshot an object's state so it can be restored later.",
            "A loan application saves an opaque snapshot before a status change; restoring it \
             rolls the change back without exposing internals.",
        )
        .participant("LoanApplication (originator)")
        .participant("LoanSnapshot (memento)")
        .participant("SnapshotHistory (caretaker)"),
        PatternDoc::new(
            Pattern::NullObject,
            "Return a do-nothing object instead of a missing one.",
            "Customer lookups always return a usable customer; the unknown customer answers \
             with safe defaults so callers never branch on absence.",
        )
        .participant("Customer (trait)")
        .participant("RealCustomer, UnknownCustomer (real and null objects)")
        .participant("CustomerRegistry (factory)"),
        PatternDoc::new(
            Pattern::State,
            "Let an object change behavior when its internal state changes.",
            "A payment's processing step depends on its status; each status is its own type and \
             processing swaps in the next one, with no status match in the payment.",
        )
        .participant("PaymentState (state trait)")
        .participant("Draft, Approved, Settled (concrete states)")
        .participant("Payment (context)"),
        PatternDoc::new(
            Pattern::Visitor,
            "Add new operations over a set of types without modifying them.",
            "Ledger entries accept a visitor and double-dispatch to the matching visit method; \
             a new report is a new visitor, and the entries stay closed.",
        )
        .participant("LedgerVisitor (visitor trait)")
        .participant("Transaction, Fee (elements)")
        .participant("SummaryReport (concrete visitor)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use patina_core::domain::Category;

    #[test]
    fn every_pattern_has_a_doc() {
        let docs = all_docs();
        assert_eq!(docs.len(), Pattern::all().count());

        for pattern in Pattern::all() {
            assert!(
                docs.iter().any(|doc| doc.pattern == pattern),
                "missing doc for {}",
                pattern.slug(),
            );
        }
    }

    #[test]
    fn docs_follow_catalogue_order() {
        let order: Vec<Pattern> = all_docs().iter().map(|doc| doc.pattern).collect();
        let expected: Vec<Pattern> = Pattern::all().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn all_docs_validate() {
        for doc in all_docs() {
            doc.validate().unwrap();
        }
    }

    #[test]
    fn every_doc_names_participants() {
        for doc in all_docs() {
            assert!(!doc.participants.is_empty(), "{} has no participants", doc.pattern.slug());
        }
    }

    #[test]
    fn categories_are_fully_covered() {
        let docs = all_docs();
        for &category in Category::all() {
            let count = docs.iter().filter(|doc| doc.pattern.category() == category).count();
            assert_eq!(count, Pattern::in_category(category).count());
        }
    }
}
