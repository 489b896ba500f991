//! Creational patterns: how objects come into being.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod object_pool;
pub mod prototype;
pub mod singleton;
