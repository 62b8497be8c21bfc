//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: whole-collection complaint stores (JSON file, memory)
//!
//! Adapters are thin translators between domain types and their stored
//! representation. They contain no business logic.

pub mod persistence;
