//! Inbound adapters that translate external requests into session and
//! workspace calls while keeping presentation details at the edge.
//!
//! The command-line adapter lives under [`cli`].

pub mod cli;
