//! Grievance portal library modules.
//!
//! Members file complaints and track them; administrators review every
//! complaint and move it through the status workflow. The domain lives in
//! [`domain`], storage adapters in [`outbound`], and the command-line
//! presentation in [`inbound`].

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;
