//! Bitrise step wrapping the OWASP dependency-check CLI.
//!
//! This library provides the building blocks of the step — configuration
//! loading, scanner invocation, report publication — so they can be
//! exercised by tests; the `dependency-check-step` binary wires them
//! together.

pub mod cache;
pub mod cli;
pub mod config;
pub mod invocation;
pub mod reports;
pub mod runner;
pub mod spawn;
