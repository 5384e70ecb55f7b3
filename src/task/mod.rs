//! Task tracking.
//!
//! Users create, update, list, and delete short text tasks, each carrying a
//! `todo`, `in-progress`, or `done` status. The module follows hexagonal
//! architecture:
//!
//! - Domain types and failure kinds in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;
