//! Common test utilities and infrastructure
//!
//! Shared fixtures used across the roster integration suites.

pub mod fixtures;

pub use fixtures::TestFixtures;
