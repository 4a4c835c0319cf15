//! Shared test utilities for the blocksync workspace.
//!
//! This crate provides the dashboard page fixtures and a temporary workspace
//! builder used across crate test suites. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`pages`] — admin/agent dashboard page sources
//! - [`workspace`] — [`TestWorkspace`] builder for on-disk fixtures

pub mod pages;
pub mod workspace;

pub use workspace::TestWorkspace;
