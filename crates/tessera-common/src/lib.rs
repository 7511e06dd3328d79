//! Common utilities for the Tessera engine.
//!
//! This crate provides shared infrastructure used by all engine components:
//! - **Warning System** - deduplicated diagnostics for tolerated-but-unsupported input

pub mod warning;
