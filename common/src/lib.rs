//! Shared domain model for the PrimeHomes property search.
//!
//! Everything in this crate is deterministic and free of browser bindings so it
//! compiles for both the `wasm32` frontend and native test runs.

pub mod catalogue;
pub mod error;
pub mod model;
pub mod search;
