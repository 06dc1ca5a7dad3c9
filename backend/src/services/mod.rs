//! HTTP handlers. The host serves files only; there is no API.
//!
//! - `assets`: listing images and floor plans from a directory on disk.
//! - `bundle`: the compiled frontend, embedded in the binary.

pub mod assets;
pub mod bundle;
