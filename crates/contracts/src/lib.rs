//! Shared contracts for the catalogue admin UI.
//!
//! Everything here is plain data and pure functions so it can be unit-tested
//! on the host and reused by the wasm frontend unchanged.

pub mod domain;
pub mod shared;
