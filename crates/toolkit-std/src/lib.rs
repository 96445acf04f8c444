//! Zero-cost abstractions over `std::env` for the toolkit crates.
//!
//! | Concern | Trait | Production | Test |
//! |---------|-------|------------|------|
//! | Env vars | [`ReadEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! # Thread Safety
//!
//! Both [`SystemEnv`] and [`InMemoryEnv`] are `Send + Sync`, so a single
//! environment can back readers running on many threads at once.

pub mod env;

#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
pub use env::{ReadEnv, SystemEnv};
