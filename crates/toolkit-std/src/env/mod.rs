//! Zero-cost abstraction for environment variable access.
//!
//! # Examples
//!
//! ```
//! use toolkit_std::env::{ReadEnv, SystemEnv};
//!
//! fn workspace<E: ReadEnv>(env: &E) -> String {
//!     env.var("INPUT_WORKSPACE")
//!         .unwrap_or_else(|_| ".".to_string())
//! }
//!
//! let dir = workspace(&SystemEnv);
//! ```
//!
//! ```ignore
//! use toolkit_std::env::{ReadEnv, InMemoryEnv};
//!
//! let env = InMemoryEnv::new();
//! env.set("INPUT_WORKSPACE", "/tmp/ws"); // &self — no `mut` needed
//!
//! assert_eq!(workspace(&env), "/tmp/ws");
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
