//! # toolkit-core
//!
//! Typed access to the inputs a host process hands to a worker process.
//!
//! The host publishes an input called `N` as the environment variable
//! `INPUT_<N>`, with spaces turned into underscores and the name upper-cased
//! (see [`input_env_key`]). This crate provides:
//! - [`Inputs`], a reader generic over [`ReadEnv`] so tests can inject an
//!   in-memory environment
//! - string, multi-line and boolean coercions with [`ValidationError`] on failure
//! - [`InputOptions`], per-call options whose defaults are applied once per
//!   instance, safely under concurrent first use
//!
//! ## Example
//!
//! ```rust,no_run
//! use toolkit_core::{InputOptions, get_boolean_input, get_input, get_multiline_input};
//!
//! let token = get_input("api token", Some(&InputOptions::new().required(true)))?;
//! let paths = get_multiline_input("paths", None)?;
//! let dry_run = get_boolean_input("dry run", None)?;
//! # Ok::<(), toolkit_core::ValidationError>(())
//! ```
//!
//! ## Injecting the environment
//!
//! ```rust
//! use toolkit_core::Inputs;
//! use toolkit_std::env::ReadEnv;
//!
//! fn targets<E: ReadEnv>(inputs: &Inputs<E>) -> toolkit_core::Result<Vec<String>> {
//!     inputs.get_multiline_input("targets", None)
//! }
//! ```

pub mod error;
pub mod input;
pub mod key;
pub mod options;

pub use error::{BOOLEAN_TOKENS_HINT, Result, ValidationError, ValidationErrorKind};
pub use input::{Inputs, get_boolean_input, get_input, get_multiline_input};
pub use key::{INPUT_PREFIX, input_env_key};
pub use options::{InputOptions, ResolvedInputOptions, resolve_options};
pub use toolkit_std::env::{ReadEnv, SystemEnv};
