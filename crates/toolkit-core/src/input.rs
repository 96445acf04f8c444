use std::env::VarError;

use toolkit_std::env::{ReadEnv, SystemEnv};

use crate::error::{Result, ValidationError};
use crate::key::input_env_key;
use crate::options::{InputOptions, resolve_options};

const TRUE_TOKENS: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_TOKENS: [&str; 3] = ["false", "False", "FALSE"];

/// Reads host-provided inputs from an environment.
///
/// Nothing is cached: each call performs a fresh lookup, so changes to the
/// environment between calls are visible.
#[derive(Debug, Clone, Default)]
pub struct Inputs<E> {
    env: E,
}

impl Inputs<SystemEnv> {
    /// Reader over the real process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ReadEnv> Inputs<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Value of the input called `name`.
    ///
    /// An unset variable reads as the empty string. With `required`, an empty
    /// raw value fails; the check runs before trimming, so a whitespace-only
    /// value passes it when trimming is disabled.
    pub fn get_input(&self, name: &str, options: Option<&InputOptions>) -> Result<String> {
        let options = resolve_options(options);
        let key = input_env_key(name);
        let value = self.lookup(&key);

        if options.required && value.is_empty() {
            tracing::debug!(input = %name, %key, "Required input not supplied");
            return Err(ValidationError::RequiredInputMissing {
                name: name.to_string(),
            });
        }
        if !options.trim_whitespace {
            return Ok(value);
        }
        Ok(value.trim().to_string())
    }

    /// Lines of the input called `name`, with empty lines dropped.
    ///
    /// Only the value as a whole is trimmed (per `trim_whitespace`); lines
    /// keep their own surrounding whitespace.
    pub fn get_multiline_input(
        &self,
        name: &str,
        options: Option<&InputOptions>,
    ) -> Result<Vec<String>> {
        let value = self.get_input(name, options)?;
        Ok(value
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Input called `name` interpreted as a boolean.
    ///
    /// Accepts only `true | True | TRUE` and `false | False | FALSE`; anything
    /// else, including the empty string, is rejected.
    pub fn get_boolean_input(&self, name: &str, options: Option<&InputOptions>) -> Result<bool> {
        let value = self.get_input(name, options)?;
        parse_boolean(&value).ok_or_else(|| {
            tracing::debug!(input = %name, "Input is not a recognized boolean");
            ValidationError::InvalidBoolean {
                name: name.to_string(),
                value,
            }
        })
    }

    fn lookup(&self, key: &str) -> String {
        match self.env.var(key) {
            Ok(value) => {
                tracing::trace!(%key, "Input variable found");
                value
            }
            Err(VarError::NotPresent) => {
                tracing::trace!(%key, "Input variable not set");
                String::new()
            }
            Err(VarError::NotUnicode(raw)) => {
                tracing::debug!(%key, "Input variable is not valid unicode, reading lossily");
                raw.to_string_lossy().into_owned()
            }
        }
    }
}

fn parse_boolean(value: &str) -> Option<bool> {
    if TRUE_TOKENS.contains(&value) {
        Some(true)
    } else if FALSE_TOKENS.contains(&value) {
        Some(false)
    } else {
        None
    }
}

/// [`Inputs::get_input`] against the process environment.
pub fn get_input(name: &str, options: Option<&InputOptions>) -> Result<String> {
    Inputs::system().get_input(name, options)
}

/// [`Inputs::get_multiline_input`] against the process environment.
pub fn get_multiline_input(name: &str, options: Option<&InputOptions>) -> Result<Vec<String>> {
    Inputs::system().get_multiline_input(name, options)
}

/// [`Inputs::get_boolean_input`] against the process environment.
pub fn get_boolean_input(name: &str, options: Option<&InputOptions>) -> Result<bool> {
    Inputs::system().get_boolean_input(name, options)
}
