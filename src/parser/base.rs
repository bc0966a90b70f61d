use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::constant::*;
use crate::model::OptionSpec;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The error raised when the command line cannot be parsed, or when querying an undeclared name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `--name` token does not match any declared flag/option.
    #[error("Unknown option: --{0}")]
    UnknownOption(String),

    /// An option which takes a value was the final token.
    #[error("Missing value for --{0}")]
    MissingValue(String),

    /// A required option (without a default) was never supplied.
    #[error("Missing required option: --{0}")]
    MissingRequiredOption(String),

    /// A name was queried which was never declared.
    /// This indicates a programming error in the host, rather than bad user input.
    #[error("Option not found: {0}")]
    OptionNotFound(String),
}

/// The values and positionals matched from the command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Matches {
    pub(crate) values: HashMap<String, String>,
    pub(crate) positionals: Vec<String>,
}

/// The declared flags/options, keyed (and ordered) by name.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    options: BTreeMap<String, OptionSpec>,
}

impl Registry {
    /// Declare the option, replacing (and returning) any previous declaration of the same name.
    pub(crate) fn declare(&mut self, spec: OptionSpec) -> Option<OptionSpec> {
        let replaced = self.options.insert(spec.name().to_string(), spec);

        #[cfg(feature = "tracing_debug")]
        {
            if let Some(ref previous) = replaced {
                debug!("Replaced the declaration for '{}'.", previous.name());
            }
        }

        replaced
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }

    /// Match the tokens against the declarations, accumulating into `matches`.
    /// Stops at the first error; anything matched up to that point remains in `matches`.
    pub(crate) fn consume(&self, tokens: &[&str], matches: &mut Matches) -> Result<(), ParseError> {
        let mut token_iter = tokens.iter();

        while let Some(token) = token_iter.next() {
            match token.strip_prefix(OPTION_PREFIX) {
                Some(name) => {
                    let spec = self
                        .lookup(name)
                        .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;

                    let value = if spec.takes_value() {
                        token_iter
                            .next()
                            .copied()
                            .ok_or_else(|| ParseError::MissingValue(name.to_string()))?
                    } else {
                        FLAG_VALUE
                    };

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched '{name}' with value '{value}'.");
                    }

                    matches.values.insert(name.to_string(), value.to_string());
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched positional '{token}'.");
                    }

                    matches.positionals.push(token.to_string());
                }
            }
        }

        self.validate(matches)
    }

    fn validate(&self, matches: &Matches) -> Result<(), ParseError> {
        for spec in self.iter() {
            if spec.enforce_required() && !matches.values.contains_key(spec.name()) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Required option '{}' was not supplied.", spec.name());
                }

                return Err(ParseError::MissingRequiredOption(spec.name().to_string()));
            }
        }

        Ok(())
    }
}
