//! `argparse` is a minimal command line parser for Rust.
//!
//! It deliberately supports a small, uniform Cli syntax:
//! * *Flags*: boolean switches specified as `--NAME` (ex: `--verbose`).
//! * *Options*: string valued parameters specified as `--NAME VALUE` (ex: `--port 8080`).
//! Options may have a default value, and may be required.
//! * *Positionals*: every other token, collected in order.
//!
//! Values are not converted; every flag/option resolves to a `&str`.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/basic.rs")]
//! ```
//!
//! ```console
//! $ app --verbose
//! verbose: true
//! port: 8080
//!
//! $ app --port
//! Missing value for --port
//! Usage: app [options]
//!
//! Options:
//!   --port <value>
//!       Server port (default: 8080)
//!
//!   --verbose
//!       Enable verbose output
//!
//! ```
//!
//! # Cli Semantics
//! [`Parser::parse_tokens`] processes the tokens left to right, with a single forward cursor.
//!
//! * A token beginning with `--` names a declared flag/option.
//! An undeclared name is an error ([`ParseError::UnknownOption`]).
//! * A flag records the value `"true"`.
//! It never consumes the next token.
//! * An option consumes the next token as its value, whatever that token looks like.
//! For example, `--name --verbose` gives `name` the value `--verbose`.
//! If there is no next token, this is an error ([`ParseError::MissingValue`]).
//! * Any other token is a positional, including `-v` style tokens.
//! * Repeating a flag/option keeps the final value.
//! * There is no `--NAME=VALUE` syntax, and no `--` end of options separator.
//!
//! Once all the tokens are processed, each required option must have a value.
//! An option without a value is an error ([`ParseError::MissingRequiredOption`]), *unless* it has a default value.
//! In other words, a required option with a default value is never missing.
//!
//! ### Queries
//! * [`Parser::has`]: whether the flag/option was explicitly specified on the Cli.
//! * [`Parser::get`]: the specified value, otherwise the default value (empty if none).
//! Querying an undeclared name is an error ([`ParseError::OptionNotFound`]).
//! * [`Parser::positional`]: the positionals, in order.
//!
//! # Help
//! The help message lists the options sorted by name.
//! [`Parser::help`] and [`Parser::print_help`] always render each description on a single line.
//! Only the error output of [`Parser::parse`] wraps long descriptions to the terminal width.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing (`Parser::with_interface` and `UserInterface`).
//! * `tracing_debug`: Emit `tracing` debug events while declaring & parsing.
#![deny(missing_docs)]
mod constant;
mod model;
mod parser;

pub use model::OptionSpec;
pub use parser::{ParseError, Parser};
#[cfg(feature = "unit_test")]
pub use parser::UserInterface;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
