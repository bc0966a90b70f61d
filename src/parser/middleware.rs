use std::env;
use std::io::Write;

use crate::model::OptionSpec;
use crate::parser::base::*;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser.
///
/// Declare flags & options via [`Parser::add_flag`] and [`Parser::add_option`], then parse the Cli input.
/// After parsing, query the results via [`Parser::has`], [`Parser::get`], and [`Parser::positional`].
pub struct Parser {
    program: String,
    registry: Registry,
    matches: Matches,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("program", &self.program)
            .field("registry", &self.registry)
            .field("matches", &self.matches)
            .finish()
    }
}

impl Parser {
    /// Create a command line parser for the program.
    /// The program name is only used in the help message.
    pub fn new(program: impl Into<String>) -> Self {
        Self::build(program, Box::new(ConsoleInterface::default()))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create a command line parser which sends the output of [`Parser::parse`] to the `user_interface`.
    #[cfg(feature = "unit_test")]
    pub fn with_interface(
        program: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self::build(program, user_interface)
    }

    fn build(program: impl Into<String>, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            program: program.into(),
            registry: Registry::default(),
            matches: Matches::default(),
            user_interface,
        }
    }

    /// The program name, as shown in the help message.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Declare a flag: a switch which takes no value (ex: `--verbose`).
    /// If repeated, only the final declaration of the name applies (whether flag or option).
    ///
    /// ### Example
    /// ```
    /// use argparse::Parser;
    ///
    /// let mut parser = Parser::new("program");
    /// parser.add_flag("verbose", "Enable verbose output.");
    /// parser.parse_tokens(vec!["--verbose"].as_slice()).unwrap();
    /// assert!(parser.has("verbose"));
    /// assert_eq!(parser.get("verbose").unwrap(), "true");
    /// ```
    pub fn add_flag(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.declare(OptionSpec::flag(name, description))
    }

    /// Declare an option: a parameter which takes the subsequent token as its value (ex: `--port 8080`).
    /// If repeated, only the final declaration of the name applies (whether flag or option).
    ///
    /// A `required` option must be supplied on the command line, unless it has a (non-empty) `default_value`.
    /// An empty `default_value` means the option has no default.
    ///
    /// ### Example
    /// ```
    /// use argparse::Parser;
    ///
    /// let mut parser = Parser::new("program");
    /// parser
    ///     .add_option("host", "Bind host.", true, "")
    ///     .add_option("port", "Bind port.", true, "8080");
    /// parser.parse_tokens(vec!["--host", "localhost"].as_slice()).unwrap();
    /// assert_eq!(parser.get("host").unwrap(), "localhost");
    /// assert_eq!(parser.get("port").unwrap(), "8080");
    /// ```
    pub fn add_option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        default_value: impl Into<String>,
    ) -> &mut Self {
        self.declare(OptionSpec::option(name, description, required, default_value))
    }

    fn declare(&mut self, spec: OptionSpec) -> &mut Self {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Declaring {spec:?}.");
        }

        self.registry.declare(spec);
        self
    }

    /// The declared flags & options, ordered by name.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.registry.iter()
    }

    /// Run the command line parser against the input tokens (not including the program name).
    ///
    /// Tokens are processed left to right:
    /// * `--NAME` matches the declaration `NAME`; an option consumes the following token as its value.
    /// * Any other token is collected as a positional.
    ///
    /// After all tokens are processed, every required option (without a default) must have been supplied.
    ///
    /// On error, the parse stops immediately and the query results should be discarded.
    ///
    /// Parsing again does not reset the previous results: values supplied by the later parse overwrite the earlier ones, and positionals are appended.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.registry.consume(tokens, &mut self.matches)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If parsing fails, displays the error followed by the help message, and exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&mut self) {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if let Err(error) = self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            self.report(error);
            std::process::exit(1);
        }
    }

    fn report(&self, error: ParseError) {
        self.report_with(error, Printer::terminal(self.program(), self.registry.iter()));
    }

    fn report_with(&self, error: ParseError, printer: Printer) {
        self.user_interface.print_error(error);

        for line in printer.render() {
            self.user_interface.print(line);
        }
    }

    /// Whether the flag/option was explicitly supplied on the command line.
    /// This is `false` for an option which only has a default value.
    pub fn has(&self, name: &str) -> bool {
        self.matches.values.contains_key(name)
    }

    /// Get the value of the flag/option.
    ///
    /// This is the value supplied on the command line (`"true"` for a flag), otherwise the declared default (empty when there is none).
    /// Errors with [`ParseError::OptionNotFound`] if `name` was never declared.
    pub fn get(&self, name: &str) -> Result<&str, ParseError> {
        if let Some(value) = self.matches.values.get(name) {
            return Ok(value.as_str());
        }

        self.registry
            .lookup(name)
            .map(OptionSpec::default_value)
            .ok_or_else(|| ParseError::OptionNotFound(name.to_string()))
    }

    /// The positional tokens, in the order they appeared on the command line.
    pub fn positional(&self) -> &[String] {
        &self.matches.positionals
    }

    /// Render the help message.
    /// Descriptions are never wrapped, so the output is the same regardless of the terminal.
    pub fn help(&self) -> String {
        let mut message = String::default();

        for line in Printer::new(self.program(), self.registry.iter(), None).render() {
            message.push_str(&line);
            message.push('\n');
        }

        message
    }

    /// Write the help message to the `sink` (ex: [`std::io::stdout`]).
    pub fn print_help(&self, sink: &mut impl Write) -> std::io::Result<()> {
        sink.write_all(self.help().as_bytes())
    }
}
