/// The prefix marking a token as an option/flag (ex: `--verbose`).
pub(crate) const OPTION_PREFIX: &str = "--";
/// The value recorded for a flag that appears on the command line.
pub(crate) const FLAG_VALUE: &str = "true";
/// The grammar shown in the help message for an option that takes a value.
pub(crate) const VALUE_GRAMMAR: &str = "<value>";
