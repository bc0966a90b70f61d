/// A declared flag or option.
///
/// Built via [`Parser::add_flag`](crate::Parser::add_flag) or [`Parser::add_option`](crate::Parser::add_option).
/// The `name` is the identifier used on the command line as `--name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    name: String,
    description: String,
    required: bool,
    takes_value: bool,
    default_value: String,
}

impl OptionSpec {
    pub(crate) fn flag(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            takes_value: false,
            default_value: String::default(),
        }
    }

    pub(crate) fn option(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            takes_value: true,
            default_value: default_value.into(),
        }
    }

    /// The name of this option, without the `--` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text for this option.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether parsing fails when this option is absent.
    /// Only enforced when there is no default value.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether this option consumes the following token as its value (`true`), or is a flag (`false`).
    pub fn takes_value(&self) -> bool {
        self.takes_value
    }

    /// The default value for this option; empty means there is no default.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Whether the required-ness of this option must be checked after parsing.
    pub(crate) fn enforce_required(&self) -> bool {
        self.required && self.default_value.is_empty()
    }
}
