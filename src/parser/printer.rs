use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::OptionSpec;
use crate::parser::interface::chunk;

const OPTION_INDENT: usize = 2;
const DESCRIPTION_INDENT: usize = 6;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

pub(crate) struct Printer<'a> {
    program: &'a str,
    options: Vec<&'a OptionSpec>,
    terminal_width: Option<usize>,
}

impl<'a> Printer<'a> {
    pub(crate) fn terminal(
        program: &'a str,
        options: impl IntoIterator<Item = &'a OptionSpec>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, options, terminal_width)
    }

    pub(crate) fn new(
        program: &'a str,
        options: impl IntoIterator<Item = &'a OptionSpec>,
        terminal_width: Option<usize>,
    ) -> Self {
        let mut options: Vec<&'a OptionSpec> = options.into_iter().collect();
        options.sort_by(|a, b| a.name().cmp(b.name()));
        Self {
            program,
            options,
            terminal_width,
        }
    }

    /// Render the help message, line by line.
    pub(crate) fn render(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Usage: {} [options]", self.program),
            "".to_string(),
            "Options:".to_string(),
        ];

        for option in &self.options {
            let grammar = if option.takes_value() {
                format!(" {VALUE_GRAMMAR}")
            } else {
                "".to_string()
            };
            lines.push(format!(
                "{:OPTION_INDENT$}{OPTION_PREFIX}{}{grammar}",
                "",
                option.name()
            ));

            let mut description = option.description().to_string();

            if !option.default_value().is_empty() {
                description.push_str(format!(" (default: {})", option.default_value()).as_str());
            }

            if option.required() {
                description.push_str(" [required]");
            }

            for line in self.wrap(description) {
                lines.push(format!("{:DESCRIPTION_INDENT$}{line}", ""));
            }

            lines.push("".to_string());
        }

        lines
    }

    fn wrap(&self, description: String) -> Vec<String> {
        match self.terminal_width {
            Some(total_width) => {
                let width = std::cmp::max(
                    total_width.saturating_sub(DESCRIPTION_INDENT),
                    MINIMUM_DESCRIPTION_WIDTH,
                );

                let lines = if description.chars().count() <= width {
                    Vec::default()
                } else {
                    chunk(&description, width)
                };

                if lines.is_empty() {
                    vec![description]
                } else {
                    lines
                }
            }
            None => vec![description],
        }
    }
}
