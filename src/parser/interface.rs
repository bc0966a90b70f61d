use crate::parser::base::ParseError;

/// Where the console front end ([`Parser::parse`](crate::Parser::parse)) sends its output.
///
/// The default sends messages to stdout and errors to stderr.
pub trait UserInterface {
    /// Display a single line of regular output (ex: the help message).
    fn print(&self, message: String);

    /// Display a parse error.
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}

/// Split the paragraph into lines of at most `width` characters, breaking on spaces.
/// Words longer than the width are hyphenated.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() < width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    // Leave room for the hyphen.
    let increment = std::cmp::max(width, 2) - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let mut line: String = characters[left..left + increment].iter().collect();
        line.push('-');
        lines.push(line);
        left += increment;
    }

    current.extend(&characters[left..]);
}
