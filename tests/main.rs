use argparse::{ParseError, Parser};

#[macro_use]
extern crate assert_matches;

#[test]
fn flag_and_option() {
    let mut parser = Parser::new("app");
    parser
        .add_flag("verbose", "Enable verbose output")
        .add_option("port", "Server port", true, "");

    parser
        .parse_tokens(vec!["--verbose", "--port", "8080"].as_slice())
        .unwrap();

    assert!(parser.has("verbose"));
    assert_eq!(parser.get("port").unwrap(), "8080");
    assert!(parser.positional().is_empty());
}

#[test]
fn default_value() {
    let mut parser = Parser::new("app");
    parser.add_option("mode", "Run mode", false, "dev");

    parser.parse_tokens(empty::slice()).unwrap();

    assert!(!parser.has("mode"));
    assert_eq!(parser.get("mode").unwrap(), "dev");
}

#[test]
fn flag_absent() {
    let mut parser = Parser::new("app");
    parser.add_flag("verbose", "Enable verbose output");

    parser.parse_tokens(empty::slice()).unwrap();

    assert!(!parser.has("verbose"));
    assert_eq!(parser.get("verbose").unwrap(), "");
}

#[test]
fn positional_args() {
    let mut parser = Parser::new("app");
    parser.add_flag("verbose", "Enable verbose output");

    parser
        .parse_tokens(vec!["input.txt", "output.txt"].as_slice())
        .unwrap();

    assert_eq!(parser.positional(), &["input.txt", "output.txt"]);
    assert!(!parser.has("verbose"));
}

#[test]
fn positional_interleaved() {
    let mut parser = Parser::new("app");
    parser
        .add_flag("verbose", "")
        .add_option("port", "", false, "");

    parser
        .parse_tokens(vec!["a", "--port", "1", "b", "--verbose", "c"].as_slice())
        .unwrap();

    assert_eq!(parser.positional(), &["a", "b", "c"]);
    assert_eq!(parser.get("port").unwrap(), "1");
}

#[test]
fn unknown_option_errors() {
    let mut parser = Parser::new("app");

    let result = parser.parse_tokens(vec!["--nope"].as_slice());

    assert_matches!(result, Err(ParseError::UnknownOption(_)));
}

#[test]
fn required_option_missing_errors() {
    let mut parser = Parser::new("app");
    parser.add_option("port", "Server port", true, "");

    let result = parser.parse_tokens(empty::slice());

    assert_matches!(result, Err(ParseError::MissingRequiredOption(name)) if name == "port");
}

#[test]
fn required_option_with_default() {
    let mut parser = Parser::new("app");
    parser.add_option("port", "Server port", true, "8080");

    parser.parse_tokens(empty::slice()).unwrap();

    assert!(!parser.has("port"));
    assert_eq!(parser.get("port").unwrap(), "8080");
}

#[test]
fn missing_value_errors() {
    let mut parser = Parser::new("app");
    parser.add_option("port", "Server port", false, "");

    let result = parser.parse_tokens(vec!["--port"].as_slice());

    assert_matches!(result, Err(ParseError::MissingValue(name)) if name == "port");
}

#[test]
fn option_not_found_errors() {
    let parser = Parser::new("app");

    assert_matches!(parser.get("port"), Err(ParseError::OptionNotFound(_)));
}

#[test]
fn redeclare_last_wins() {
    let mut parser = Parser::new("app");
    parser.add_flag("x", "").add_option("x", "", true, "");

    let result = parser.parse_tokens(empty::slice());

    assert_matches!(result, Err(ParseError::MissingRequiredOption(name)) if name == "x");
    let options: Vec<_> = parser.options().collect();
    assert_eq!(options.len(), 1);
    assert!(options[0].takes_value());
    assert!(options[0].required());
}

#[test]
fn print_help() {
    let mut parser = Parser::new("server");
    parser
        .add_option("host", "Bind host", true, "")
        .add_option("port", "Bind port", false, "8080")
        .add_flag("verbose", "Verbose output");
    let mut sink: Vec<u8> = Vec::default();

    parser.print_help(&mut sink).unwrap();

    assert_eq!(
        String::from_utf8(sink).unwrap(),
        r#"Usage: server [options]

Options:
  --host <value>
      Bind host [required]

  --port <value>
      Bind port (default: 8080)

  --verbose
      Verbose output

"#
    );
}
