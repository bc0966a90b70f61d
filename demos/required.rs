use argparse::Parser;
use std::env;
use std::io;

fn main() {
    let mut parser = Parser::new("server");
    parser
        .add_option("host", "Bind host", true, "")
        .add_option("port", "Bind port", true, "");

    let command_input: Vec<String> = env::args().skip(1).collect();
    let tokens: Vec<&str> = command_input.iter().map(AsRef::as_ref).collect();

    if let Err(error) = parser.parse_tokens(tokens.as_slice()) {
        eprintln!("{error}\n");
        parser
            .print_help(&mut io::stdout())
            .expect("Failed to write the help message");
        std::process::exit(1);
    }

    println!("host: {}", parser.get("host").expect("host is declared"));
    println!("port: {}", parser.get("port").expect("port is declared"));
}
