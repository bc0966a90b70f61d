use argparse::Parser;

fn main() {
    let mut parser = Parser::new("app");
    parser
        .add_flag("verbose", "Enable verbose output")
        .add_option("port", "Server port", false, "8080");

    parser.parse();
    println!("verbose: {}", parser.has("verbose"));
    println!(
        "port: {}",
        parser.get("port").expect("port is always declared")
    );
}
