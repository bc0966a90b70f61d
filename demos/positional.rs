use argparse::Parser;

fn main() {
    let mut parser = Parser::new("copy");
    parser.add_flag("verbose", "Verbose output");
    parser.parse();

    match parser.positional() {
        [src, dst, ..] => {
            println!("src: {src}");
            println!("dst: {dst}");

            if parser.has("verbose") {
                println!("verbose: true");
            }
        }
        _ => {
            eprintln!("Expected: {} <src> <dst>", parser.program());
            std::process::exit(1);
        }
    }
}
