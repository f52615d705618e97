use std::fs;

use clap::Parser;
use infixa::evaluate_line;

/// infixa is a line-oriented evaluator for integer arithmetic expressions
/// written in infix notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infixa to look at a file of expressions, one per line,
    /// instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    // Each line is its own expression; a failing line never stops the batch.
    for line in source.lines() {
        match evaluate_line(line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
