//! Monkey CLI

use monkeyc::commands::lex_file;
use monkeyc::{init_tracing, repl, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2], &mut std::io::stdout().lock())
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_repl() -> Result<(), CliError> {
    println!("Monkey {} token REPL. Press Ctrl-D to exit.", env!("CARGO_PKG_VERSION"));
    let stdin = std::io::stdin();
    repl::run(stdin.lock(), &mut std::io::stdout().lock())
}

fn print_usage() {
    println!("Monkey scanner");
    println!();
    println!("Usage: monkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Tokenize a file and display tokens");
    println!("  repl           Print tokens for each line typed");
    println!("  help           Show this help message");
    println!("  version        Show version information");
    println!();
    println!("Set RUST_LOG=monkey_lexer=trace to log every scanned token.");
}
