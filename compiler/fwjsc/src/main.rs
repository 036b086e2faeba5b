//! FWJS command-line interpreter.

use fwjsc::commands::{lex_file, parse_file, run_file, CommandError, RunOptions};
use fwjsc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "run" => {
            let (path, options) = match RunOptions::from_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    print_run_usage();
                    std::process::exit(1);
                }
            };
            run_file(&path, &options)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: fwjs lex <file>");
                std::process::exit(1);
            };
            lex_file(path)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: fwjs parse <file>");
                std::process::exit(1);
            };
            parse_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("fwjs {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        other => {
            // `fwjs prog.fwjs` is shorthand for `fwjs run prog.fwjs`.
            if std::path::Path::new(other).is_file() {
                match RunOptions::from_args(&args[1..]) {
                    Ok((path, options)) => run_file(&path, &options),
                    Err(message) => {
                        eprintln!("error: {message}");
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("error: unknown command `{other}`");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    exit_with(result);
}

fn exit_with(result: Result<bool, CommandError>) {
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("FWJS, a Featherweight JavaScript interpreter");
    println!();
    println!("Usage: fwjs <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>     Evaluate a program");
    println!("  lex <file>     Print the token stream");
    println!("  parse <file>   Print the expression tree");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Set RUST_LOG (for example RUST_LOG=fwjs_eval=debug) to enable tracing.");
}

fn print_run_usage() {
    eprintln!("Usage: fwjs run <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict-arity     Too few arguments is an error instead of binding null");
    eprintln!("  --max-depth=<n>    Maximum nested function calls (default: 10000)");
    eprintln!("  --show-result      Print the program's final value");
}
