//! Taut CLI
//!
//! Lexes, parses, and solves segment-synthesis formulas.

use tautc::commands::{lex_formula, parse_formula, parse_set_binding, solve_formula, SolveOptions};
use tautc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: taut lex <formula>");
                std::process::exit(1);
            }
            lex_formula(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: taut parse <formula>");
                std::process::exit(1);
            }
            if !parse_formula(&args[2]) {
                std::process::exit(1);
            }
        }
        "solve" => {
            if args.len() < 3 {
                eprintln!("Usage: taut solve <formula> --set NAME=LEFT:RIGHT ... --target NAME [--max|--min]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --set NAME=LEFT:RIGHT   Define a known segment (repeatable)");
                eprintln!("  --target NAME           The set to synthesize");
                eprintln!("  --max                   Find the longest segment (default)");
                eprintln!("  --min                   Find the shortest segment");
                std::process::exit(1);
            }

            let formula = &args[2];
            let mut options = SolveOptions {
                find_max: true,
                ..SolveOptions::default()
            };

            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "--max" => options.find_max = true,
                    "--min" => options.find_max = false,
                    "--target" if i + 1 < args.len() => {
                        options.target = Some(args[i + 1].clone());
                        i += 1;
                    }
                    "--set" if i + 1 < args.len() => {
                        match parse_set_binding(&args[i + 1]) {
                            Ok(binding) => options.sets.push(binding),
                            Err(message) => {
                                eprintln!("error: {message}");
                                std::process::exit(1);
                            }
                        }
                        i += 1;
                    }
                    other => {
                        eprintln!("error: unknown or incomplete option `{other}`");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }

            std::process::exit(solve_formula(formula, &options));
        }
        _ => {
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: taut <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  lex <formula>     Print the token stream");
    println!("  parse <formula>   Parse and print the formula in mathematical notation");
    println!("  solve <formula> --set NAME=LEFT:RIGHT ... --target NAME [--max|--min]");
    println!("                    Synthesize the optimal segment for the target set");
    println!();
    println!("Formulas accept mathematical symbols (¬ ∧ ∨ → ≡ ⊕ ∈), ASCII digraphs");
    println!("(! & | -> <-> ^), and keywords (NOT AND OR IMPLIES EQUIV XOR IN).");
}
