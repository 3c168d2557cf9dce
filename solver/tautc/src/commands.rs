//! CLI subcommand implementations.

use taut_ir::Segment;
use taut_solve::Solver;

/// Print the token stream for a formula, one token per line.
pub fn lex_formula(formula: &str) {
    for token in taut_lexer::lex(formula) {
        println!("{:>8}  {}", token.span.to_string(), token.kind);
    }
}

/// Parse a formula and print it back in mathematical notation.
///
/// Returns `false` when the formula is malformed; the diagnostic is
/// rendered against the normalized text the lexer actually scanned.
pub fn parse_formula(formula: &str) -> bool {
    match taut_parse::parse_formula(formula) {
        Ok(expr) => {
            println!("{expr}");
            true
        }
        Err(e) => {
            eprint!("{}", e.to_diagnostic().render(&taut_lexer::normalize(formula)));
            false
        }
    }
}

/// Options for `taut solve`, collected from the argument list.
#[derive(Default)]
pub struct SolveOptions {
    pub sets: Vec<(String, Segment)>,
    pub target: Option<String>,
    pub find_max: bool,
}

/// Parse a `--set` value of the form `NAME=LEFT:RIGHT`.
///
/// Endpoint order does not matter; `Segment::new` normalizes it.
pub fn parse_set_binding(value: &str) -> Result<(String, Segment), String> {
    let Some((name, range)) = value.split_once('=') else {
        return Err(format!(
            "invalid --set value `{value}`: expected NAME=LEFT:RIGHT"
        ));
    };
    let Some((left, right)) = range.split_once(':') else {
        return Err(format!(
            "invalid --set value `{value}`: expected NAME=LEFT:RIGHT"
        ));
    };
    let left: i64 = left
        .trim()
        .parse()
        .map_err(|_| format!("invalid --set endpoint `{left}`: expected an integer"))?;
    let right: i64 = right
        .trim()
        .parse()
        .map_err(|_| format!("invalid --set endpoint `{right}`: expected an integer"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid --set value `{value}`: empty set name"));
    }
    Ok((name.to_string(), Segment::new(left, right)))
}

/// Solve a formula for its target set and print the explanation.
///
/// Exit status: 0 solved, 1 invalid input, 2 unsatisfiable.
pub fn solve_formula(formula: &str, options: &SolveOptions) -> i32 {
    let Some(target) = options.target.as_deref() else {
        eprintln!("error: missing --target <set>");
        return 1;
    };

    let solver = match Solver::new(formula, options.sets.iter().cloned(), target) {
        Ok(solver) => solver,
        Err(e) => {
            eprint!("{}", e.to_diagnostic().render(&taut_lexer::normalize(formula)));
            return 1;
        }
    };

    match solver.solve(options.find_max) {
        Ok(solution) => {
            print!("{}", solution.explanation);
            if solution.is_unsatisfiable() {
                2
            } else {
                0
            }
        }
        Err(e) => {
            eprint!("{}", e.to_diagnostic().render(&taut_lexer::normalize(formula)));
            1
        }
    }
}
