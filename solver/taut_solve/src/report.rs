//! Explanation formatting.
//!
//! Pure presentation: everything reported here was already computed by the
//! classification and synthesis passes. The output is deterministic:
//! segments render sorted by name.

use rustc_hash::FxHashMap;
use std::fmt::Write as _;
use taut_ir::{Expr, Segment};

/// Everything the explanation needs from one solve pass.
pub(crate) struct Report<'a> {
    pub formula: &'a Expr,
    pub target: &'a str,
    pub find_max: bool,
    pub segments: &'a FxHashMap<String, Segment>,
    pub universe: Segment,
    pub must_in: &'a [i64],
    pub must_out: &'a [i64],
    pub can_either: &'a [i64],
}

/// Compress an ascending point list into run-length interval notation:
/// consecutive integers collapse to `[a..b]`, singletons stay literal,
/// the empty list renders as `∅`.
pub fn format_points(points: &[i64]) -> String {
    let Some((&first, rest)) = points.split_first() else {
        return "∅".to_string();
    };

    let mut parts = Vec::new();
    let mut start = first;
    let mut end = first;
    for &p in rest {
        if p == end + 1 {
            end = p;
        } else {
            push_run(&mut parts, start, end);
            start = p;
            end = p;
        }
    }
    push_run(&mut parts, start, end);
    parts.join(", ")
}

fn push_run(parts: &mut Vec<String>, start: i64, end: i64) {
    if start == end {
        parts.push(start.to_string());
    } else {
        parts.push(format!("[{start}..{end}]"));
    }
}

/// Render the full solution explanation.
pub(crate) fn format_explanation(
    report: &Report<'_>,
    length: i64,
    segment: Option<Segment>,
) -> String {
    let mut out = String::new();
    let target = report.target;

    let _ = writeln!(out, "Formula: {}", report.formula);
    let _ = writeln!(out, "Target set: {target}");
    let _ = writeln!(
        out,
        "Objective: {} length",
        if report.find_max { "maximum" } else { "minimum" }
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Known segments:");
    let mut names: Vec<&String> = report.segments.keys().collect();
    names.sort();
    for name in names {
        if let Some(seg) = report.segments.get(name) {
            let _ = writeln!(out, "  {name} = {seg}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Point analysis over {}:", report.universe);
    let _ = writeln!(
        out,
        "  must be in {target}:   {}",
        format_points(report.must_in)
    );
    let _ = writeln!(
        out,
        "  must be out of {target}: {}",
        format_points(report.must_out)
    );
    let _ = writeln!(
        out,
        "  free either way:  {}",
        format_points(report.can_either)
    );
    let _ = writeln!(out);

    if length < 0 {
        let _ = writeln!(
            out,
            "Result: no segment for {target} satisfies the requirements \
             (forced-out points fall inside the forced span)."
        );
    } else if let Some(seg) = segment {
        let _ = writeln!(out, "Result: {target} = {seg}, length {length}");
    } else {
        let _ = writeln!(
            out,
            "Result: no points constrain {target}; length {length}"
        );
    }

    out
}

/// Render the unsatisfiability report.
pub(crate) fn format_impossible(target: &str, impossible: &[i64]) -> String {
    format!(
        "The formula cannot be identically true: at {} it is false \
         whether or not x ∈ {target}.",
        format_points(impossible)
    )
}
