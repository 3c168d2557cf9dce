//! Formula evaluation.
//!
//! Direct enum-based dispatch: the node set is fixed, so pattern matching
//! is preferred over trait objects and stays exhaustiveness-checked.
//! Membership resolution goes through the [`SegmentLookup`] seam so the
//! solver can overlay a hypothetical segment for the target set without
//! cloning the whole map per point.

use rustc_hash::FxHashMap;
use taut_ir::{BinaryOp, Expr, Segment};
use thiserror::Error;

/// Error raised when evaluation reaches a set with no segment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("set `{name}` is not defined")]
    UndefinedSet { name: String },
}

/// Resolution seam between the evaluator and segment storage.
pub trait SegmentLookup {
    fn lookup(&self, name: &str) -> Option<Segment>;
}

impl SegmentLookup for FxHashMap<String, Segment> {
    fn lookup(&self, name: &str) -> Option<Segment> {
        self.get(name).copied()
    }
}

/// A base map plus one hypothetical segment standing in for the target
/// set. The target's membership is always fixed before evaluation; there
/// is no "undetermined" sentinel anywhere in the evaluator.
pub(crate) struct TargetOverlay<'a> {
    pub base: &'a FxHashMap<String, Segment>,
    pub target: &'a str,
    pub segment: Segment,
}

impl SegmentLookup for TargetOverlay<'_> {
    fn lookup(&self, name: &str) -> Option<Segment> {
        if name == self.target {
            Some(self.segment)
        } else {
            self.base.lookup(name)
        }
    }
}

/// Evaluate a formula at integer point `x`.
///
/// Recursion depth is bounded by formula nesting, which is small.
pub fn evaluate(
    expr: &Expr,
    x: i64,
    segments: &impl SegmentLookup,
) -> Result<bool, EvalError> {
    match expr {
        Expr::Membership(name) => segments
            .lookup(name)
            .map(|segment| segment.contains(x))
            .ok_or_else(|| EvalError::UndefinedSet { name: name.clone() }),
        Expr::Not(operand) => Ok(!evaluate(operand, x, segments)?),
        Expr::Binary { left, op, right } => {
            let left = evaluate(left, x, segments)?;
            let right = evaluate(right, x, segments)?;
            Ok(apply(*op, left, right))
        }
    }
}

/// Standard two-valued truth tables.
const fn apply(op: BinaryOp, left: bool, right: bool) -> bool {
    match op {
        BinaryOp::And => left && right,
        BinaryOp::Or => left || right,
        BinaryOp::Implies => !left || right,
        BinaryOp::Equiv => left == right,
        BinaryOp::Xor => left != right,
    }
}
