//! Formula AST.
//!
//! A closed tagged-variant tree: membership leaves, unary negation, and
//! binary connectives. Nodes exclusively own their children; the parser is
//! the only producer. Evaluation lives in `taut_solve`; this crate only
//! defines the shape.

use rustc_hash::FxHashSet;
use std::fmt;

/// Binary connective kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Equiv,
    Xor,
}

impl BinaryOp {
    /// Mathematical symbol, used when rendering formulas back to text.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "∧",
            BinaryOp::Or => "∨",
            BinaryOp::Implies => "→",
            BinaryOp::Equiv => "≡",
            BinaryOp::Xor => "⊕",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed formula.
///
/// Membership leaves carry the *syntactic* set name; nothing here is
/// validated against a concrete segment map. The solver checks names at
/// construction time.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// `x ∈ NAME`
    Membership(String),
    /// `¬operand`
    Not(Box<Expr>),
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Convenience constructor for binary nodes.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Union of all set names referenced by membership leaves.
    pub fn set_names(&self) -> FxHashSet<&str> {
        let mut names = FxHashSet::default();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut FxHashSet<&'a str>) {
        match self {
            Expr::Membership(name) => {
                names.insert(name.as_str());
            }
            Expr::Not(operand) => operand.collect_names(names),
            Expr::Binary { left, right, .. } => {
                left.collect_names(names);
                right.collect_names(names);
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the formula in mathematical notation. The output re-lexes
    /// and re-parses to an identical tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Membership(name) => write!(f, "(x ∈ {name})"),
            Expr::Not(operand) => write!(f, "¬{operand}"),
            Expr::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
