//! Segment synthesis solver.
//!
//! Given a formula over named sets and the free variable `x`, a map of
//! known segments, and a designated target set, finds the longest or
//! shortest segment assignable to the target so the formula holds at every
//! integer in a bounded universe.
//!
//! The classification pass is O(universe size × formula size); the
//! universe is bounded by the known segments' endpoints plus a fixed
//! margin, so the caller controls the cost. Everything is synchronous and
//! pure, and solver instances share no state.

mod error;
mod eval;
mod report;
mod requirement;
mod synthesis;

pub use error::SolveError;
pub use eval::{evaluate, EvalError, SegmentLookup};
pub use report::format_points;
pub use requirement::PointRequirement;

use eval::TargetOverlay;
use rustc_hash::FxHashMap;
use taut_ir::{Expr, Segment};
use tracing::debug;

/// Margin added beyond the outermost known endpoints when bounding the
/// analysis universe. A heuristic, not a proof: classification is assumed
/// stable past every known endpoint.
const MARGIN: i64 = 10;

/// Offset for the fabricated target segment when hypothesizing `x ∉
/// target`: far enough that it is disjoint from any universe the margin
/// can produce.
const FAR_OFFSET: i64 = 1_000_000;

/// Outcome of one solve.
///
/// `length == -1` signals unsatisfiability; `length == 0` with no segment
/// means nothing constrains the target. Both are expected outcomes, not
/// errors.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution {
    pub length: i64,
    pub segment: Option<Segment>,
    pub explanation: String,
}

impl Solution {
    pub fn is_unsatisfiable(&self) -> bool {
        self.length == -1
    }
}

/// Solver for one `(formula, segments, target)` problem.
///
/// Parses eagerly and fails fast: the target must appear in the formula,
/// and every other referenced set must have a segment.
pub struct Solver {
    formula: Expr,
    segments: FxHashMap<String, Segment>,
    target: String,
}

impl Solver {
    /// Build a solver, validating the formula against the segment map.
    ///
    /// Set names are upper-cased here, at the boundary; internal code only
    /// sees normalized names. A segment supplied for the target itself is
    /// discarded; the target is the unknown being synthesized.
    pub fn new(
        formula: &str,
        segments: impl IntoIterator<Item = (String, Segment)>,
        target: &str,
    ) -> Result<Self, SolveError> {
        let ast = taut_parse::parse_formula(formula)?;
        let target = target.to_uppercase();

        let mut known: FxHashMap<String, Segment> = segments
            .into_iter()
            .map(|(name, segment)| (name.to_uppercase(), segment))
            .collect();
        known.remove(&target);

        let names = ast.set_names();
        if !names.contains(target.as_str()) {
            return Err(SolveError::TargetNotInFormula { target });
        }
        for name in names {
            if name != target && !known.contains_key(name) {
                return Err(SolveError::UndefinedSet {
                    name: name.to_string(),
                });
            }
        }

        Ok(Solver {
            formula: ast,
            segments: known,
            target,
        })
    }

    /// Classify how the target set must relate to point `x`.
    ///
    /// Evaluates the formula twice: once with the target hypothesized to
    /// contain `x` (a one-point segment at `x`), once with it hypothesized
    /// far outside the universe. A pure function of `(x, segments)`.
    pub fn analyze_point(&self, x: i64) -> Result<PointRequirement, SolveError> {
        let true_if_in = self.evaluate_with_target(x, true)?;
        let true_if_out = self.evaluate_with_target(x, false)?;
        Ok(PointRequirement::classify(true_if_in, true_if_out))
    }

    fn evaluate_with_target(&self, x: i64, member: bool) -> Result<bool, SolveError> {
        let hypothesis = if member {
            Segment::point(x)
        } else {
            Segment::point(x + FAR_OFFSET)
        };
        let overlay = TargetOverlay {
            base: &self.segments,
            target: &self.target,
            segment: hypothesis,
        };
        Ok(eval::evaluate(&self.formula, x, &overlay)?)
    }

    /// Analysis universe: outermost known endpoints padded by [`MARGIN`].
    /// `None` when no segments are known at all.
    fn universe(&self) -> Option<Segment> {
        let endpoints = self
            .segments
            .values()
            .flat_map(|s| [s.left(), s.right()]);
        let (min, max) = endpoints.fold(None, |acc: Option<(i64, i64)>, p| {
            Some(acc.map_or((p, p), |(lo, hi)| (lo.min(p), hi.max(p))))
        })?;
        Some(Segment::new(min - MARGIN, max + MARGIN))
    }

    /// Find the optimal target segment.
    ///
    /// `find_max` selects the longest admissible segment; otherwise the
    /// shortest segment covering every forced point.
    pub fn solve(&self, find_max: bool) -> Result<Solution, SolveError> {
        let Some(universe) = self.universe() else {
            return Ok(Solution {
                length: 0,
                segment: None,
                explanation: "No known segments: nothing bounds the analysis universe."
                    .to_string(),
            });
        };
        debug!(%universe, find_max, "classifying universe points");

        let mut must_in = Vec::new();
        let mut must_out = Vec::new();
        let mut can_either = Vec::new();
        let mut impossible = Vec::new();
        for x in universe.left()..=universe.right() {
            match self.analyze_point(x)? {
                PointRequirement::MustBeIn => must_in.push(x),
                PointRequirement::MustBeOut => must_out.push(x),
                PointRequirement::CanBeEither => can_either.push(x),
                PointRequirement::Impossible => impossible.push(x),
            }
        }

        if !impossible.is_empty() {
            return Ok(Solution {
                length: -1,
                segment: None,
                explanation: report::format_impossible(&self.target, &impossible),
            });
        }

        let (length, segment) = if find_max {
            synthesis::find_max_segment(&must_in, &must_out, &can_either, universe)
        } else {
            synthesis::find_min_segment(&must_in, &must_out)
        };

        let explanation = report::format_explanation(
            &report::Report {
                formula: &self.formula,
                target: &self.target,
                find_max,
                segments: &self.segments,
                universe,
                must_in: &must_in,
                must_out: &must_out,
                can_either: &can_either,
            },
            length,
            segment,
        );

        Ok(Solution {
            length,
            segment,
            explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segments(pairs: &[(&str, i64, i64)]) -> Vec<(String, Segment)> {
        pairs
            .iter()
            .map(|&(name, a, b)| (name.to_string(), Segment::new(a, b)))
            .collect()
    }

    fn solver(formula: &str, pairs: &[(&str, i64, i64)], target: &str) -> Solver {
        match Solver::new(formula, segments(pairs), target) {
            Ok(s) => s,
            Err(e) => panic!("unexpected construction failure: {e}"),
        }
    }

    fn analyze(s: &Solver, x: i64) -> PointRequirement {
        match s.analyze_point(x) {
            Ok(req) => req,
            Err(e) => panic!("unexpected analysis failure: {e}"),
        }
    }

    fn solve(s: &Solver, find_max: bool) -> Solution {
        match s.solve(find_max) {
            Ok(solution) => solution,
            Err(e) => panic!("unexpected solve failure: {e}"),
        }
    }

    #[test]
    fn construction_rejects_target_absent_from_formula() {
        let err = Solver::new("(x ∈ P)", segments(&[("P", 5, 10)]), "A");
        assert_eq!(
            err.err(),
            Some(SolveError::TargetNotInFormula {
                target: "A".to_string()
            })
        );
    }

    #[test]
    fn construction_rejects_undefined_sets() {
        let err = Solver::new("(x ∈ A) ∧ (x ∈ Z)", segments(&[]), "A");
        assert_eq!(
            err.err(),
            Some(SolveError::UndefinedSet {
                name: "Z".to_string()
            })
        );
    }

    #[test]
    fn construction_propagates_syntax_errors() {
        let err = Solver::new("(x ∈ A", segments(&[]), "A");
        assert!(matches!(err.err(), Some(SolveError::Syntax { .. })));
    }

    #[test]
    fn target_name_is_case_insensitive_and_its_segment_is_discarded() {
        // Supplying a segment for the target must not change the outcome.
        let with = solver("(x ∈ P) → (x ∈ A)", &[("P", 5, 10), ("A", 0, 1)], "a");
        let without = solver("(x ∈ P) → (x ∈ A)", &[("P", 5, 10)], "A");
        assert_eq!(solve(&with, false), solve(&without, false));
    }

    #[test]
    fn implication_forces_membership_on_the_antecedent_segment() {
        let s = solver("(x ∈ P) → (x ∈ A)", &[("P", 5, 10)], "A");
        for x in 5..=10 {
            assert_eq!(analyze(&s, x), PointRequirement::MustBeIn, "x = {x}");
        }
        // Outside P the implication is vacuously true either way.
        assert_eq!(analyze(&s, 4), PointRequirement::CanBeEither);
        assert_eq!(analyze(&s, 11), PointRequirement::CanBeEither);
    }

    #[test]
    fn minimum_mode_spans_exactly_the_forced_points() {
        let s = solver("(x ∈ P) → (x ∈ A)", &[("P", 5, 10)], "A");
        let solution = solve(&s, false);
        assert_eq!(solution.length, 5);
        assert_eq!(solution.segment, Some(Segment::new(5, 10)));
        assert!(solution.explanation.contains("A = [5, 10], length 5"));
    }

    #[test]
    fn conjunction_with_negated_target_forces_points_out() {
        let s = solver("(x ∈ P) ∧ ¬(x ∈ A)", &[("P", 5, 10)], "A");
        // Inside P the formula picks a side, it is not impossible.
        assert_eq!(analyze(&s, 7), PointRequirement::MustBeOut);
        // Outside P the conjunction is false either way.
        assert_eq!(analyze(&s, 11), PointRequirement::Impossible);
    }

    #[test]
    fn contradiction_on_the_target_is_unsatisfiable() {
        let s = solver("(x ∈ P) ∧ (x ∈ A) ∧ ¬(x ∈ A)", &[("P", 5, 10)], "A");
        for x in 5..=10 {
            assert_eq!(analyze(&s, x), PointRequirement::Impossible, "x = {x}");
        }
        let solution = solve(&s, true);
        assert_eq!(solution.length, -1);
        assert_eq!(solution.segment, None);
        assert!(solution.is_unsatisfiable());
        assert!(solution.explanation.contains("cannot be identically true"));
    }

    #[test]
    fn maximum_mode_finds_the_longest_gap_between_forced_out_runs() {
        let s = solver(
            "((x ∈ P) ≡ (x ∈ Q)) → ¬(x ∈ A)",
            &[("P", 5, 30), ("Q", 14, 23)],
            "A",
        );
        let solution = solve(&s, true);
        assert_eq!(solution.length, 8);
        assert_eq!(solution.segment, Some(Segment::new(5, 13)));

        // The winning segment contains no forced-out point, and no longer
        // admissible segment exists anywhere in the universe.
        let universe = Segment::new(-5, 40);
        let forced_out: Vec<i64> = (universe.left()..=universe.right())
            .filter(|&x| analyze(&s, x) == PointRequirement::MustBeOut)
            .collect();
        let segment = match solution.segment {
            Some(seg) => seg,
            None => panic!("expected a segment"),
        };
        assert!(forced_out.iter().all(|&p| !segment.contains(p)));
        for left in universe.left()..=universe.right() {
            for right in left..=universe.right() {
                if right - left > solution.length {
                    assert!(
                        forced_out.iter().any(|&p| left <= p && p <= right),
                        "longer admissible segment [{left}, {right}]"
                    );
                }
            }
        }
    }

    #[test]
    fn tautologous_clause_never_makes_points_impossible() {
        let s = solver(
            "((x ∈ P) ∨ ¬(x ∈ P)) ∧ ((x ∈ Q) → (x ∈ A))",
            &[("P", 0, 5), ("Q", 2, 3)],
            "A",
        );
        for x in -10..=15 {
            assert_ne!(analyze(&s, x), PointRequirement::Impossible, "x = {x}");
        }
        let solution = solve(&s, false);
        assert_eq!(solution.length, 1);
        assert_eq!(solution.segment, Some(Segment::new(2, 3)));
    }

    #[test]
    fn point_analysis_is_idempotent() {
        let s = solver("(x ∈ P) ⊕ (x ∈ A)", &[("P", -3, 3)], "A");
        for x in -13..=13 {
            assert_eq!(analyze(&s, x), analyze(&s, x), "x = {x}");
        }
    }

    #[test]
    fn no_known_segments_yields_the_trivial_solution() {
        let s = solver("(x ∈ A) ∨ ¬(x ∈ A)", &[], "A");
        let solution = solve(&s, true);
        assert_eq!(solution.length, 0);
        assert_eq!(solution.segment, None);
        assert!(solution.explanation.contains("No known segments"));
    }

    #[test]
    fn explanation_reports_segments_and_groups_deterministically() {
        let s = solver(
            "((x ∈ P) ≡ (x ∈ Q)) → ¬(x ∈ A)",
            &[("Q", 14, 23), ("P", 5, 30)],
            "A",
        );
        let first = solve(&s, true).explanation;
        let second = solve(&s, true).explanation;
        assert_eq!(first, second);
        // Sorted by name regardless of insertion order.
        let p_pos = first.find("P = [5, 30]");
        let q_pos = first.find("Q = [14, 23]");
        assert!(p_pos.is_some() && q_pos.is_some() && p_pos < q_pos);
        assert!(first.contains("must be out of A: [-5..4], [14..23], [31..40]"));
    }

    #[test]
    fn localized_formula_solves_like_the_english_one() {
        let localized = solver("(x В П) И (x В A)", &[("П", 1, 4)], "A");
        let english = solver("(x IN П) AND (x IN A)", &[("П", 1, 4)], "A");
        assert_eq!(solve(&localized, false), solve(&english, false));
    }
}
