//! Per-point requirement classification.

/// How the target set must relate to a single integer point for the
/// formula to hold there.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PointRequirement {
    /// The formula holds only when the target contains the point.
    MustBeIn,
    /// The formula holds only when the target excludes the point.
    MustBeOut,
    /// The formula holds either way.
    CanBeEither,
    /// The formula fails either way; no assignment can satisfy it here.
    Impossible,
}

impl PointRequirement {
    /// Classify from the two hypothetical evaluations.
    pub(crate) const fn classify(true_if_in: bool, true_if_out: bool) -> Self {
        match (true_if_in, true_if_out) {
            (true, true) => PointRequirement::CanBeEither,
            (true, false) => PointRequirement::MustBeIn,
            (false, true) => PointRequirement::MustBeOut,
            (false, false) => PointRequirement::Impossible,
        }
    }
}
