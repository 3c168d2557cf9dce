//! Segment synthesis from classified points.
//!
//! Inputs are the per-point classification buckets, each in ascending
//! order (the classification loop walks the universe left to right).
//! Lengths are measures: `right - left`, so a one-point segment scores 0.

use taut_ir::Segment;

/// Longest segment containing no forced-out point.
///
/// Partitions the universe by the sorted `MustBeOut` barriers (with the
/// universe bounds acting as virtual outer barriers) and takes the longest
/// open gap; with no `Impossible` points present, every point strictly
/// between two barriers is available, so the partition alone is
/// sufficient. Ties go to the leftmost gap.
pub(crate) fn find_max_segment(
    must_in: &[i64],
    must_out: &[i64],
    can_either: &[i64],
    universe: Segment,
) -> (i64, Option<Segment>) {
    debug_assert!(must_out.windows(2).all(|w| w[0] < w[1]));

    if must_in.is_empty() && can_either.is_empty() {
        return (0, None);
    }

    let mut barriers = Vec::with_capacity(must_out.len() + 2);
    barriers.push(universe.left() - 1);
    barriers.extend_from_slice(must_out);
    barriers.push(universe.right() + 1);

    let mut best: Option<Segment> = None;
    for pair in barriers.windows(2) {
        let (lo, hi) = (pair[0] + 1, pair[1] - 1);
        if lo > hi {
            continue;
        }
        let gap = Segment::new(lo, hi);
        if best.map_or(true, |b| gap.len() > b.len()) {
            best = Some(gap);
        }
    }

    match best {
        Some(segment) => (segment.len(), Some(segment)),
        None => (0, None),
    }
}

/// Shortest segment covering every forced-in point.
///
/// The span is exactly `[min(must_in), max(must_in)]`; a forced-out point
/// inside it means the requirements conflict and no segment exists
/// (length -1). With nothing forced in, the empty answer has length 0.
pub(crate) fn find_min_segment(must_in: &[i64], must_out: &[i64]) -> (i64, Option<Segment>) {
    debug_assert!(must_in.windows(2).all(|w| w[0] < w[1]));

    let (Some(&lo), Some(&hi)) = (must_in.first(), must_in.last()) else {
        return (0, None);
    };

    let span = Segment::new(lo, hi);
    if must_out.iter().any(|&p| span.contains(p)) {
        return (-1, None);
    }
    (span.len(), Some(span))
}
