use crate::primitives::EdgeCrossings;

/// Number of crossing edge pairs.
pub fn crossing_number(crossings: &EdgeCrossings) -> f64 {
    crossings.len() as f64
}
