use crate::drawing::Drawing;
use crate::error::{Error, Result};

/// Closest node pair relative to the drawing's extent.
///
/// `q = min(1, d_min / (d_max / sqrt(n)))` over all distinct node pairs.
/// Fails with fewer than two nodes or when any two nodes coincide.
pub fn node_resolution(drawing: &Drawing) -> Result<f64> {
    let points = drawing.positions();
    let n = points.len();
    if n < 2 {
        return Err(Error::Degenerate {
            metric: "node_resolution",
            reason: "fewer than two nodes",
        });
    }

    let mut dmin = f64::INFINITY;
    let mut dmax: f64 = 0.0;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = (*p - *q).length();
            dmin = dmin.min(d);
            dmax = dmax.max(d);
        }
    }

    if dmin == 0.0 {
        return Err(Error::Degenerate {
            metric: "node_resolution",
            reason: "two nodes share a position",
        });
    }

    let target_resolution = 1.0 / (n as f64).sqrt();
    Ok((dmin / (target_resolution * dmax)).min(1.0))
}
