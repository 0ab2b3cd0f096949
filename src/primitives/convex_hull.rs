use glam::DVec2;

/// Vertices of the convex hull of `points` in counter-clockwise order.
///
/// Andrew's monotone chain. Collinear points on the hull boundary and
/// duplicates are dropped, so a hull with fewer than three vertices means the
/// input has no area.
pub fn convex_hull(points: &[DVec2]) -> Vec<DVec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let turn = |o: DVec2, a: DVec2, b: DVec2| (a - o).perp_dot(b - o);

    let mut hull: Vec<DVec2> = Vec::with_capacity(2 * sorted.len());
    for &p in &sorted {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}
