use crate::types::Point;
use rand::Rng;

/// Assign every point to its nearest center, writing into a caller-owned
/// assignment buffer. Ties are broken toward the lowest cluster index: the
/// scan runs in center order with a strict `<`, so the first center to reach
/// the minimum wins. Pure in its inputs, deterministic across calls.
pub fn assign_points(points: &[Point], centers: &[Point], assignment: &mut [Option<usize>]) {
    assert_eq!(points.len(), assignment.len());
    assert!(!centers.is_empty());

    for (point, slot) in points.iter().zip(assignment.iter_mut()) {
        let mut min = f32::MAX;
        let mut min_idx = 0;
        for (j, center) in centers.iter().enumerate() {
            let d = point.squared_distance(*center);
            if d < min {
                min = d;
                min_idx = j;
            }
        }
        *slot = Some(min_idx);
    }
}

/// How each cluster's new center was produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CenterUpdate {
    /// Arithmetic mean of the points assigned to the cluster.
    Mean(Point),
    /// The cluster was empty; its center was re-drawn uniformly from the
    /// dataset instead of being treated as an error.
    Resampled(Point),
}

impl CenterUpdate {
    pub fn point(self) -> Point {
        match self {
            Self::Mean(p) | Self::Resampled(p) => p,
        }
    }
}

/// Recompute one center per cluster index `0..k` as the mean of its assigned
/// points. Unassigned entries are not expected here: callers run a full
/// assignment pass first.
pub fn update_centers(
    rng: &mut impl Rng,
    points: &[Point],
    assignment: &[Option<usize>],
    k: usize,
) -> Vec<CenterUpdate> {
    assert_eq!(points.len(), assignment.len());

    let mut counts = vec![0u32; k];
    let mut sums = vec![Point::new(0.0, 0.0); k];

    for (point, label) in points.iter().zip(assignment.iter()) {
        let Some(cluster) = *label else { continue };
        assert!(cluster < k);
        counts[cluster] += 1;
        sums[cluster].x += point.x;
        sums[cluster].y += point.y;
    }

    counts
        .iter()
        .zip(sums.iter())
        .map(|(&count, sum)| {
            if count > 0 {
                CenterUpdate::Mean(Point::new(sum.x / count as f32, sum.y / count as f32))
            } else {
                CenterUpdate::Resampled(points[rng.random_range(0..points.len())])
            }
        })
        .collect()
}

/// Exact pairwise equality of two center sets, compared by index.
///
/// Intentionally not a tolerance check: once an assignment pass reproduces
/// the previous labels, the recomputed means are bit-identical, which is the
/// stabilization this detects. Do not swap in an epsilon.
pub fn centers_equal(a: &[Point], b: &[Point]) -> bool {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).all(|(x, y)| x.distance(*y) == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;
    use pretty_assertions::assert_eq;

    fn two_blobs() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 11.0),
            Point::new(11.0, 10.0),
        ]
    }

    #[test]
    fn assign_points_nearest_center() {
        let points = two_blobs();
        let centers = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let mut assignment = vec![None; points.len()];

        assign_points(&points, &centers, &mut assignment);

        assert_eq!(
            assignment,
            vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1)]
        );
    }

    #[test]
    fn assign_points_is_deterministic() {
        let points = two_blobs();
        let centers = [Point::new(2.0, 2.0), Point::new(9.0, 9.0)];

        let mut first = vec![None; points.len()];
        assign_points(&points, &centers, &mut first);

        let mut second = vec![None; points.len()];
        assign_points(&points, &centers, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn assign_points_ties_go_to_lowest_index() {
        // The point sits exactly between two identical-distance centers
        let points = [Point::new(5.0, 0.0)];
        let centers = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let mut assignment = vec![None];

        assign_points(&points, &centers, &mut assignment);
        assert_eq!(assignment, vec![Some(0)]);

        // Duplicate centers: still the first one
        let centers = [Point::new(4.0, 0.0), Point::new(4.0, 0.0)];
        assign_points(&points, &centers, &mut assignment);
        assert_eq!(assignment, vec![Some(0)]);
    }

    #[test]
    fn update_centers_computes_means() {
        let points = two_blobs();
        let assignment = vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1)];
        let mut rng = rng::new();

        let updates = update_centers(&mut rng, &points, &assignment, 2);

        assert_eq!(
            updates,
            vec![
                CenterUpdate::Mean(Point::new(1.0 / 3.0, 1.0 / 3.0)),
                CenterUpdate::Mean(Point::new(31.0 / 3.0, 31.0 / 3.0)),
            ]
        );
    }

    #[test]
    fn update_centers_resamples_empty_cluster() {
        let points = two_blobs();
        // Everything in cluster 0; cluster 1 is empty
        let assignment = vec![Some(0); points.len()];
        let mut rng = rng::new();

        let updates = update_centers(&mut rng, &points, &assignment, 2);

        assert!(matches!(updates[0], CenterUpdate::Mean(_)));
        match updates[1] {
            CenterUpdate::Resampled(p) => {
                assert!(points.contains(&p), "resampled center must be a dataset point");
            }
            other => panic!("expected Resampled, got {other:?}"),
        }
    }

    #[test]
    fn update_centers_returns_exactly_k() {
        let points = two_blobs();
        let assignment = vec![Some(0); points.len()];
        let mut rng = rng::new();
        let updates = update_centers(&mut rng, &points, &assignment, 4);
        assert_eq!(updates.len(), 4);
    }

    #[test]
    fn centers_equal_is_exact() {
        let a = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let b = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        assert!(centers_equal(&a, &b));

        let c = [Point::new(1.0, 2.0), Point::new(3.0, 4.0 + 1e-6)];
        assert!(!centers_equal(&a, &c));
    }

    #[test]
    fn centers_equal_compares_by_index_not_membership() {
        let a = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let swapped = [Point::new(2.0, 2.0), Point::new(1.0, 1.0)];
        assert!(!centers_equal(&a, &swapped));
    }
}
