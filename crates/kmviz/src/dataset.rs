use crate::types::Point;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

pub const DEFAULT_NUM_SAMPLES: usize = 300;
pub const DEFAULT_CLUSTER_STD: f32 = 1.0;

// Synthetic blob centers land in this square so that, with std 1, the bulk
// of the cloud stays inside the [-5, 5] viewport.
const BLOB_CENTER_RANGE: std::ops::Range<f32> = -2.5..2.5;
const MIN_BLOB_CENTERS: usize = 2;
const MAX_BLOB_CENTERS: usize = 10;

/// An ordered point cloud. Immutable for the lifetime of a clustering
/// session; the session borrows it, never rewrites it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub points: Vec<Point>,
}

impl Dataset {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Gaussian blobs around the given synthetic centers.
///
/// Samples are split as evenly as possible across centers (the first
/// `n_samples % centers.len()` blobs get one extra point) and the result is
/// shuffled, so consecutive dataset indices do not leak cluster structure.
pub fn make_blobs(
    rng: &mut impl Rng,
    n_samples: usize,
    centers: &[Point],
    cluster_std: f32,
) -> Dataset {
    assert!(!centers.is_empty());
    assert!(cluster_std.is_finite() && cluster_std > 0.0);

    let mut points = Vec::with_capacity(n_samples);

    let base = n_samples / centers.len();
    let extra = n_samples % centers.len();

    for (i, &center) in centers.iter().enumerate() {
        let count = base + usize::from(i < extra);
        for _ in 0..count {
            let dx: f32 = rng.sample(StandardNormal);
            let dy: f32 = rng.sample(StandardNormal);
            points.push(Point::new(
                center.x + dx * cluster_std,
                center.y + dy * cluster_std,
            ));
        }
    }

    points.shuffle(rng);
    Dataset::new(points)
}

/// A fresh dataset the way the interactive front end requests one: a random
/// number of blob centers scattered near the middle of the viewport. The
/// number of synthetic centers is unrelated to the K later used for
/// clustering.
pub fn random_blobs(rng: &mut impl Rng) -> Dataset {
    let num_centers = rng.random_range(MIN_BLOB_CENTERS..=MAX_BLOB_CENTERS);
    let centers: Vec<Point> = (0..num_centers)
        .map(|_| {
            Point::new(
                rng.random_range(BLOB_CENTER_RANGE),
                rng.random_range(BLOB_CENTER_RANGE),
            )
        })
        .collect();

    make_blobs(rng, DEFAULT_NUM_SAMPLES, &centers, DEFAULT_CLUSTER_STD)
}
