use crate::types::Point;
use crate::{DegenerateInitializationSnafu, EngineError, InvalidKSnafu, UnknownMethodSnafu};
use rand::Rng;
use snafu::prelude::*;
use std::str::FromStr;

/// Center initialization strategy. Parsed from the strings the front end
/// sends: `"random"`, `"farthest_first"`, `"kmeans++"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InitMethod {
    Random,
    FarthestFirst,
    PlusPlus,
}

impl FromStr for InitMethod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "farthest_first" => Ok(Self::FarthestFirst),
            "kmeans++" => Ok(Self::PlusPlus),
            other => UnknownMethodSnafu { name: other }.fail(),
        }
    }
}

/// Pick `k` starting centers from `points`. Centers are always existing
/// dataset points, never synthesized coordinates.
pub fn initialize(
    rng: &mut impl Rng,
    points: &[Point],
    k: usize,
    method: InitMethod,
) -> Result<Vec<Point>, EngineError> {
    ensure!(
        k >= 1 && k <= points.len(),
        InvalidKSnafu {
            k,
            n: points.len()
        }
    );

    match method {
        InitMethod::Random => Ok(random(rng, points, k)),
        InitMethod::FarthestFirst => Ok(farthest_first(rng, points, k)),
        InitMethod::PlusPlus => plus_plus(rng, points, k),
    }
}

/// `k` distinct indices drawn uniformly without replacement.
fn random(rng: &mut impl Rng, points: &[Point], k: usize) -> Vec<Point> {
    rand::seq::index::sample(rng, points.len(), k)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Seed with one uniformly random point, then repeatedly take the point
/// whose minimum distance to the already-chosen centers is largest.
///
/// Ties on the maximum go to the first index that reaches it (strict `>`
/// scan in dataset order).
fn farthest_first(rng: &mut impl Rng, points: &[Point], k: usize) -> Vec<Point> {
    let n = points.len();

    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.random_range(0..n)]);

    // Minimum squared distance from each point to the chosen centers,
    // refreshed incrementally as centers are added. Squared distances order
    // the same as Euclidean ones, so the argmax is unchanged.
    let mut min_distances = vec![f32::MAX; n];

    while centers.len() < k {
        let latest = centers[centers.len() - 1];

        let mut best = 0;
        let mut best_distance = f32::MIN;
        for (i, min_d) in min_distances.iter_mut().enumerate() {
            *min_d = points[i].squared_distance(latest).min(*min_d);
            if *min_d > best_distance {
                best_distance = *min_d;
                best = i;
            }
        }

        centers.push(points[best]);
    }

    centers
}

#[inline]
fn sample_by_distance(rng: &mut impl Rng, min_distances: &[f32], sum: f32) -> usize {
    let random_threshold = rng.random::<f32>() * sum;
    let mut cumsum = 0.0;

    for (i, &distance) in min_distances.iter().enumerate() {
        cumsum += distance;
        if cumsum > random_threshold {
            return i;
        }
    }

    // Rounding can let the scan fall off the end; settle on the last point
    min_distances.len() - 1
}

/// Standard kmeans++: seed with one uniformly random point, then sample each
/// next center with probability proportional to the squared distance to the
/// nearest already-chosen center.
fn plus_plus(rng: &mut impl Rng, points: &[Point], k: usize) -> Result<Vec<Point>, EngineError> {
    let n = points.len();

    let mut centers = Vec::with_capacity(k);
    let seed = points[rng.random_range(0..n)];
    centers.push(seed);

    let mut min_distances = vec![0.0f32; n];
    let mut sum = 0.0f32;
    for (i, min_d) in min_distances.iter_mut().enumerate() {
        *min_d = points[i].squared_distance(seed);
        sum += *min_d;
    }

    for _ in 1..k {
        // A zero sum means every remaining point coincides with a chosen
        // center; there is no distribution to draw from.
        ensure!(sum > 0.0, DegenerateInitializationSnafu);

        let next = points[sample_by_distance(rng, &min_distances, sum)];
        centers.push(next);

        sum = 0.0;
        for (i, min_d) in min_distances.iter_mut().enumerate() {
            *min_d = points[i].squared_distance(next).min(*min_d);
            sum += *min_d;
        }
    }

    Ok(centers)
}
