pub mod dataset;
pub mod engine;
pub mod kmeans;
pub mod render;
pub mod rng;
pub mod types;

use snafu::prelude::*;

/// Everything that can go wrong while driving a clustering session.
///
/// All variants are detected eagerly, before any session state is mutated,
/// and all are recoverable: the caller fixes its parameters (or initializes
/// first) and tries again.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum EngineError {
    #[snafu(display("k must be between 1 and the dataset size {n}, got {k}"))]
    InvalidK { k: usize, n: usize },

    #[snafu(display("unknown initialization method: {name:?}"))]
    UnknownMethod { name: String },

    #[snafu(display("expected {k} manual centers, got {got}"))]
    CenterCountMismatch { k: usize, got: usize },

    #[snafu(display(
        "kmeans++ cannot form a sampling distribution: \
        every remaining point has zero distance to the chosen centers"
    ))]
    DegenerateInitialization,

    #[snafu(display("no centers have been initialized"))]
    NotInitialized,

    #[snafu(display("no snapshot has been recorded yet"))]
    NoSnapshotYet,
}

pub use dataset::Dataset;
pub use engine::{Session, StepOutcome};
pub use kmeans::init::InitMethod;
pub use kmeans::lloyds::CenterUpdate;
pub use render::{Frame, Renderer};
pub use types::Point;
