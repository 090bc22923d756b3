pub mod init;
pub mod lloyds;

// References:
// - https://scikit-learn.org/stable/modules/generated/sklearn.cluster.KMeans.html
// - k-means++: The Advantages of Careful Seeding (D. Arthur, S. Vassilvitskii)
//   https://theory.stanford.edu/~sergei/papers/kMeansPP-soda.pdf
//
// The engine in `crate::engine` drives these primitives one iteration at a
// time so the front end can animate every intermediate configuration.

/// Per-point cluster labels, index-aligned with the dataset. `None` is the
/// unassigned sentinel; a full assignment pass leaves no `None` behind.
pub type Assignment = Vec<Option<usize>>;
