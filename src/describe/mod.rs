//! Cluster descriptors.
//!
//! A descriptor is the short ranked list of vocabulary terms that best
//! characterize a cluster: the columns with the largest centroid weight.
//! Ranking is a pure function of the centroid, so equal weights are broken by
//! ascending column index (vocabulary order) and the output is deterministic.

use crate::error::{Error, Result};
use crate::text::Vocabulary;
use ndarray::{ArrayView1, ArrayView2};

/// Terms kept per cluster unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Column indices of `centroid`, heaviest first; ties by ascending index.
pub fn rank_columns(centroid: ArrayView1<'_, f32>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..centroid.len()).collect();
    // Stable sort on a descending key keeps ascending index order among ties.
    order.sort_by(|&a, &b| centroid[b].total_cmp(&centroid[a]));
    order
}

/// Top `top_n` terms for every centroid row.
///
/// Each list has `min(top_n, vocabulary.len())` entries; shorter vocabularies
/// truncate, they are never padded.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] when the centroid width differs from the
/// vocabulary size.
pub fn describe(
    centroids: ArrayView2<'_, f32>,
    vocabulary: &Vocabulary,
    top_n: usize,
) -> Result<Vec<Vec<String>>> {
    if centroids.ncols() != vocabulary.len() {
        return Err(Error::DimensionMismatch {
            expected: vocabulary.len(),
            found: centroids.ncols(),
        });
    }

    Ok(centroids
        .rows()
        .into_iter()
        .map(|centroid| {
            rank_columns(centroid)
                .into_iter()
                .take(top_n)
                .filter_map(|col| vocabulary.term(col).map(str::to_owned))
                .collect()
        })
        .collect())
}
