//! Clustering traits.

use crate::error::Result;
use ndarray::{Array2, ArrayView2};

/// Outcome of fitting a hard clustering model.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterFit {
    /// One cluster id per input row, each in `[0, k)`.
    pub labels: Vec<usize>,
    /// One centroid per cluster id, in the same space as the input rows.
    pub centroids: Array2<f32>,
    /// Within-cluster sum of squared distances.
    pub inertia: f32,
    /// Lloyd iterations performed by the retained run.
    pub n_iter: usize,
}

impl ClusterFit {
    /// Number of rows assigned to each cluster id.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.centroids.nrows()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

/// Trait for clustering algorithms.
pub trait Clustering {
    /// Fit the model to the rows of `data`.
    fn fit(&self, data: ArrayView2<'_, f32>) -> Result<ClusterFit>;

    /// Fit the model and return only the cluster labels, one per row.
    fn fit_predict(&self, data: ArrayView2<'_, f32>) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
