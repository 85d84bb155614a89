//! K-means clustering.
//!
//! Partitions rows into k clusters by minimizing **within-cluster sum of squares**
//! (WCSS):
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. Initialize k centroids via k-means++
//! 2. **Assign**: each row → nearest centroid (ties go to the lowest cluster id)
//! 3. **Update**: each centroid → mean of its assigned rows
//! 4. Repeat until the assignment stops changing or `max_iter` is reached
//!
//! A centroid that ends an update with no rows keeps its previous position
//! and is not reseeded. Empty clusters are a valid outcome.
//!
//! ## K-means++ Initialization
//!
//! 1. Choose the first centroid uniformly at random
//! 2. Choose each next centroid with probability proportional to D(x)²
//!    (squared distance to the nearest existing centroid)
//!
//! ## Restarts
//!
//! Lloyd only finds a local minimum. `n_init` seedings are drawn from one
//! seeded RNG stream and the run with the lowest WCSS is kept, so the result
//! is still reproducible bit for bit for a given seed.

use super::traits::{ClusterFit, Clustering};
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::prelude::*;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum Lloyd iterations per run.
    max_iter: usize,
    /// Number of independently seeded runs.
    n_init: usize,
    /// Random seed.
    seed: u64,
}

impl Kmeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 300,
            n_init: 10,
            seed: DEFAULT_SEED,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the number of seeded restarts.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Initialize centroids using k-means++ algorithm.
    fn init_centroids(&self, data: &ArrayView2<'_, f32>, rng: &mut StdRng) -> Array2<f32> {
        let n = data.nrows();
        let d = data.ncols();
        let mut centroids = Array2::zeros((self.k, d));

        // First centroid: random point
        let first = rng.random_range(0..n);
        centroids.row_mut(0).assign(&data.row(first));

        for i in 1..self.k {
            let distances: Vec<f32> = (0..n)
                .map(|j| {
                    (0..i)
                        .map(|c| squared_distance(&data.row(j), &centroids.row(c)))
                        .fold(f32::MAX, f32::min)
                })
                .collect();

            // Sample proportional to squared distance
            let total: f32 = distances.iter().sum();
            if total == 0.0 {
                let idx = rng.random_range(0..n);
                centroids.row_mut(i).assign(&data.row(idx));
                continue;
            }

            let threshold = rng.random::<f32>() * total;
            let mut cumsum = 0.0;
            let mut selected = None;

            for (j, &dist) in distances.iter().enumerate() {
                if dist <= 0.0 {
                    continue;
                }
                cumsum += dist;
                selected = Some(j);
                if cumsum >= threshold {
                    break;
                }
            }

            // `total > 0` guarantees at least one positive distance.
            let selected = selected.unwrap_or(first);
            centroids.row_mut(i).assign(&data.row(selected));
        }

        centroids
    }

    /// Run Lloyd iterations from the given centroids.
    fn lloyd(&self, data: &ArrayView2<'_, f32>, mut centroids: Array2<f32>) -> ClusterFit {
        let n = data.nrows();
        let d = data.ncols();
        let mut labels = vec![usize::MAX; n];
        let mut n_iter = 0;

        for iter in 0..self.max_iter {
            let next = assign(data, &centroids);
            n_iter = iter + 1;
            if next == labels {
                break;
            }
            labels = next;

            let mut sums = Array2::<f32>::zeros((self.k, d));
            let mut counts = vec![0usize; self.k];
            for (i, &k) in labels.iter().enumerate() {
                let mut row = sums.row_mut(k);
                row += &data.row(i);
                counts[k] += 1;
            }

            for (k, &count) in counts.iter().enumerate() {
                if count > 0 {
                    let mean = sums.row(k).mapv(|v| v / count as f32);
                    centroids.row_mut(k).assign(&mean);
                }
            }
        }

        let inertia = labels
            .iter()
            .enumerate()
            .map(|(i, &k)| squared_distance(&data.row(i), &centroids.row(k)))
            .sum();

        ClusterFit {
            labels,
            centroids,
            inertia,
            n_iter,
        }
    }
}

/// Compute squared Euclidean distance.
fn squared_distance(a: &ArrayView1<'_, f32>, b: &ArrayView1<'_, f32>) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Index of the nearest centroid; the lowest id wins ties.
fn nearest(point: &ArrayView1<'_, f32>, centroids: &Array2<f32>) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f32::MAX;
    for (k, centroid) in centroids.rows().into_iter().enumerate() {
        let dist = squared_distance(point, &centroid);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = k;
        }
    }
    best_cluster
}

#[cfg(feature = "parallel")]
fn assign(data: &ArrayView2<'_, f32>, centroids: &Array2<f32>) -> Vec<usize> {
    (0..data.nrows())
        .into_par_iter()
        .map(|i| nearest(&data.row(i), centroids))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn assign(data: &ArrayView2<'_, f32>, centroids: &Array2<f32>) -> Vec<usize> {
    data.rows()
        .into_iter()
        .map(|row| nearest(&row, centroids))
        .collect()
}

impl Clustering for Kmeans {
    fn fit(&self, data: ArrayView2<'_, f32>) -> Result<ClusterFit> {
        let n = data.nrows();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.n_init == 0 {
            return Err(Error::InvalidParameter {
                name: "n_init",
                message: "must be at least 1",
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best: Option<ClusterFit> = None;

        for run in 0..self.n_init {
            let centroids = self.init_centroids(&data, &mut rng);
            let fit = self.lloyd(&data, centroids);
            trace!(run, inertia = fit.inertia, n_iter = fit.n_iter, "k-means run finished");
            // Strict comparison keeps the earliest run on ties.
            if best.as_ref().map_or(true, |b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        best.ok_or(Error::InvalidParameter {
            name: "n_init",
            message: "must be at least 1",
        })
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
