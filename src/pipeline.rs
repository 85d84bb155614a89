//! End-to-end clustering of a headline batch.
//!
//! ```text
//! items ─▶ vectorize ─▶ (matrix, vocabulary)
//!                 │
//!                 ▼
//!        k-means (seeded) ─▶ (labels, centroids)
//!                 │
//!                 ▼
//!        describe(centroids, vocabulary) ─▶ descriptors
//!                 │
//!                 ▼
//!        assemble(items, labels, descriptors) ─▶ Grouping
//! ```
//!
//! A run is a pure function of `(items, config)`: nothing is cached or shared
//! between runs, so separate runs may execute concurrently.

use crate::cluster::{Clustering, Kmeans, DEFAULT_SEED};
use crate::describe::{describe, DEFAULT_TOP_N};
use crate::error::{Error, Result};
use crate::grouping::{assemble, Grouping};
use crate::item::Item;
use crate::text::vectorize;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn};

/// Pipeline parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Requested number of clusters. Clamped to the batch size.
    pub n_clusters: usize,
    /// Descriptor terms per cluster.
    pub top_n: usize,
    /// Seed for centroid initialization.
    pub seed: u64,
    /// Maximum Lloyd iterations per k-means run.
    pub max_iter: usize,
    /// Number of seeded k-means restarts.
    pub n_init: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_clusters: 5,
            top_n: DEFAULT_TOP_N,
            seed: DEFAULT_SEED,
            max_iter: 300,
            n_init: 10,
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set requested cluster count.
    pub fn with_n_clusters(mut self, k: usize) -> Self {
        self.n_clusters = k;
        self
    }

    /// Set descriptor length.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the initialization seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the number of restarts.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }
}

/// Grouping plus run diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterReport {
    /// Cluster id → {terms, members}.
    pub grouping: Grouping,
    /// Cluster count actually used (requested k clamped to the batch size).
    pub n_clusters: usize,
    /// Number of distinct terms in the run's vocabulary.
    pub vocabulary_size: usize,
    /// Within-cluster sum of squares of the retained k-means run.
    pub inertia: f32,
    /// Lloyd iterations of the retained k-means run.
    pub n_iter: usize,
}

/// Headline clustering pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline from a configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Cluster `items` and describe each cluster.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] when `items` is empty.
    /// - [`Error::InvalidClusterCount`] when the configured k is 0.
    /// - [`Error::EmptyVocabulary`] when no title has a usable term.
    pub fn run(&self, items: &[Item]) -> Result<ClusterReport> {
        let cfg = &self.config;
        let span = info_span!("cluster_run", n_items = items.len(), requested_k = cfg.n_clusters);
        let _enter = span.enter();

        if items.is_empty() {
            return Err(Error::EmptyInput);
        }
        if cfg.n_clusters == 0 {
            return Err(Error::InvalidClusterCount {
                requested: 0,
                n_items: items.len(),
            });
        }

        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        let matrix = vectorize(&titles)?;
        debug!(
            vocabulary = matrix.vocabulary.len(),
            nnz = matrix.nnz(),
            "vectorized titles"
        );

        let k = cfg.n_clusters.min(items.len());
        if k < cfg.n_clusters {
            warn!(requested = cfg.n_clusters, effective = k, "cluster count clamped to batch size");
        }

        let fit = Kmeans::new(k)
            .with_seed(cfg.seed)
            .with_max_iter(cfg.max_iter)
            .with_n_init(cfg.n_init)
            .fit(matrix.weights.view())?;
        debug!(k, inertia = fit.inertia, n_iter = fit.n_iter, "clustered");

        let descriptors = describe(fit.centroids.view(), &matrix.vocabulary, cfg.top_n)?;
        let grouping = assemble(items, &fit.labels, descriptors)?;

        for group in grouping.iter().filter(|g| g.is_empty()) {
            warn!(cluster = group.id, "cluster has no members");
        }

        Ok(ClusterReport {
            grouping,
            n_clusters: k,
            vocabulary_size: matrix.vocabulary.len(),
            inertia: fit.inertia,
            n_iter: fit.n_iter,
        })
    }
}

/// Cluster `items` into at most `k` groups with default settings.
pub fn cluster_items(items: &[Item], k: usize) -> Result<Grouping> {
    Pipeline::new(PipelineConfig::default().with_n_clusters(k))
        .run(items)
        .map(|report| report.grouping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let cfg = PipelineConfig::new()
            .with_n_clusters(3)
            .with_top_n(4)
            .with_seed(7)
            .with_max_iter(50)
            .with_n_init(2);
        assert_eq!(cfg.n_clusters, 3);
        assert_eq!(cfg.top_n, 4);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.max_iter, 50);
        assert_eq!(cfg.n_init, 2);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let cfg: PipelineConfig = serde_json::from_str(r#"{"n_clusters": 2}"#).unwrap();
        assert_eq!(cfg, PipelineConfig::default().with_n_clusters(2));
    }

    #[test]
    fn test_zero_clusters_rejected() {
        let items = vec![Item::new("Markets rally", "u1")];
        let err = cluster_items(&items, 0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidClusterCount {
                requested: 0,
                n_items: 1
            }
        );
    }

    #[test]
    fn test_empty_input_checked_before_cluster_count() {
        assert_eq!(cluster_items(&[], 0).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_report_diagnostics() {
        let items = vec![
            Item::new("Markets rally", "u1"),
            Item::new("Film festival opens", "u2"),
        ];
        let report = Pipeline::new(PipelineConfig::new().with_n_clusters(2))
            .run(&items)
            .unwrap();
        assert_eq!(report.n_clusters, 2);
        assert_eq!(report.vocabulary_size, 5);
        assert!(report.inertia.abs() < 1e-6);
        assert!(report.n_iter >= 1);
    }
}
