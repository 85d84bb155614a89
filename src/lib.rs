//! # headline-cluster
//!
//! Topical clustering for small batches of short headlines.
//!
//! A run turns titles into an L2-normalized TF-IDF matrix, partitions the rows
//! with seeded k-means, and describes every cluster by the vocabulary terms
//! carrying the most centroid weight. Fetching headlines and rendering the
//! result are left to the caller; the `headline-cluster` binary (feature
//! `cli`) is a minimal JSON-in, report-out shell.
//!
//! ```rust
//! use headline_cluster::{cluster_items, Item};
//!
//! let items = vec![
//!     Item::new("Markets rally", "u1"),
//!     Item::new("Markets fall sharply", "u2"),
//!     Item::new("New film wins award", "u3"),
//!     Item::new("Film festival opens", "u4"),
//! ];
//!
//! let grouping = cluster_items(&items, 2).unwrap();
//! assert_eq!(grouping.len(), 2);
//! assert_eq!(grouping.n_items(), 4);
//! ```

pub mod cluster;
pub mod describe;
/// Error types used across `headline-cluster`.
pub mod error;
pub mod grouping;
pub mod item;
pub mod pipeline;
pub mod text;


pub use cluster::{ClusterFit, Clustering, Kmeans};
pub use describe::{describe, DEFAULT_TOP_N};
pub use error::{Error, Result};
pub use grouping::{assemble, ClusterGroup, Grouping};
pub use item::{prepare_batch, Item, BBC_NEWS_BASE, MAX_BATCH};
pub use pipeline::{cluster_items, ClusterReport, Pipeline, PipelineConfig};
pub use text::{vectorize, TermMatrix, Vocabulary};
