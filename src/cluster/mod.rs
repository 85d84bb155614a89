//! Clustering of document vectors.
//!
//! Rows of a TF-IDF matrix are partitioned into exactly k hard clusters with
//! seeded k-means. Each row gets one label in `[0, k)` and each cluster gets a
//! centroid in the same vector space as the rows, which the descriptor stage
//! reads term weights from.
//!
//! Rows are L2-normalized before they get here, so squared Euclidean distance
//! between two rows is `2 - 2·cos(a, b)`: nearest-centroid assignment behaves
//! like cosine similarity for documents.
//!
//! ## Usage
//!
//! ```rust
//! use headline_cluster::cluster::{Clustering, Kmeans};
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.0], [0.1, 0.1], [10.0, 10.0], [10.1, 10.1]];
//!
//! let fit = Kmeans::new(2).with_seed(42).fit(data.view()).unwrap();
//! assert_eq!(fit.labels[0], fit.labels[1]);
//! assert_ne!(fit.labels[0], fit.labels[2]);
//! assert_eq!(fit.centroids.nrows(), 2);
//! ```

mod kmeans;
mod traits;

pub use kmeans::{Kmeans, DEFAULT_SEED};
pub use traits::{ClusterFit, Clustering};
