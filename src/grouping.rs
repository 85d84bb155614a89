//! Final cluster → {terms, members} structure.
//!
//! The grouping is dense: cluster ids index a `Vec`, so every id in `[0, k)`
//! is present even when no item was assigned to it.

use crate::error::{Error, Result};
use crate::item::Item;
use serde::Serialize;

/// One cluster of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterGroup {
    /// Cluster id in `[0, k)`.
    pub id: usize,
    /// Descriptor terms, heaviest first.
    pub terms: Vec<String>,
    /// Assigned items, in input order.
    pub members: Vec<Item>,
}

impl ClusterGroup {
    /// Descriptor terms joined with `", "`, as shown in reports.
    pub fn terms_label(&self) -> String {
        self.terms.join(", ")
    }

    /// Whether no item was assigned to this cluster.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Cluster id → {terms, members} for every id in `[0, k)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grouping {
    clusters: Vec<ClusterGroup>,
}

impl Grouping {
    /// Number of clusters (k), including empty ones.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the grouping has no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Cluster by id.
    pub fn get(&self, id: usize) -> Option<&ClusterGroup> {
        self.clusters.get(id)
    }

    /// Clusters in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ClusterGroup> {
        self.clusters.iter()
    }

    /// Total number of member items across all clusters.
    pub fn n_items(&self) -> usize {
        self.clusters.iter().map(|c| c.members.len()).sum()
    }

    /// Cluster id an item with this title and link was assigned to.
    pub fn cluster_of(&self, item: &Item) -> Option<usize> {
        self.clusters
            .iter()
            .find(|c| c.members.contains(item))
            .map(|c| c.id)
    }

    /// Consume into the cluster list.
    pub fn into_clusters(self) -> Vec<ClusterGroup> {
        self.clusters
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a ClusterGroup;
    type IntoIter = std::slice::Iter<'a, ClusterGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

/// Join items, labels and descriptors into a [`Grouping`].
///
/// `descriptors.len()` is k. Every id gets an entry; items are appended to
/// `labels[i]` in input order.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] when `labels` and `items` differ in length.
/// - [`Error::InvalidParameter`] when a label is not below k.
pub fn assemble(items: &[Item], labels: &[usize], descriptors: Vec<Vec<String>>) -> Result<Grouping> {
    if labels.len() != items.len() {
        return Err(Error::DimensionMismatch {
            expected: items.len(),
            found: labels.len(),
        });
    }
    let k = descriptors.len();
    if labels.iter().any(|&label| label >= k) {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: "cluster id out of range",
        });
    }

    let mut clusters: Vec<ClusterGroup> = descriptors
        .into_iter()
        .enumerate()
        .map(|(id, terms)| ClusterGroup {
            id,
            terms,
            members: Vec::new(),
        })
        .collect();

    for (item, &label) in items.iter().zip(labels) {
        clusters[label].members.push(item.clone());
    }

    Ok(Grouping { clusters })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", "u1"),
            Item::new("b", "u2"),
            Item::new("c", "u3"),
        ]
    }

    fn terms(k: usize) -> Vec<Vec<String>> {
        (0..k).map(|i| vec![format!("t{i}")]).collect()
    }

    #[test]
    fn test_assemble_keeps_input_order_within_cluster() {
        let g = assemble(&items(), &[1, 0, 1], terms(2)).unwrap();

        assert_eq!(g.len(), 2);
        let titles: Vec<&str> = g.get(1).unwrap().members.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(g.get(0).unwrap().members, vec![Item::new("b", "u2")]);
        assert_eq!(g.n_items(), 3);
        assert_eq!(g.cluster_of(&Item::new("c", "u3")), Some(1));
    }

    #[test]
    fn test_assemble_keeps_empty_clusters() {
        let g = assemble(&items(), &[0, 0, 0], terms(3)).unwrap();

        assert_eq!(g.len(), 3);
        assert!(g.get(1).unwrap().is_empty());
        assert!(g.get(2).unwrap().is_empty());
        assert_eq!(g.get(2).unwrap().terms, vec!["t2"]);
        let ids: Vec<usize> = g.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_terms_label() {
        let group = ClusterGroup {
            id: 0,
            terms: vec!["markets".into(), "rally".into()],
            members: vec![],
        };
        assert_eq!(group.terms_label(), "markets, rally");
    }

    #[test]
    fn test_assemble_rejects_bad_labels() {
        assert!(matches!(
            assemble(&items(), &[0, 1], terms(2)),
            Err(Error::DimensionMismatch { expected: 3, found: 2 })
        ));
        assert!(matches!(
            assemble(&items(), &[0, 1, 2], terms(2)),
            Err(Error::InvalidParameter { name: "labels", .. })
        ));
    }

    #[test]
    fn test_serializes_as_cluster_list() {
        let g = assemble(&items()[..1], &[0], terms(1)).unwrap();
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json[0]["id"], 0);
        assert_eq!(json[0]["terms"][0], "t0");
        assert_eq!(json[0]["members"][0]["link"], "u1");
    }
}
