//! Contig-level metadata gathered from an interval list.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ContigList, Count};

/// A genomic interval. Only the contig and the ordinal position of the interval
/// within its list matter for metadata purposes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// The contig the interval lies on.
    pub contig: String,

    /// The start position of the interval.
    pub start: u64,

    /// The end position of the interval.
    pub end: u64,
}

impl Interval {
    /// Creates a new [`Interval`].
    pub fn new(contig: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            contig: contig.into(),
            start,
            end,
        }
    }
}

/// Represents metadata gathered from an interval list.
///
/// The interval list is scanned once. Contigs are recorded in the order in
/// which they first appear, and each contig keeps the positions of its
/// intervals within the original list (in their original order).
#[derive(Clone, Debug)]
pub struct IntervalListMetadata {
    /// The interval list itself.
    intervals: Vec<Interval>,

    /// Contigs in first-occurrence order.
    ordered_contig_list: ContigList,

    /// Unordered set of contigs spanned by the intervals.
    contig_set: HashSet<String>,

    /// Positions in `intervals` belonging to each contig, keyed in
    /// first-occurrence order.
    contig_interval_indices: IndexMap<String, Vec<usize>>,

    /// Number of intervals per contig, aligned with `ordered_contig_list`.
    t_j: Vec<Count>,
}

impl IntervalListMetadata {
    /// Generates the interval list metadata for an ordered interval list.
    pub fn new(intervals: Vec<Interval>) -> Self {
        info!("Generating intervals metadata...");

        let mut contig_interval_indices: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (ti, interval) in intervals.iter().enumerate() {
            contig_interval_indices
                .entry(interval.contig.clone())
                .or_default()
                .push(ti);
        }

        let ordered_contig_list: Vec<String> = contig_interval_indices.keys().cloned().collect();
        let contig_set = ordered_contig_list.iter().cloned().collect();
        let t_j = contig_interval_indices
            .values()
            .map(|indices| indices.len() as Count)
            .collect();

        debug!(
            "Indexed {} intervals across {} contigs.",
            intervals.len(),
            ordered_contig_list.len()
        );

        Self {
            intervals,
            ordered_contig_list: Arc::new(ordered_contig_list),
            contig_set,
            contig_interval_indices,
            t_j,
        }
    }

    /// Gets the interval list.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Gets the number of intervals in the list.
    pub fn num_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Gets the number of distinct contigs.
    pub fn num_contigs(&self) -> usize {
        self.ordered_contig_list.len()
    }

    /// Gets the contigs in the order in which they first appear in the interval
    /// list. The returned list is shared, not copied.
    pub fn ordered_contig_list(&self) -> &ContigList {
        &self.ordered_contig_list
    }

    /// Gets the set of contigs spanned by the intervals.
    pub fn contig_set(&self) -> &HashSet<String> {
        &self.contig_set
    }

    /// Gets the positions of the intervals that lie on `contig`, if any do.
    pub fn contig_interval_indices(&self, contig: &str) -> Option<&[usize]> {
        self.contig_interval_indices
            .get(contig)
            .map(|indices| indices.as_slice())
    }

    /// Gets the number of intervals per contig, in the same order as
    /// [`ordered_contig_list`](Self::ordered_contig_list).
    pub fn t_j(&self) -> &[Count] {
        &self.t_j
    }

    /// Iterates over each contig alongside the positions of its intervals, in
    /// first-occurrence order.
    pub fn iter_contig_interval_indices(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.contig_interval_indices
            .iter()
            .map(|(contig, indices)| (contig.as_str(), indices.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals_on(contigs: &[&str]) -> Vec<Interval> {
        contigs
            .iter()
            .enumerate()
            .map(|(i, contig)| Interval::new(*contig, i as u64 * 100 + 1, i as u64 * 100 + 100))
            .collect()
    }

    #[test]
    fn test_contigs_are_ordered_by_first_occurrence() {
        let metadata = IntervalListMetadata::new(intervals_on(&["2", "1", "2"]));
        assert_eq!(
            metadata.ordered_contig_list().as_slice(),
            &["2".to_string(), "1".to_string()]
        );
        assert_eq!(metadata.t_j(), &[2, 1]);
        assert_eq!(metadata.num_contigs(), 2);
        assert_eq!(metadata.num_intervals(), 3);
    }

    #[test]
    fn test_contig_interval_indices_preserve_order() {
        let metadata = IntervalListMetadata::new(intervals_on(&["X", "1", "X", "1", "Y"]));
        assert_eq!(metadata.contig_interval_indices("X"), Some(&[0, 2][..]));
        assert_eq!(metadata.contig_interval_indices("1"), Some(&[1, 3][..]));
        assert_eq!(metadata.contig_interval_indices("Y"), Some(&[4][..]));
        assert_eq!(metadata.contig_interval_indices("MT"), None);

        let contigs: Vec<&str> = metadata
            .iter_contig_interval_indices()
            .map(|(contig, _)| contig)
            .collect();
        assert_eq!(contigs, vec!["X", "1", "Y"]);
    }

    #[test]
    fn test_interval_counts_sum_to_total() {
        let intervals = intervals_on(&["1", "1", "2", "3", "2", "1", "3", "3"]);
        let total = intervals.len() as Count;
        let metadata = IntervalListMetadata::new(intervals);
        assert_eq!(metadata.t_j().iter().sum::<Count>(), total);
        assert_eq!(metadata.contig_set().len(), 3);
        assert!(metadata.contig_set().contains("3"));
    }

    #[test]
    fn test_empty_interval_list() {
        let metadata = IntervalListMetadata::new(Vec::new());
        assert!(metadata.ordered_contig_list().is_empty());
        assert!(metadata.t_j().is_empty());
        assert_eq!(metadata.num_intervals(), 0);
    }
}
