//! Metadata collected from a sample's coverage profile.

use std::collections::HashMap;

use super::{
    check_dimension, contig_positions, ContigList, Count, IntervalListMetadata, MetadataError,
    MetadataKind, SampleMetadata,
};

/// Represents basic metadata collected from a sample's coverage profile: the
/// total read count on each contig and over all contigs.
#[derive(Clone, Debug)]
pub struct SampleCoverageMetadata {
    sample_name: String,
    contig_list: ContigList,

    /// Total count per contig.
    n_j: Vec<Count>,

    /// Total count.
    n_total: Count,

    contig_map: HashMap<String, usize>,
}

impl SampleCoverageMetadata {
    /// Creates a new [`SampleCoverageMetadata`] from per-contig counts. Fails
    /// if there is not exactly one count per contig.
    pub fn new(
        sample_name: impl Into<String>,
        n_j: Vec<Count>,
        contig_list: ContigList,
    ) -> Result<Self, MetadataError> {
        let sample_name = sample_name.into();
        check_dimension(&sample_name, "per-contig counts", &contig_list, n_j.len())?;

        let n_total = n_j.iter().sum();
        let contig_map = contig_positions(&contig_list);

        Ok(Self {
            sample_name,
            contig_list,
            n_j,
            n_total,
            contig_map,
        })
    }

    /// Aggregates a sample's per-interval counts into per-contig counts using
    /// the contig membership recorded in `interval_list_metadata`. Fails if
    /// there is not exactly one count per interval.
    pub fn generate_sample_coverage_metadata(
        sample_name: impl Into<String>,
        n_t: &[Count],
        interval_list_metadata: &IntervalListMetadata,
    ) -> Result<Self, MetadataError> {
        let sample_name = sample_name.into();

        if n_t.len() != interval_list_metadata.num_intervals() {
            return Err(MetadataError::DimensionMismatch {
                sample: sample_name,
                field: "per-interval counts",
                expected: interval_list_metadata.num_intervals(),
                actual: n_t.len(),
            });
        }

        let n_j = interval_list_metadata
            .iter_contig_interval_indices()
            .map(|(_, indices)| indices.iter().map(|&ti| n_t[ti]).sum())
            .collect();

        Self::new(
            sample_name,
            n_j,
            interval_list_metadata.ordered_contig_list().clone(),
        )
    }

    /// Gets the contigs this sample's coverage is reported against.
    pub fn contig_list(&self) -> &ContigList {
        &self.contig_list
    }

    /// Gets the total count per contig, in the same order as
    /// [`contig_list`](Self::contig_list).
    pub fn n_j(&self) -> &[Count] {
        &self.n_j
    }

    /// Gets the total count on `contig`.
    pub fn get_contig_total_count(&self, contig: &str) -> Result<Count, MetadataError> {
        match self.contig_map.get(contig) {
            Some(&j) => Ok(self.n_j[j]),
            None => Err(MetadataError::UnknownContig {
                sample: self.sample_name.clone(),
                kind: MetadataKind::Coverage,
                contig: contig.to_string(),
            }),
        }
    }

    /// Gets the total count over all contigs.
    pub fn get_total_count(&self) -> Count {
        self.n_total
    }
}

impl SampleMetadata for SampleCoverageMetadata {
    const KIND: MetadataKind = MetadataKind::Coverage;

    fn sample_name(&self) -> &str {
        &self.sample_name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::metadata::Interval;

    fn interval_list_metadata(contigs: &[&str]) -> IntervalListMetadata {
        IntervalListMetadata::new(
            contigs
                .iter()
                .enumerate()
                .map(|(i, c)| Interval::new(*c, i as u64 * 1000 + 1, i as u64 * 1000 + 1000))
                .collect(),
        )
    }

    #[test]
    fn test_generate_is_a_partition_sum() {
        let intervals = interval_list_metadata(&["1", "2", "1", "X", "2", "1"]);
        let n_t = [10, 20, 30, 5, 7, 1];
        let metadata =
            SampleCoverageMetadata::generate_sample_coverage_metadata("S1", &n_t, &intervals)
                .unwrap();

        assert_eq!(metadata.n_j(), &[41, 27, 5]);
        assert_eq!(metadata.get_total_count(), n_t.iter().sum::<Count>());
        assert_eq!(metadata.n_j().iter().sum::<Count>(), metadata.get_total_count());
        assert_eq!(metadata.get_contig_total_count("2").unwrap(), 27);
        assert_eq!(metadata.sample_name(), "S1");
        assert!(Arc::ptr_eq(
            metadata.contig_list(),
            intervals.ordered_contig_list()
        ));
    }

    #[test]
    fn test_generate_fails_on_wrong_number_of_counts() {
        let intervals = interval_list_metadata(&["1", "1", "2"]);
        let err =
            SampleCoverageMetadata::generate_sample_coverage_metadata("S1", &[1, 2], &intervals)
                .unwrap_err();
        assert_eq!(
            err,
            MetadataError::DimensionMismatch {
                sample: String::from("S1"),
                field: "per-interval counts",
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_new_fails_on_wrong_number_of_contig_counts() {
        let contigs = Arc::new(vec![String::from("1"), String::from("2")]);
        let result = SampleCoverageMetadata::new("S1", vec![1, 2, 3], contigs);
        assert!(matches!(
            result,
            Err(MetadataError::DimensionMismatch {
                expected: 2,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_contig() {
        let contigs = Arc::new(vec![String::from("1")]);
        let metadata = SampleCoverageMetadata::new("S1", vec![4], contigs).unwrap();
        assert_eq!(
            metadata.get_contig_total_count("chrM").unwrap_err(),
            MetadataError::UnknownContig {
                sample: String::from("S1"),
                kind: MetadataKind::Coverage,
                contig: String::from("chrM"),
            }
        );
    }
}
