//! Global read depth and average ploidy of a sample.

use serde::Serialize;

use super::{
    IntervalListMetadata, MetadataError, MetadataKind, SampleCoverageMetadata, SampleMetadata,
    SamplePloidyMetadata,
};

/// Represents global read depth and average ploidy metadata for a sample. Both
/// quantities are strictly positive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleReadDepthMetadata {
    sample_name: String,
    global_read_depth: f64,
    average_ploidy: f64,
}

impl SampleReadDepthMetadata {
    /// Creates a new [`SampleReadDepthMetadata`]. Fails unless both the global
    /// read depth and the average ploidy are strictly positive.
    pub fn new(
        sample_name: impl Into<String>,
        global_read_depth: f64,
        average_ploidy: f64,
    ) -> Result<Self, MetadataError> {
        let sample_name = sample_name.into();

        for (quantity, value) in [
            ("global read depth", global_read_depth),
            ("average ploidy", average_ploidy),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(MetadataError::NonPositiveStatistic {
                    sample: sample_name,
                    quantity,
                    value,
                });
            }
        }

        Ok(Self {
            sample_name,
            global_read_depth,
            average_ploidy,
        })
    }

    /// Derives the global read depth and average ploidy of a sample.
    ///
    /// With `t_j` the number of intervals on contig `j` and `ploidy_j` its
    /// called ploidy, the effective number of copies covered by the intervals
    /// is `sum(t_j * ploidy_j)`. The global read depth is the total count
    /// divided by the effective copies, and the average ploidy is the effective
    /// copies divided by `sum(t_j)`.
    ///
    /// The coverage and ploidy metadata must belong to the same sample, and
    /// the ploidy calls must be on exactly the interval list's contigs, in the
    /// same order.
    pub fn generate_sample_read_depth_metadata(
        sample_coverage_metadata: &SampleCoverageMetadata,
        sample_ploidy_metadata: &SamplePloidyMetadata,
        interval_list_metadata: &IntervalListMetadata,
    ) -> Result<Self, MetadataError> {
        let sample_name = sample_ploidy_metadata.sample_name();

        if sample_coverage_metadata.sample_name() != sample_name {
            return Err(MetadataError::SampleMismatch {
                coverage_sample: sample_coverage_metadata.sample_name().to_string(),
                ploidy_sample: sample_name.to_string(),
            });
        }

        let ordered_contig_list = interval_list_metadata.ordered_contig_list();
        if ordered_contig_list != sample_ploidy_metadata.contig_list() {
            return Err(MetadataError::ContigListMismatch {
                sample: sample_name.to_string(),
                expected: ordered_contig_list.to_vec(),
                actual: sample_ploidy_metadata.contig_list().to_vec(),
            });
        }

        let t_j = interval_list_metadata.t_j();
        let ploidy_j = sample_ploidy_metadata.ploidy_j();

        let num_intervals = t_j.iter().map(|&t| t as f64).sum::<f64>();
        let effective_total_copies = t_j
            .iter()
            .zip(ploidy_j)
            .map(|(&t, &ploidy)| t as f64 * f64::from(ploidy))
            .sum::<f64>();

        if num_intervals == 0.0 {
            return Err(MetadataError::DegenerateInput {
                sample: sample_name.to_string(),
                quantity: "interval count",
            });
        }

        if effective_total_copies == 0.0 {
            return Err(MetadataError::DegenerateInput {
                sample: sample_name.to_string(),
                quantity: "effective total copy number",
            });
        }

        let n_total = sample_coverage_metadata.get_total_count() as f64;
        let global_read_depth = n_total / effective_total_copies;
        let average_ploidy = effective_total_copies / num_intervals;

        Self::new(sample_name, global_read_depth, average_ploidy)
    }

    /// Gets the global read depth.
    pub fn get_global_read_depth(&self) -> f64 {
        self.global_read_depth
    }

    /// Gets the average ploidy.
    pub fn get_average_ploidy(&self) -> f64 {
        self.average_ploidy
    }
}

impl SampleMetadata for SampleReadDepthMetadata {
    const KIND: MetadataKind = MetadataKind::ReadDepth;

    fn sample_name(&self) -> &str {
        &self.sample_name
    }
}
