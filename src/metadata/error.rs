//! Errors raised while building, deriving, or registering sample metadata.

use thiserror::Error;

use super::MetadataKind;

/// An error related to sample metadata.
///
/// All variants are deterministic logic errors: they are reported to the
/// caller as soon as they are detected and are never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// A per-contig or per-interval vector disagrees in length with what it
    /// describes.
    #[error("sample ({sample}) has {actual} values for {field}, expected {expected}")]
    DimensionMismatch {
        /// The sample being constructed.
        sample: String,
        /// The name of the offending vector.
        field: &'static str,
        /// The expected length.
        expected: usize,
        /// The observed length.
        actual: usize,
    },

    /// A contig was queried that the sample has no metadata for.
    #[error("sample ({sample}) does not have {kind} metadata for contig ({contig})")]
    UnknownContig {
        /// The sample being queried.
        sample: String,
        /// The kind of metadata being queried.
        kind: MetadataKind,
        /// The missing contig.
        contig: String,
    },

    /// A derived statistic would have a zero denominator.
    #[error("sample ({sample}) has a zero {quantity}; read depth metadata cannot be derived")]
    DegenerateInput {
        /// The sample being derived.
        sample: String,
        /// The quantity that was zero.
        quantity: &'static str,
    },

    /// A derived statistic was not strictly positive.
    #[error("sample ({sample}) has a non-positive {quantity} ({value})")]
    NonPositiveStatistic {
        /// The sample being constructed.
        sample: String,
        /// The offending statistic.
        quantity: &'static str,
        /// Its value.
        value: f64,
    },

    /// Coverage and ploidy metadata passed together belong to different samples.
    #[error("coverage metadata is for sample ({coverage_sample}) but ploidy metadata is for sample ({ploidy_sample})")]
    SampleMismatch {
        /// The sample of the coverage metadata.
        coverage_sample: String,
        /// The sample of the ploidy metadata.
        ploidy_sample: String,
    },

    /// A sample's ploidy contigs do not match the interval list contigs.
    #[error("sample ({sample}) has ploidy calls for contigs {actual:?} but the interval list spans {expected:?}")]
    ContigListMismatch {
        /// The sample being derived.
        sample: String,
        /// The ordered contigs of the interval list.
        expected: Vec<String>,
        /// The ordered contigs of the ploidy metadata.
        actual: Vec<String>,
    },

    /// A second metadata object of the same kind was registered for a sample.
    #[error("sample \"{sample}\" already has {kind} metadata annotations")]
    DuplicateSample {
        /// The sample being registered.
        sample: String,
        /// The kind of metadata being registered.
        kind: MetadataKind,
    },

    /// No metadata of the requested kind is registered for a sample.
    #[error("sample \"{sample}\" does not have {kind} metadata annotations")]
    SampleNotFound {
        /// The sample being queried.
        sample: String,
        /// The kind of metadata being queried.
        kind: MetadataKind,
    },
}
