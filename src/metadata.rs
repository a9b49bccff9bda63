//! Per-sample metadata for copy-number variant calling.
//!
//! # Overview
//!
//! Four kinds of metadata are tracked, leaf-first:
//!
//! * [`IntervalListMetadata`] indexes an ordered interval list by contig.
//! * [`SampleCoverageMetadata`] reduces one sample's per-interval read counts
//!   to per-contig and total counts.
//! * [`SamplePloidyMetadata`] holds one sample's per-contig ploidy calls and
//!   their genotyping qualities.
//! * [`SampleReadDepthMetadata`] is derived from the three above and carries the
//!   sample's global read depth and average ploidy.
//!
//! All per-sample objects are registered into a [`SampleMetadataCollection`],
//! which is created explicitly for each cohort run and queried in bulk when the
//! cohort-level model inputs are assembled.

pub mod collection;
pub mod coverage;
pub mod error;
pub mod intervals;
pub mod karyotype;
pub mod ploidy;
pub mod read_depth;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub use self::collection::SampleMetadataCollection;
pub use self::coverage::SampleCoverageMetadata;
pub use self::error::MetadataError;
pub use self::intervals::{Interval, IntervalListMetadata};
pub use self::karyotype::KaryotypeAdvisory;
pub use self::ploidy::SamplePloidyMetadata;
pub use self::read_depth::SampleReadDepthMetadata;

/// Integer type for read counts and interval counts.
pub type Count = u64;

/// Integer type for contig ploidy calls.
pub type Ploidy = u16;

/// An ordered list of contig names shared (read-only) between the interval
/// list metadata that produced it and the per-sample metadata built against it.
pub type ContigList = Arc<Vec<String>>;

//================//
// Metadata kinds //
//================//

/// The kinds of per-sample metadata held by a [`SampleMetadataCollection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    /// Raw coverage counts ([`SampleCoverageMetadata`]).
    Coverage,

    /// Contig ploidy calls ([`SamplePloidyMetadata`]).
    Ploidy,

    /// Global read depth and average ploidy ([`SampleReadDepthMetadata`]).
    ReadDepth,
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataKind::Coverage => write!(f, "coverage"),
            MetadataKind::Ploidy => write!(f, "ploidy"),
            MetadataKind::ReadDepth => write!(f, "read depth"),
        }
    }
}

/// Common interface of the metadata objects that are registered per sample.
pub trait SampleMetadata {
    /// The kind of metadata this type represents.
    const KIND: MetadataKind;

    /// The name of the sample this metadata belongs to.
    fn sample_name(&self) -> &str;
}

//===========//
// Utilities //
//===========//

/// Builds a lookup from contig name to its position within `contig_list`.
pub(crate) fn contig_positions(contig_list: &[String]) -> HashMap<String, usize> {
    contig_list
        .iter()
        .enumerate()
        .map(|(j, contig)| (contig.clone(), j))
        .collect()
}

/// Ensures a per-contig vector has exactly one entry per contig.
pub(crate) fn check_dimension(
    sample: &str,
    field: &'static str,
    contig_list: &[String],
    actual: usize,
) -> Result<(), MetadataError> {
    if actual != contig_list.len() {
        return Err(MetadataError::DimensionMismatch {
            sample: sample.to_string(),
            field,
            expected: contig_list.len(),
            actual,
        });
    }

    Ok(())
}
