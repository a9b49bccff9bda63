//! A collection of per-sample metadata for a cohort.

use indexmap::IndexMap;

use super::{
    MetadataError, MetadataKind, Ploidy, SampleCoverageMetadata, SampleMetadata,
    SamplePloidyMetadata, SampleReadDepthMetadata,
};

/// Represents a collection of different metadata for a cohort.
///
/// A collection is created empty at the start of a cohort run, filled as each
/// sample's metadata becomes available, and queried in bulk when cohort-level
/// model inputs are assembled. Each sample holds at most one metadata object of
/// each kind: a second registration is rejected and leaves the collection
/// unchanged.
///
/// Registration takes `&mut self`, so concurrent ingestion must be serialized
/// by the owner of the collection (for instance behind a `Mutex`).
#[derive(Debug, Default)]
pub struct SampleMetadataCollection {
    sample_coverage_metadata: IndexMap<String, SampleCoverageMetadata>,
    sample_ploidy_metadata: IndexMap<String, SamplePloidyMetadata>,
    sample_read_depth_metadata: IndexMap<String, SampleReadDepthMetadata>,
}

/// Inserts `metadata` into `storage` unless its sample already has an entry.
fn add_unique<T: SampleMetadata>(
    storage: &mut IndexMap<String, T>,
    metadata: T,
) -> Result<(), MetadataError> {
    let sample_name = metadata.sample_name();

    if storage.contains_key(sample_name) {
        return Err(MetadataError::DuplicateSample {
            sample: sample_name.to_string(),
            kind: T::KIND,
        });
    }

    let key = sample_name.to_string();
    storage.insert(key, metadata);
    Ok(())
}

/// Gets the metadata of `sample_name` from `storage`.
fn get_registered<'a, T: SampleMetadata>(
    storage: &'a IndexMap<String, T>,
    sample_name: &str,
) -> Result<&'a T, MetadataError> {
    storage
        .get(sample_name)
        .ok_or_else(|| MetadataError::SampleNotFound {
            sample: sample_name.to_string(),
            kind: T::KIND,
        })
}

fn all_registered<T, S>(storage: &IndexMap<String, T>, sample_names: &[S]) -> bool
where
    S: AsRef<str>,
{
    sample_names
        .iter()
        .all(|name| storage.contains_key(name.as_ref()))
}

impl SampleMetadataCollection {
    /// Creates a new, empty [`SampleMetadataCollection`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the coverage metadata of a sample.
    pub fn add_sample_coverage_metadata(
        &mut self,
        metadata: SampleCoverageMetadata,
    ) -> Result<(), MetadataError> {
        add_unique(&mut self.sample_coverage_metadata, metadata)
    }

    /// Registers the ploidy metadata of a sample.
    pub fn add_sample_ploidy_metadata(
        &mut self,
        metadata: SamplePloidyMetadata,
    ) -> Result<(), MetadataError> {
        add_unique(&mut self.sample_ploidy_metadata, metadata)
    }

    /// Registers the read depth metadata of a sample.
    pub fn add_sample_read_depth_metadata(
        &mut self,
        metadata: SampleReadDepthMetadata,
    ) -> Result<(), MetadataError> {
        add_unique(&mut self.sample_read_depth_metadata, metadata)
    }

    /// Whether every listed sample has coverage metadata.
    pub fn all_samples_have_coverage_metadata<S>(&self, sample_names: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        all_registered(&self.sample_coverage_metadata, sample_names)
    }

    /// Whether every listed sample has ploidy metadata.
    pub fn all_samples_have_ploidy_metadata<S>(&self, sample_names: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        all_registered(&self.sample_ploidy_metadata, sample_names)
    }

    /// Whether every listed sample has read depth metadata.
    pub fn all_samples_have_read_depth_metadata<S>(&self, sample_names: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        all_registered(&self.sample_read_depth_metadata, sample_names)
    }

    /// Whether every listed sample has metadata of the given kind.
    pub fn all_samples_have<S>(&self, kind: MetadataKind, sample_names: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        match kind {
            MetadataKind::Coverage => self.all_samples_have_coverage_metadata(sample_names),
            MetadataKind::Ploidy => self.all_samples_have_ploidy_metadata(sample_names),
            MetadataKind::ReadDepth => self.all_samples_have_read_depth_metadata(sample_names),
        }
    }

    /// Gets the coverage metadata of a sample.
    pub fn get_sample_coverage_metadata(
        &self,
        sample_name: &str,
    ) -> Result<&SampleCoverageMetadata, MetadataError> {
        get_registered(&self.sample_coverage_metadata, sample_name)
    }

    /// Gets the ploidy metadata of a sample.
    pub fn get_sample_ploidy_metadata(
        &self,
        sample_name: &str,
    ) -> Result<&SamplePloidyMetadata, MetadataError> {
        get_registered(&self.sample_ploidy_metadata, sample_name)
    }

    /// Gets the read depth metadata of a sample.
    pub fn get_sample_read_depth_metadata(
        &self,
        sample_name: &str,
    ) -> Result<&SampleReadDepthMetadata, MetadataError> {
        get_registered(&self.sample_read_depth_metadata, sample_name)
    }

    /// Gets the global read depth of each listed sample, in the order given.
    pub fn get_sample_read_depth_array<S: AsRef<str>>(
        &self,
        sample_names: &[S],
    ) -> Result<Vec<f64>, MetadataError> {
        sample_names
            .iter()
            .map(|name| {
                self.get_sample_read_depth_metadata(name.as_ref())
                    .map(|m| m.get_global_read_depth())
            })
            .collect()
    }

    /// Gets the average ploidy of each listed sample, in the order given.
    pub fn get_sample_average_ploidy_array<S: AsRef<str>>(
        &self,
        sample_names: &[S],
    ) -> Result<Vec<f64>, MetadataError> {
        sample_names
            .iter()
            .map(|name| {
                self.get_sample_read_depth_metadata(name.as_ref())
                    .map(|m| m.get_average_ploidy())
            })
            .collect()
    }

    /// Gets the ploidy of `contig` for each listed sample, in the order given.
    pub fn get_sample_contig_ploidy_array<S: AsRef<str>>(
        &self,
        contig: &str,
        sample_names: &[S],
    ) -> Result<Vec<Ploidy>, MetadataError> {
        sample_names
            .iter()
            .map(|name| {
                self.get_sample_ploidy_metadata(name.as_ref())?
                    .get_contig_ploidy(contig)
            })
            .collect()
    }

    /// Gets the names of the samples with read depth metadata, in the order in
    /// which they were registered.
    pub fn sample_names_with_read_depth(&self) -> impl Iterator<Item = &str> {
        self.sample_read_depth_metadata.keys().map(|s| s.as_str())
    }
}
