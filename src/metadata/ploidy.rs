//! Germline contig ploidy metadata of a sample.

use std::collections::HashMap;

use super::karyotype::{check_homo_sapiens_karyotype, KaryotypeAdvisory};
use super::{
    check_dimension, contig_positions, ContigList, MetadataError, MetadataKind, Ploidy,
    SampleMetadata,
};

/// Represents germline contig ploidy metadata of a sample. This metadata is
/// either read from a file or is generated by a contig ploidy determination
/// model.
#[derive(Clone, Debug)]
pub struct SamplePloidyMetadata {
    sample_name: String,
    contig_list: ContigList,
    ploidy_j: Vec<Ploidy>,
    ploidy_genotyping_quality_j: Vec<f64>,
    contig_map: HashMap<String, usize>,
}

impl SamplePloidyMetadata {
    /// Creates a new [`SamplePloidyMetadata`]. Fails if there is not exactly one
    /// ploidy call and one genotyping quality per contig.
    pub fn new(
        sample_name: impl Into<String>,
        ploidy_j: Vec<Ploidy>,
        ploidy_genotyping_quality_j: Vec<f64>,
        contig_list: ContigList,
    ) -> Result<Self, MetadataError> {
        let sample_name = sample_name.into();
        check_dimension(&sample_name, "contig ploidies", &contig_list, ploidy_j.len())?;
        check_dimension(
            &sample_name,
            "contig ploidy genotyping qualities",
            &contig_list,
            ploidy_genotyping_quality_j.len(),
        )?;

        let contig_map = contig_positions(&contig_list);

        Ok(Self {
            sample_name,
            contig_list,
            ploidy_j,
            ploidy_genotyping_quality_j,
            contig_map,
        })
    }

    /// Creates a new [`SamplePloidyMetadata`] and, if `check_karyotype` is set,
    /// runs [`check_germline_contig_ploidy_for_homo_sapiens`] on it. The
    /// advisories are returned alongside the metadata and never cause a
    /// failure.
    ///
    /// [`check_germline_contig_ploidy_for_homo_sapiens`]: Self::check_germline_contig_ploidy_for_homo_sapiens
    pub fn new_with_karyotype_check(
        sample_name: impl Into<String>,
        ploidy_j: Vec<Ploidy>,
        ploidy_genotyping_quality_j: Vec<f64>,
        contig_list: ContigList,
        check_karyotype: bool,
    ) -> Result<(Self, Vec<KaryotypeAdvisory>), MetadataError> {
        let metadata = Self::new(sample_name, ploidy_j, ploidy_genotyping_quality_j, contig_list)?;

        let advisories = match check_karyotype {
            true => metadata.check_germline_contig_ploidy_for_homo_sapiens(),
            false => Vec::new(),
        };

        Ok((metadata, advisories))
    }

    fn contig_index(&self, contig: &str) -> Result<usize, MetadataError> {
        self.contig_map
            .get(contig)
            .copied()
            .ok_or_else(|| MetadataError::UnknownContig {
                sample: self.sample_name.clone(),
                kind: MetadataKind::Ploidy,
                contig: contig.to_string(),
            })
    }

    /// Gets the contigs this sample's ploidy was called on.
    pub fn contig_list(&self) -> &ContigList {
        &self.contig_list
    }

    /// Gets the ploidy of each contig, in the same order as
    /// [`contig_list`](Self::contig_list).
    pub fn ploidy_j(&self) -> &[Ploidy] {
        &self.ploidy_j
    }

    /// Gets the ploidy genotyping quality of each contig.
    pub fn ploidy_genotyping_quality_j(&self) -> &[f64] {
        &self.ploidy_genotyping_quality_j
    }

    /// Gets the ploidy of `contig`.
    pub fn get_contig_ploidy(&self, contig: &str) -> Result<Ploidy, MetadataError> {
        self.contig_index(contig).map(|j| self.ploidy_j[j])
    }

    /// Gets the ploidy genotyping quality of `contig`.
    pub fn get_contig_ploidy_genotyping_quality(&self, contig: &str) -> Result<f64, MetadataError> {
        self.contig_index(contig)
            .map(|j| self.ploidy_genotyping_quality_j[j])
    }

    /// Checks the ploidy calls against the human karyotype. See
    /// [`check_homo_sapiens_karyotype`] for the rules.
    pub fn check_germline_contig_ploidy_for_homo_sapiens(&self) -> Vec<KaryotypeAdvisory> {
        check_homo_sapiens_karyotype(&self.contig_list, &self.ploidy_j)
    }
}

impl SampleMetadata for SamplePloidyMetadata {
    const KIND: MetadataKind = MetadataKind::Ploidy;

    fn sample_name(&self) -> &str {
        &self.sample_name
    }
}
