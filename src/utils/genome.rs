//! Utilities related to the contig conventions of the human reference genome.

use crate::metadata::Ploidy;

//=================//
// Utility methods //
//=================//

/// The expected ploidy of every autosome in a human sample.
pub const HOMO_SAPIENS_AUTOSOMAL_PLOIDY: Ploidy = 2;

/// Rectifies a contig name so that naming conventions can be compared. The
/// name is uppercased and a leading "CHR" prefix is stripped (so "chrX",
/// "ChrX", and "X" are all rectified to "X").
pub fn rectify_contig_name(contig: &str) -> String {
    let upper = contig.to_uppercase();
    match upper.strip_prefix("CHR") {
        Some(rest) => rest.to_string(),
        None => upper,
    }
}

//=================//
// Kinds of contig //
//=================//

/// A sex chromosome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Allosome {
    /// The X chromosome.
    X,

    /// The Y chromosome.
    Y,
}

impl Allosome {
    /// All of the human allosomes.
    pub const ALL: [Allosome; 2] = [Allosome::X, Allosome::Y];
}

/// The classification of a contig within the human reference genome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContigClass {
    /// One of the autosomes "1" through "22".
    Autosome,

    /// One of the sex chromosomes.
    Allosome(Allosome),

    /// Anything else (mitochondrion, decoys, unplaced sequences, etc).
    NonStandard,
}

/// Classifies a contig name. The name is rectified first, so "chr5" is an
/// autosome and "chrMT" is non-standard.
pub fn classify_contig(contig: &str) -> ContigClass {
    let rectified = rectify_contig_name(contig);
    match rectified.as_str() {
        "X" => ContigClass::Allosome(Allosome::X),
        "Y" => ContigClass::Allosome(Allosome::Y),
        r => match r.parse::<u8>() {
            // Only canonical spellings count: "05" is not chromosome 5.
            Ok(n) if (1..=22).contains(&n) && n.to_string() == r => ContigClass::Autosome,
            _ => ContigClass::NonStandard,
        },
    }
}

//===============//
// Sex genotypes //
//===============//

/// A canonical human sex genotype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SexGenotype {
    /// Two copies of X, none of Y.
    XX,

    /// One copy each of X and Y.
    XY,
}

impl SexGenotype {
    /// All of the canonical human sex genotypes.
    pub const ALL: [SexGenotype; 2] = [SexGenotype::XX, SexGenotype::XY];

    /// Gets the expected ploidy of an allosome under this genotype.
    pub fn ploidy(&self, allosome: Allosome) -> Ploidy {
        match (self, allosome) {
            (SexGenotype::XX, Allosome::X) => 2,
            (SexGenotype::XX, Allosome::Y) => 0,
            (SexGenotype::XY, Allosome::X) => 1,
            (SexGenotype::XY, Allosome::Y) => 1,
        }
    }

    /// Whether this genotype matches an observed X and Y ploidy pair.
    pub fn matches(&self, x: Ploidy, y: Ploidy) -> bool {
        self.ploidy(Allosome::X) == x && self.ploidy(Allosome::Y) == y
    }

    /// The name of the genotype table.
    pub fn name(&self) -> &'static str {
        match self {
            SexGenotype::XX => "SEX_XX",
            SexGenotype::XY => "SEX_XY",
        }
    }
}

/// Whether `ploidy` appears for `allosome` in any of the canonical sex
/// genotypes (i.e. {2, 1} for X and {0, 1} for Y).
pub fn is_standard_allosomal_ploidy(allosome: Allosome, ploidy: Ploidy) -> bool {
    SexGenotype::ALL
        .iter()
        .any(|genotype| genotype.ploidy(allosome) == ploidy)
}
