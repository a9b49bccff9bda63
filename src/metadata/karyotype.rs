//! Heuristic sanity checks of contig ploidy calls against the human karyotype.
//!
//! The checks are advisory: they never reject a sample and never modify the
//! calls. [`check_homo_sapiens_karyotype`] is a pure function returning the
//! list of [`KaryotypeAdvisory`]s, and the caller decides whether to surface
//! them (see [`log_karyotype_advisories`]).

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::Ploidy;
use crate::utils::genome::{
    classify_contig, is_standard_allosomal_ploidy, Allosome, ContigClass, SexGenotype,
    HOMO_SAPIENS_AUTOSOMAL_PLOIDY,
};

/// Appended to every advisory when it is logged.
pub const GENERAL_WARNING_MESSAGE: &str = "The presence of unmasked PAR regions and regions \
    of low mappability in the coverage metadata can result in unreliable ploidy designations. \
    It is recommended that the user verifies this designation by orthogonal methods.";

/// A finding of the karyotype sanity check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KaryotypeAdvisory {
    /// The contig is neither an autosome nor an allosome (e.g. a decoy or the
    /// mitochondrion).
    UnrecognizedContig {
        /// The contig, as named by the sample.
        contig: String,
    },

    /// An autosome was called with a ploidy other than two.
    AnomalousAutosomalPloidy {
        /// The contig, as named by the sample.
        contig: String,
        /// The called ploidy.
        ploidy: Ploidy,
    },

    /// Both allosomes are present, but their ploidies match no canonical sex
    /// genotype.
    AnomalousKaryotype {
        /// The called ploidy of X.
        x_ploidy: Ploidy,
        /// The called ploidy of Y.
        y_ploidy: Ploidy,
    },

    /// Only one allosome is present, and its ploidy appears in no canonical sex
    /// genotype.
    NonStandardAllosomalPloidy {
        /// The contig, as named by the sample.
        contig: String,
        /// The called ploidy.
        ploidy: Ploidy,
    },
}

impl fmt::Display for KaryotypeAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KaryotypeAdvisory::UnrecognizedContig { contig } => write!(
                f,
                "an unrecognized contig ({}). Germline contig ploidy determination may not be \
                reliable for decoy/non-standard contigs.",
                contig
            ),
            KaryotypeAdvisory::AnomalousAutosomalPloidy { contig, ploidy } => {
                write!(f, "an anomalous ploidy ({}) for contig {}.", ploidy, contig)
            }
            KaryotypeAdvisory::AnomalousKaryotype { x_ploidy, y_ploidy } => write!(
                f,
                "an anomalous karyotype ({{X: {}, Y: {}}}).",
                x_ploidy, y_ploidy
            ),
            KaryotypeAdvisory::NonStandardAllosomalPloidy { contig, ploidy } => write!(
                f,
                "some, but not all, of the expected allosomal contigs, and contig {} has a \
                non-standard ploidy ({}).",
                contig, ploidy
            ),
        }
    }
}

/// Checks contig ploidy calls against the human karyotype.
///
/// * Every contig that is neither an autosome ("1" to "22") nor an allosome
///   ("X", "Y") after rectification is reported as unrecognized.
/// * Every autosome with a ploidy other than two is reported.
/// * If both X and Y are present, the pair must match one of the canonical
///   sex genotypes ({X: 2, Y: 0} or {X: 1, Y: 1}).
/// * If only one of them is present, its ploidy must appear for that contig
///   in either canonical sex genotype.
///
/// `contigs` and `ploidies` are aligned. If an allosome appears under more
/// than one spelling, its last occurrence is used.
pub fn check_homo_sapiens_karyotype(
    contigs: &[String],
    ploidies: &[Ploidy],
) -> Vec<KaryotypeAdvisory> {
    let mut advisories = Vec::new();
    let mut allosomes: HashMap<Allosome, (&str, Ploidy)> = HashMap::new();

    for (contig, &ploidy) in contigs.iter().zip(ploidies) {
        match classify_contig(contig) {
            ContigClass::Autosome => {
                if ploidy != HOMO_SAPIENS_AUTOSOMAL_PLOIDY {
                    advisories.push(KaryotypeAdvisory::AnomalousAutosomalPloidy {
                        contig: contig.clone(),
                        ploidy,
                    });
                }
            }
            ContigClass::Allosome(allosome) => {
                allosomes.insert(allosome, (contig.as_str(), ploidy));
            }
            ContigClass::NonStandard => {
                advisories.push(KaryotypeAdvisory::UnrecognizedContig {
                    contig: contig.clone(),
                });
            }
        }
    }

    match (allosomes.get(&Allosome::X), allosomes.get(&Allosome::Y)) {
        (Some(&(_, x_ploidy)), Some(&(_, y_ploidy))) => {
            match SexGenotype::ALL
                .iter()
                .find(|genotype| genotype.matches(x_ploidy, y_ploidy))
            {
                Some(genotype) => debug!("Allosomal ploidies match {}.", genotype.name()),
                None => {
                    advisories.push(KaryotypeAdvisory::AnomalousKaryotype { x_ploidy, y_ploidy })
                }
            }
        }
        (None, None) => {}
        _ => {
            // A partial call is accepted if it appears for that contig in
            // either genotype table, regardless of the other allosome.
            for allosome in Allosome::ALL {
                if let Some(&(contig, ploidy)) = allosomes.get(&allosome) {
                    if !is_standard_allosomal_ploidy(allosome, ploidy) {
                        advisories.push(KaryotypeAdvisory::NonStandardAllosomalPloidy {
                            contig: contig.to_string(),
                            ploidy,
                        });
                    }
                }
            }
        }
    }

    advisories
}

/// Logs each advisory for `sample_name` as a warning.
pub fn log_karyotype_advisories(sample_name: &str, advisories: &[KaryotypeAdvisory]) {
    for advisory in advisories {
        match advisory {
            KaryotypeAdvisory::UnrecognizedContig { .. } => {
                warn!("Sample {} has {}", sample_name, advisory)
            }
            _ => warn!(
                "Sample {} has {} {}",
                sample_name, advisory, GENERAL_WARNING_MESSAGE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(calls: &[(&str, Ploidy)]) -> Vec<KaryotypeAdvisory> {
        let contigs: Vec<String> = calls.iter().map(|(c, _)| c.to_string()).collect();
        let ploidies: Vec<Ploidy> = calls.iter().map(|(_, p)| *p).collect();
        check_homo_sapiens_karyotype(&contigs, &ploidies)
    }

    #[test]
    fn test_normal_karyotypes() {
        assert!(check(&[("1", 2), ("2", 2), ("X", 1), ("Y", 1)]).is_empty());
        assert!(check(&[("chr1", 2), ("chrX", 2), ("chrY", 0)]).is_empty());
    }

    #[test]
    fn test_anomalous_karyotype() {
        assert_eq!(
            check(&[("X", 2), ("Y", 1)]),
            vec![KaryotypeAdvisory::AnomalousKaryotype {
                x_ploidy: 2,
                y_ploidy: 1
            }]
        );
    }

    #[test]
    fn test_unrecognized_contig() {
        assert_eq!(
            check(&[("chrMT", 1)]),
            vec![KaryotypeAdvisory::UnrecognizedContig {
                contig: String::from("chrMT")
            }]
        );
    }

    #[test]
    fn test_anomalous_autosomal_ploidy() {
        assert_eq!(
            check(&[("4", 2), ("5", 3)]),
            vec![KaryotypeAdvisory::AnomalousAutosomalPloidy {
                contig: String::from("5"),
                ploidy: 3
            }]
        );
    }

    #[test]
    fn test_partial_allosomes() {
        assert!(check(&[("X", 1)]).is_empty());
        assert!(check(&[("X", 2)]).is_empty());
        assert!(check(&[("chrY", 0)]).is_empty());
        assert_eq!(
            check(&[("chrX", 3)]),
            vec![KaryotypeAdvisory::NonStandardAllosomalPloidy {
                contig: String::from("chrX"),
                ploidy: 3
            }]
        );
        assert_eq!(
            check(&[("Y", 2)]),
            vec![KaryotypeAdvisory::NonStandardAllosomalPloidy {
                contig: String::from("Y"),
                ploidy: 2
            }]
        );
    }

    #[test]
    fn test_no_allosomes_skips_allosomal_check() {
        assert!(check(&[("1", 2), ("22", 2)]).is_empty());
    }

    #[test]
    fn test_multiple_advisories_are_reported_in_order() {
        let advisories = check(&[("1", 1), ("GL000192.1", 2), ("X", 0), ("Y", 0)]);
        assert_eq!(advisories.len(), 3);
        assert!(matches!(
            advisories[0],
            KaryotypeAdvisory::AnomalousAutosomalPloidy { ploidy: 1, .. }
        ));
        assert!(matches!(
            advisories[1],
            KaryotypeAdvisory::UnrecognizedContig { .. }
        ));
        assert!(matches!(
            advisories[2],
            KaryotypeAdvisory::AnomalousKaryotype {
                x_ploidy: 0,
                y_ploidy: 0
            }
        ));
    }
}
