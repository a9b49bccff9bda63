//! Functionality relating to the `cnv-metadata check-ploidy` subcommand itself.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::metadata::karyotype::log_karyotype_advisories;
use crate::metadata::{KaryotypeAdvisory, SampleMetadata, SamplePloidyMetadata};
use crate::utils::formats;

/// Clap arguments for the `cnv-metadata check-ploidy` subcommand.
#[derive(Args)]
pub struct CheckPloidyArgs {
    /// Contig ploidy call tables, one per sample.
    #[arg(value_name = "PLOIDY", required = true)]
    src: Vec<PathBuf>,
}

/// The karyotype check results of one sample.
#[derive(Debug, Serialize)]
pub struct SampleKaryotypeResult {
    /// The name of the sample.
    pub sample_name: String,

    /// Whether the calls are consistent with a normal human karyotype.
    pub normal: bool,

    /// The advisories raised for the sample.
    pub advisories: Vec<KaryotypeAdvisory>,
}

/// Main function for the `cnv-metadata check-ploidy` subcommand.
pub fn check_ploidy(args: CheckPloidyArgs) -> anyhow::Result<()> {
    info!("Starting check-ploidy subcommand.");

    let mut results = Vec::with_capacity(args.src.len());

    for src in args.src {
        let calls = formats::ploidy::read_path(&src)?;
        let (metadata, advisories) = SamplePloidyMetadata::new_with_karyotype_check(
            calls.sample_name,
            calls.ploidy,
            calls.ploidy_genotyping_quality,
            Arc::new(calls.contigs),
            true,
        )?;

        log_karyotype_advisories(metadata.sample_name(), &advisories);

        results.push(SampleKaryotypeResult {
            sample_name: metadata.sample_name().to_string(),
            normal: advisories.is_empty(),
            advisories,
        });
    }

    let output = serde_json::to_string_pretty(&results)?;
    println!("{}", output);

    Ok(())
}
