//! Functionality relating to the `cnv-metadata read-depth` subcommand itself.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::Args;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::metadata::karyotype::log_karyotype_advisories;
use crate::metadata::{
    IntervalListMetadata, MetadataError, SampleCoverageMetadata, SampleMetadata,
    SampleMetadataCollection, SamplePloidyMetadata, SampleReadDepthMetadata,
};
use crate::utils::formats;

/// Clap arguments for the `cnv-metadata read-depth` subcommand.
#[derive(Args)]
pub struct ReadDepthArgs {
    /// Interval list the read counts were collected over.
    #[arg(short, long, value_name = "INTERVALS")]
    intervals: PathBuf,

    /// Read count tables, one per sample.
    #[arg(short, long, value_name = "COUNTS", required = true, num_args = 1..)]
    counts: Vec<PathBuf>,

    /// Contig ploidy call tables, one per sample.
    #[arg(short, long, value_name = "PLOIDY", required = true, num_args = 1..)]
    ploidy: Vec<PathBuf>,

    /// Do not check the contig ploidy calls against the human karyotype.
    #[arg(long)]
    skip_karyotype_check: bool,
}

/// The read depth metadata of one sample, as reported on stdout.
#[derive(Debug, Serialize)]
pub struct SampleReadDepthResult {
    /// The name of the sample.
    pub sample_name: String,

    /// The total read count over all intervals.
    pub total_count: u64,

    /// The global read depth.
    pub global_read_depth: f64,

    /// The average ploidy over all intervals.
    pub average_ploidy: f64,
}

/// A sample for which no read depth metadata could be derived.
#[derive(Debug, Serialize)]
pub struct SampleFailure {
    /// The name of the sample.
    pub sample_name: String,

    /// Why derivation failed.
    pub reason: String,
}

/// The final results for a `cnv-metadata read-depth` subcommand call.
#[derive(Debug, Default, Serialize)]
pub struct ReadDepthReport {
    /// Samples with read depth metadata, in the order their counts were given.
    pub samples: Vec<SampleReadDepthResult>,

    /// Samples that failed.
    pub failed: Vec<SampleFailure>,
}

/// Derives the read depth metadata of every sample that has both coverage and
/// ploidy metadata in `collection`, registering the results. Samples are
/// processed in the order given, and a failing sample does not stop the
/// others.
pub fn derive_read_depths(
    collection: &mut SampleMetadataCollection,
    interval_list_metadata: &IntervalListMetadata,
    sample_names: &[String],
) -> Vec<(String, MetadataError)> {
    let mut failures = Vec::new();

    for sample_name in sample_names {
        let derived = collection
            .get_sample_coverage_metadata(sample_name)
            .and_then(|coverage| {
                let ploidy = collection.get_sample_ploidy_metadata(sample_name)?;
                SampleReadDepthMetadata::generate_sample_read_depth_metadata(
                    coverage,
                    ploidy,
                    interval_list_metadata,
                )
            });
        let registered =
            derived.and_then(|read_depth| collection.add_sample_read_depth_metadata(read_depth));

        if let Err(err) = registered {
            error!("{}", err);
            failures.push((sample_name.clone(), err));
        }
    }

    failures
}

/// Main function for the `cnv-metadata read-depth` subcommand.
pub fn read_depth(args: ReadDepthArgs) -> anyhow::Result<()> {
    info!("Starting read-depth subcommand.");

    // (1) Index the interval list.
    let intervals = formats::intervals::read_path(&args.intervals)?;
    if intervals.is_empty() {
        bail!("interval list {} is empty", args.intervals.display());
    }
    let interval_list_metadata = IntervalListMetadata::new(intervals);
    info!(
        "Read {} intervals on {} contigs.",
        interval_list_metadata
            .num_intervals()
            .to_formatted_string(&Locale::en),
        interval_list_metadata.num_contigs()
    );

    let mut collection = SampleMetadataCollection::new();

    // (2) Aggregate the read counts of each sample.
    let mut sample_names = Vec::with_capacity(args.counts.len());
    for src in &args.counts {
        let counts = formats::counts::read_path(src)?;
        counts.check_intervals(interval_list_metadata.intervals())?;

        let coverage = SampleCoverageMetadata::generate_sample_coverage_metadata(
            counts.sample_name,
            &counts.counts,
            &interval_list_metadata,
        )?;
        info!(
            "Sample {} has {} total reads.",
            coverage.sample_name(),
            coverage.get_total_count().to_formatted_string(&Locale::en)
        );

        sample_names.push(coverage.sample_name().to_string());
        collection.add_sample_coverage_metadata(coverage)?;
    }

    // (3) Register the contig ploidy calls of each sample.
    for src in &args.ploidy {
        let calls = formats::ploidy::read_path(src)?;

        // Share the interval list's contigs when the calls are on the same ones.
        let shared = interval_list_metadata.ordered_contig_list();
        let contig_list = match **shared == calls.contigs {
            true => Arc::clone(shared),
            false => Arc::new(calls.contigs),
        };

        let (ploidy, advisories) = SamplePloidyMetadata::new_with_karyotype_check(
            calls.sample_name,
            calls.ploidy,
            calls.ploidy_genotyping_quality,
            contig_list,
            !args.skip_karyotype_check,
        )?;
        log_karyotype_advisories(ploidy.sample_name(), &advisories);

        if !collection.all_samples_have_coverage_metadata(&[ploidy.sample_name()]) {
            warn!(
                "Sample {} has contig ploidy calls but no read counts.",
                ploidy.sample_name()
            );
        }

        collection.add_sample_ploidy_metadata(ploidy)?;
    }

    // (4) Derive the global read depth and average ploidy.
    let failures = derive_read_depths(&mut collection, &interval_list_metadata, &sample_names);
    debug!(
        "Derived read depth metadata for {} of {} samples.",
        sample_names.len() - failures.len(),
        sample_names.len()
    );

    let mut report = ReadDepthReport::default();
    for sample_name in collection.sample_names_with_read_depth() {
        let coverage = collection.get_sample_coverage_metadata(sample_name)?;
        let read_depth = collection.get_sample_read_depth_metadata(sample_name)?;

        report.samples.push(SampleReadDepthResult {
            sample_name: sample_name.to_string(),
            total_count: coverage.get_total_count(),
            global_read_depth: read_depth.get_global_read_depth(),
            average_ploidy: read_depth.get_average_ploidy(),
        });
    }
    report.failed = failures
        .into_iter()
        .map(|(sample_name, err)| SampleFailure {
            sample_name,
            reason: err.to_string(),
        })
        .collect();

    // (5) Print the output to stdout as JSON.
    let output = serde_json::to_string_pretty(&report)?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Interval;

    fn interval_list_metadata() -> IntervalListMetadata {
        IntervalListMetadata::new(vec![
            Interval::new("1", 1, 100),
            Interval::new("1", 101, 200),
            Interval::new("X", 1, 100),
        ])
    }

    fn register(
        collection: &mut SampleMetadataCollection,
        intervals: &IntervalListMetadata,
        sample_name: &str,
        n_t: &[u64],
        ploidy_j: Option<Vec<u16>>,
    ) {
        collection
            .add_sample_coverage_metadata(
                SampleCoverageMetadata::generate_sample_coverage_metadata(
                    sample_name,
                    n_t,
                    intervals,
                )
                .unwrap(),
            )
            .unwrap();

        if let Some(ploidy_j) = ploidy_j {
            let quality = vec![50.0; ploidy_j.len()];
            collection
                .add_sample_ploidy_metadata(
                    SamplePloidyMetadata::new(
                        sample_name,
                        ploidy_j,
                        quality,
                        Arc::clone(intervals.ordered_contig_list()),
                    )
                    .unwrap(),
                )
                .unwrap();
        }
    }

    #[test]
    fn test_derive_read_depths() {
        let intervals = interval_list_metadata();
        let mut collection = SampleMetadataCollection::new();

        // effective copies = 2 * 2 + 1 * 1 = 5
        register(&mut collection, &intervals, "S1", &[10, 10, 5], Some(vec![2, 1]));
        // effective copies = 2 * 2 + 1 * 2 = 6
        register(&mut collection, &intervals, "S2", &[6, 6, 6], Some(vec![2, 2]));

        let names = vec![String::from("S1"), String::from("S2")];
        let failures = derive_read_depths(&mut collection, &intervals, &names);

        assert!(failures.is_empty());
        assert!(collection.all_samples_have_read_depth_metadata(&names));
        assert_eq!(
            collection.get_sample_read_depth_array(&names).unwrap(),
            vec![5.0, 3.0]
        );
        assert_eq!(
            collection.get_sample_average_ploidy_array(&names).unwrap(),
            vec![5.0 / 3.0, 2.0]
        );
    }

    #[test]
    fn test_failing_sample_does_not_stop_others() {
        let intervals = interval_list_metadata();
        let mut collection = SampleMetadataCollection::new();

        register(&mut collection, &intervals, "S1", &[1, 1, 1], None);
        register(&mut collection, &intervals, "S2", &[1, 1, 1], Some(vec![0, 0]));
        register(&mut collection, &intervals, "S3", &[1, 1, 1], Some(vec![2, 2]));

        let names = vec![String::from("S1"), String::from("S2"), String::from("S3")];
        let failures = derive_read_depths(&mut collection, &intervals, &names);

        assert_eq!(failures.len(), 2);
        assert!(matches!(
            failures[0],
            (_, MetadataError::SampleNotFound { .. })
        ));
        assert!(matches!(
            failures[1],
            (_, MetadataError::DegenerateInput { .. })
        ));
        assert!(collection.all_samples_have_read_depth_metadata(&["S3"]));
        assert!(!collection.all_samples_have_read_depth_metadata(&["S1"]));
    }
}
