//! `cnv-metadata` aggregates and cross-validates the per-sample metadata used
//! by a copy-number variant calling pipeline: interval list structure, raw
//! coverage counts, contig ploidy calls, and the derived global read depth and
//! average ploidy of each sample. This package is composed of both a library
//! crate, as well as a binary crate.
//!
//! The library does not compute coverage or ploidy itself. It indexes,
//! aggregates, and cross-checks values produced by upstream models, and it
//! exposes a [`SampleMetadataCollection`](metadata::SampleMetadataCollection)
//! as the single place downstream cohort-level code fetches them from.
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod commands;
pub mod metadata;
pub mod utils;
