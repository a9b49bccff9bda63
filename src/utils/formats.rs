//! Utilities related to the tab-separated formats read by `cnv-metadata`.
//!
//! All formats share the same layout: an optional block of SAM-style header
//! lines starting with `@`, an optional column header line, and then one
//! tab-separated record per line. Files ending in `.gz` are decompressed on
//! the fly.

pub mod counts;
pub mod intervals;
pub mod ploidy;
pub mod table;
