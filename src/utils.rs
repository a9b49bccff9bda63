//! Utilities that are used across the `cnv-metadata` subcommands.

pub mod formats;
pub mod genome;
