//! Subcommands of the `cnv-metadata` command line tool.

pub mod check_ploidy;
pub mod read_depth;
