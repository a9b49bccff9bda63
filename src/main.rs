use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use cnv_metadata::commands::check_ploidy::{self, CheckPloidyArgs};
use cnv_metadata::commands::read_depth::{self, ReadDepthArgs};
use git_testament::{git_testament, render_testament};

git_testament!(TESTAMENT);

#[derive(Parser)]
#[command(name = "cnv-metadata", propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    subcommand: Subcommands,

    /// Only errors are printed to the stderr stream.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// All available information, including debug information, is printed to
    /// stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Subcommands {
    /// Checks contig ploidy calls against the human karyotype.
    CheckPloidy(CheckPloidyArgs),

    /// Derives the global read depth and average ploidy of each sample.
    ReadDepth(ReadDepthArgs),
}

fn main() -> anyhow::Result<()> {
    let version = render_testament!(TESTAMENT);
    let matches = Cli::command().version(version).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let mut level = tracing::Level::INFO;
    if cli.quiet {
        level = tracing::Level::ERROR;
    } else if cli.verbose {
        level = tracing::Level::DEBUG;
    }

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.subcommand {
        Subcommands::CheckPloidy(args) => check_ploidy::check_ploidy(args),
        Subcommands::ReadDepth(args) => read_depth::read_depth(args),
    }
}
