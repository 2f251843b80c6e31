use clap::{Parser, Subcommand};

use crate::{benchmark::BenchmarkArgs, splice::SpliceArgs};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Cut every occurrence of an enzyme out of each strand and splice in a replacement. Optionally reverse the result."
    )]
    Splice(SpliceArgs),

    #[command(about = "Time cut-and-splice on every strand over a doubling ladder of splicee sizes.")]
    Benchmark(BenchmarkArgs),
}
