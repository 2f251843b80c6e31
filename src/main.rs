use anyhow::Result;
use clap::Parser;
use log::info;

mod argparser;
mod benchmark;
mod data;
mod data_load;
mod processing;
mod splice;
mod utils;

use argparser::{Args, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Commands::Splice(splice_args) => splice::splice_strands(splice_args)?,
        Commands::Benchmark(benchmark_args) => benchmark::run_benchmark(benchmark_args)?,
    }

    info!("Done");
    Ok(())
}
