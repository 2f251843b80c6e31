use anyhow::{bail, Context, Result};
use bytesize::ByteSize;
use humantime::format_duration;
use indicatif::HumanDuration;
use log::info;
use std::{path::Path, time::Instant};

use crate::{
    data_load::load_strands,
    processing::{run_splice_trials, splicee_ladder, SpliceTrial},
    utils::prepare_output_path,
};

pub mod args;

pub use args::BenchmarkArgs;

pub fn run_benchmark(args: BenchmarkArgs) -> Result<()> {
    info!(
        "Running ligase 'benchmark' with {} threads",
        &args.threads
    );

    let outpath = prepare_output_path(&args.output, &["tsv"])?;
    let ladder = splicee_ladder(args.min_splicee, args.max_splicee)?;
    info!("Splicee lengths: {:?}", ladder);

    info!("Loading assembly");
    let loading_duration = Instant::now();
    let workspace = load_strands(&args.assembly)
        .with_context(|| format!("Error loading assembly from path: '{}'", args.assembly))?;

    if workspace.is_empty() {
        bail!("No strands are loaded!");
    }
    info!(
        "Loaded {} strands ({}) in {}",
        workspace.len(),
        ByteSize::b(workspace.total_size() as u64),
        format_duration(loading_duration.elapsed())
    );

    info!("Splicing '{}'", args.enzyme);
    let splicing_duration = Instant::now();
    let trials = run_splice_trials(&workspace, &args.enzyme, &ladder, args.threads)?;
    let elapsed = splicing_duration.elapsed();
    info!(
        "Running {} trials took: {} - ({})",
        trials.len(),
        HumanDuration(elapsed),
        format_duration(elapsed)
    );

    write_trials(&outpath, &trials)?;
    info!("Wrote results to {:?}", outpath);
    Ok(())
}

fn write_trials(outpath: &Path, trials: &[SpliceTrial]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(outpath)
        .with_context(|| format!("Failed to create file at: {:?}", outpath))?;

    for trial in trials {
        writer.serialize(trial)?;
    }
    writer.flush()?;
    Ok(())
}
