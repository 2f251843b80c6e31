use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::{fmt::Write, time::Instant};
use strand::DnaStrand;

use crate::data::StrandWorkspace;

/// One timed cut-and-splice run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpliceTrial {
    pub strand_info: String,
    pub record: String,
    pub splicee_length: usize,
    pub size: usize,
    pub stats: String,
    pub seconds: f64,
}

/// Splicee lengths from `min` doubling up to and including `max`.
pub fn splicee_ladder(min: usize, max: usize) -> Result<Vec<usize>> {
    if min == 0 {
        bail!("Smallest splicee length must be at least 1");
    }
    if min > max {
        bail!(
            "Smallest splicee length ({}) is larger than the largest ({})",
            min,
            max
        );
    }

    let mut sizes = Vec::new();
    let mut size = min;
    while size <= max {
        sizes.push(size);
        match size.checked_mul(2) {
            Some(next) => size = next,
            None => break,
        }
    }
    Ok(sizes)
}

/// Times a single `cut_and_splice` of `enzyme` by `splicee` on `strand`.
pub fn time_cut_and_splice<S: DnaStrand>(
    record: &str,
    strand: &S,
    enzyme: &str,
    splicee: &str,
) -> Result<SpliceTrial> {
    let start = Instant::now();
    let spliced = strand
        .cut_and_splice(enzyme, splicee)
        .with_context(|| format!("Failed to splice record '{}'", record))?;
    let seconds = start.elapsed().as_secs_f64();

    Ok(SpliceTrial {
        strand_info: spliced.strand_info(),
        record: record.to_string(),
        splicee_length: splicee.len(),
        size: spliced.size(),
        stats: spliced.get_stats(),
        seconds,
    })
}

/// Runs every record against every splicee length in `ladder`.
///
/// Trials are independent: each one splices into a freshly built strand, so
/// they are spread over a pool of `num_threads` workers.
pub fn run_splice_trials(
    workspace: &StrandWorkspace,
    enzyme: &str,
    ladder: &[usize],
    num_threads: usize,
) -> Result<Vec<SpliceTrial>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Could not initialize threadpool")?;

    let splicees: Vec<String> = ladder.iter().map(|&len| "T".repeat(len)).collect();

    let tasks: Vec<(usize, &String)> = (0..workspace.len())
        .flat_map(|i| splicees.iter().map(move |splicee| (i, splicee)))
        .collect();

    let pb = ProgressBar::new(tasks.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
        )
        .context("Invalid progress bar template")?
        .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("#>-"),
    );

    let records = workspace.records();
    let mut trials: Vec<SpliceTrial> = pool.install(|| {
        tasks
            .par_iter()
            .map(|&(i, splicee)| {
                let record = &records[i];
                let trial = time_cut_and_splice(&record.id, &record.strand, enzyme, splicee);
                pb.inc(1);
                trial
            })
            .collect::<Result<Vec<_>>>()
    })?;

    pb.finish_with_message("Finished all trials.");

    trials.sort_by(|a, b| {
        a.record
            .cmp(&b.record)
            .then(a.splicee_length.cmp(&b.splicee_length))
    });
    debug!("Collected {} trials", trials.len());

    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::SequenceRecord;
    use strand::ChainStrand;

    #[test]
    fn test_splicee_ladder() -> Result<()> {
        assert_eq!(splicee_ladder(2, 16)?, vec![2, 4, 8, 16]);
        assert_eq!(splicee_ladder(3, 20)?, vec![3, 6, 12]);
        assert_eq!(splicee_ladder(5, 5)?, vec![5]);
        Ok(())
    }

    #[test]
    fn test_splicee_ladder_invalid() {
        assert!(splicee_ladder(0, 16).is_err());
        assert_eq!(
            splicee_ladder(8, 4).unwrap_err().to_string(),
            "Smallest splicee length (8) is larger than the largest (4)"
        );
    }

    #[test]
    fn test_time_cut_and_splice() -> Result<()> {
        let strand = ChainStrand::new("GGAATTCCATGAATTCAA");

        let trial = time_cut_and_splice("plasmid_1", &strand, "GAATTC", "TTTT")?;

        assert_eq!(trial.strand_info, "ChainStrand");
        assert_eq!(trial.record, "plasmid_1");
        assert_eq!(trial.splicee_length, 4);
        assert_eq!(trial.size, 14);
        assert_eq!(trial.stats, "# append calls = 4");
        assert!(trial.seconds >= 0.0);
        Ok(())
    }

    #[test]
    fn test_time_cut_and_splice_empty_enzyme() {
        let strand = ChainStrand::new("GATC");
        let result = time_cut_and_splice("contig_1", &strand, "", "T");
        assert!(result.is_err());
    }

    #[test]
    fn test_run_splice_trials() -> Result<()> {
        let mut workspace = StrandWorkspace::new();
        workspace.add_record(SequenceRecord::new(
            "b".to_string(),
            ChainStrand::new("ACGTACGT"),
        ))?;
        workspace.add_record(SequenceRecord::new(
            "a".to_string(),
            ChainStrand::new("CGCG"),
        ))?;

        let trials = run_splice_trials(&workspace, "CG", &[1, 2], 2)?;

        let summary: Vec<(&str, usize, usize)> = trials
            .iter()
            .map(|t| (t.record.as_str(), t.splicee_length, t.size))
            .collect();
        assert_eq!(
            summary,
            vec![("a", 1, 2), ("a", 2, 4), ("b", 1, 6), ("b", 2, 8)]
        );
        Ok(())
    }
}
