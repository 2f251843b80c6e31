use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
};
use strand::ChainStrand;

use crate::{data_load::load_strands, utils::prepare_output_path};

pub mod args;

pub use args::SpliceArgs;

pub fn splice_strands(args: SpliceArgs) -> Result<()> {
    info!("Running ligase 'splice'");

    let outpath = prepare_output_path(&args.output, &["fasta", "fa"])?;

    if args.enzyme.is_none() && !args.reverse {
        bail!("Nothing to do. Supply an enzyme, --reverse or both.");
    }

    info!("Loading assembly");
    let workspace = load_strands(&args.assembly)
        .with_context(|| format!("Error loading assembly from path: '{}'", args.assembly))?;

    if workspace.is_empty() {
        bail!("No strands are loaded!");
    }
    info!("Total strands in assembly: {}", workspace.len());

    let outfile =
        File::create(&outpath).with_context(|| format!("Failed to create file at: {:?}", outpath))?;
    let mut writer = BufWriter::new(outfile);

    for record in workspace.records() {
        let transformed = transform_strand(
            &record.strand,
            args.enzyme.as_deref(),
            &args.splicee,
            args.reverse,
        )
        .with_context(|| format!("Failed to transform strand '{}'", record.id))?;

        debug!(
            "{}: {} -> {} bases ({})",
            record.id,
            record.strand.size(),
            transformed.size(),
            transformed.get_stats()
        );

        write_fasta_record(&mut writer, &record.id, &transformed)?;
    }
    writer.flush()?;

    info!("Wrote {} strands to {:?}", workspace.len(), outpath);
    Ok(())
}

/// Cuts and splices `strand` when an enzyme is given, then reverses when asked.
pub fn transform_strand(
    strand: &ChainStrand,
    enzyme: Option<&str>,
    splicee: &str,
    reverse: bool,
) -> Result<ChainStrand> {
    let spliced = match enzyme {
        Some(enzyme) => strand.cut_and_splice(enzyme, splicee)?,
        None => strand.clone(),
    };

    if reverse {
        Ok(spliced.reverse())
    } else {
        Ok(spliced)
    }
}

fn write_fasta_record<W: Write>(writer: &mut W, id: &str, strand: &ChainStrand) -> Result<()> {
    writeln!(writer, ">{}", id)?;
    writeln!(writer, "{}", strand)?;
    Ok(())
}
