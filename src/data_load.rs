use anyhow::{Context, Result};
use seq_io::fasta::{Reader, Record};
use std::path::Path;
use strand::ChainStrand;

use crate::data::{record::SequenceRecord, StrandWorkspace};

/// Reads every FASTA record into its own strand.
///
/// Each sequence line becomes one appended chunk, so a wrapped FASTA record
/// is loaded without ever re-copying the lines already read.
pub fn load_strands<P: AsRef<Path>>(path: P) -> Result<StrandWorkspace> {
    let mut fasta_reader = Reader::from_path(&path)
        .with_context(|| format!("Failed to open FASTA at: {:?}", path.as_ref()))?;

    let mut workspace = StrandWorkspace::new();

    while let Some(record_result) = fasta_reader.next() {
        let record = record_result.with_context(|| "Error reading record from FASTA file.")?;

        let id = record
            .id()
            .map(String::from)
            .with_context(|| "Error extracing record ID")?;

        let mut strand = ChainStrand::default();
        for line in record.seq_lines() {
            let line = std::str::from_utf8(line)
                .with_context(|| format!("Invalid UTF8 character in FASTA record: '{}'", id))?;
            strand.append(line);
        }

        workspace.add_record(SequenceRecord::new(id, strand))?;
    }
    Ok(workspace)
}
