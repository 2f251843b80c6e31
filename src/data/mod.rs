pub mod record;

use ahash::AHashMap;
use anyhow::{bail, Result};

use record::SequenceRecord;

/// Strands loaded from an assembly, kept in file order and indexed by id.
pub struct StrandWorkspace {
    records: Vec<SequenceRecord>,
    index: AHashMap<String, usize>,
}

impl StrandWorkspace {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: AHashMap::new(),
        }
    }

    pub fn add_record(&mut self, record: SequenceRecord) -> Result<()> {
        if self.index.contains_key(&record.id) {
            bail!("Key error: '{}' already inserted", &record.id)
        }

        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&SequenceRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bases stored over all strands.
    pub fn total_size(&self) -> usize {
        self.records.iter().map(|r| r.strand.size()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand::ChainStrand;

    #[test]
    fn test_add_and_get_record() -> Result<()> {
        let mut workspace = StrandWorkspace::new();
        workspace.add_record(SequenceRecord::new(
            "plasmid_2".to_string(),
            ChainStrand::new("GATC"),
        ))?;
        workspace.add_record(SequenceRecord::new(
            "plasmid_1".to_string(),
            ChainStrand::new("CC"),
        ))?;

        assert_eq!(workspace.len(), 2);
        assert_eq!(workspace.total_size(), 6);
        assert_eq!(
            workspace.get("plasmid_1").map(|r| r.strand.materialize()),
            Some("CC".to_string())
        );
        assert!(workspace.get("plasmid_3").is_none());

        let ids: Vec<&str> = workspace.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["plasmid_2", "plasmid_1"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_record() {
        let mut workspace = StrandWorkspace::new();
        workspace
            .add_record(SequenceRecord::new("contig_1".to_string(), ChainStrand::new("A")))
            .unwrap();

        let result =
            workspace.add_record(SequenceRecord::new("contig_1".to_string(), ChainStrand::new("T")));

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Key error: 'contig_1' already inserted"
        );
        assert_eq!(workspace.len(), 1);
    }
}
