use strand::ChainStrand;

pub struct SequenceRecord {
    pub id: String,
    pub strand: ChainStrand,
}

impl SequenceRecord {
    pub fn new(id: String, strand: ChainStrand) -> Self {
        Self { id, strand }
    }
}
