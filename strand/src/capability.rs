use crate::error::Result;

/// Anything that can hand out its content as one contiguous sequence.
///
/// This is the only thing a strand needs from a collaborator in order to
/// append it, so flat buffers, plain strings and other strand
/// implementations all qualify.
pub trait Materialize {
    fn materialize(&self) -> String;
}

impl Materialize for str {
    fn materialize(&self) -> String {
        self.to_string()
    }
}

impl Materialize for String {
    fn materialize(&self) -> String {
        self.clone()
    }
}

/// The operations shared by every DNA strand implementation.
///
/// # Examples
/// ```
/// use strand::{ChainStrand, DnaStrand, Materialize};
///
/// fn splice_twice<S: DnaStrand>(dna: &S) -> S {
///     let once = dna.cut_and_splice("GAATTC", "TT").unwrap();
///     once.cut_and_splice("TT", "A").unwrap()
/// }
///
/// let dna = ChainStrand::new("CGAATTCG");
/// assert_eq!(splice_twice(&dna).materialize(), "CAG");
/// ```
pub trait DnaStrand: Materialize + Sized {
    /// Replaces the whole content with `source`, discarding the old chain.
    fn initialize(&mut self, source: &str);

    /// Number of bases stored.
    fn size(&self) -> usize;

    fn append(&mut self, dna: &str);

    /// Appends any collaborator through its materialized content.
    fn append_strand<M: Materialize + ?Sized>(&mut self, dna: &M) {
        self.append(&dna.materialize());
    }

    /// A new strand holding the character-level reverse of this one.
    fn reverse(&self) -> Self;

    /// A new strand with every non-overlapping `enzyme` replaced by `splicee`.
    fn cut_and_splice(&self, enzyme: &str, splicee: &str) -> Result<Self>;

    fn strand_info(&self) -> String;

    fn get_stats(&self) -> String;
}
