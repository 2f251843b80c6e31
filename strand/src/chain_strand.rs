use std::fmt::Display;

use ahash::AHashMap;
use log::{debug, trace};

use crate::capability::{DnaStrand, Materialize};
use crate::chunk::{ChunkId, ChunkList};
use crate::error::{Result, StrandError};

const STRAND_INFO: &str = "ChainStrand";

/// Where the sequential cursor stands in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Nothing yielded yet; the head is next.
    Start,
    /// The chunk that was yielded last.
    After(ChunkId),
}

/// A DNA strand stored as a chain of immutable chunks.
///
/// Appending links one new chunk behind the tail and never touches stored
/// fragments, so building a strand from many small pieces costs O(1) per
/// append. Whole-sequence operations (`materialize`, `reverse`,
/// `cut_and_splice`) walk the chain once.
///
/// No validation is performed on the characters stored.
///
/// # Examples
/// ```
/// use strand::ChainStrand;
///
/// let mut dna = ChainStrand::new("GAATTC");
/// dna.append("CGAT");
///
/// assert_eq!(dna.materialize(), "GAATTCCGAT");
/// assert_eq!(dna.size(), 10);
/// assert_eq!(dna.reverse().materialize(), "TAGCCTTAAG");
/// ```
#[derive(Debug, Clone)]
pub struct ChainStrand {
    chunks: ChunkList,
    cursor: Cursor,
    total_length: usize,
    append_count: usize,
}

impl Default for ChainStrand {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for ChainStrand {
    fn from(seed: &str) -> Self {
        Self::new(seed)
    }
}

impl From<String> for ChainStrand {
    fn from(seed: String) -> Self {
        Self::new(seed)
    }
}

impl Display for ChainStrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in self.chunks.fragments() {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl ChainStrand {
    /// Creates a strand holding exactly `seed`.
    pub fn new<S: Into<Box<str>>>(seed: S) -> Self {
        let seed: Box<str> = seed.into();
        let total_length = seed.chars().count();

        Self {
            chunks: ChunkList::new(seed),
            cursor: Cursor::Start,
            total_length,
            append_count: 0,
        }
    }

    /// Discards the current chain and cursor and starts over from `source`.
    pub fn initialize(&mut self, source: &str) {
        *self = Self::new(source);
    }

    /// Number of characters stored.
    pub fn size(&self) -> usize {
        self.total_length
    }

    /// Number of appends since construction.
    pub fn append_count(&self) -> usize {
        self.append_count
    }

    /// Number of chunks in the chain.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Adds `dna` as a new chunk behind the tail.
    pub fn append(&mut self, dna: &str) {
        self.chunks.push(dna);
        self.total_length += dna.chars().count();
        self.append_count += 1;
    }

    /// Appends the materialized content of any collaborator.
    pub fn append_strand<M: Materialize + ?Sized>(&mut self, dna: &M) {
        self.append(&dna.materialize());
    }

    /// Concatenates every fragment in chain order.
    pub fn materialize(&self) -> String {
        let mut sequence = String::with_capacity(self.chunks.byte_len());
        for fragment in self.chunks.fragments() {
            sequence.push_str(fragment);
        }
        sequence
    }

    /// Returns a new strand holding the character-level reverse of this one.
    ///
    /// The chain is snapshotted and visited tail to head. Every fragment is
    /// reversed at most once per call; repeated fragments reuse the cached
    /// reversal.
    pub fn reverse(&self) -> ChainStrand {
        let snapshot: Vec<&str> = self.chunks.fragments().collect();

        let mut reversed_fragments: AHashMap<&str, String> = AHashMap::new();
        let mut reversed = String::with_capacity(self.chunks.byte_len());

        for &fragment in snapshot.iter().rev() {
            let reversed_fragment = reversed_fragments
                .entry(fragment)
                .or_insert_with(|| fragment.chars().rev().collect());
            reversed.push_str(reversed_fragment);
        }

        debug!(
            "Reversed {} chunks ({} distinct fragments)",
            snapshot.len(),
            reversed_fragments.len()
        );

        ChainStrand::new(reversed)
    }

    /// Returns a new strand in which every non-overlapping occurrence of
    /// `enzyme`, scanned left to right, is replaced by `splicee`.
    ///
    /// The splicee is never scanned for further matches. If `enzyme` never
    /// occurs the result is a copy of this strand's content.
    ///
    /// # Errors
    /// `StrandError::InvalidArgument` if `enzyme` is empty.
    ///
    /// # Examples
    /// ```
    /// use strand::ChainStrand;
    ///
    /// let dna = ChainStrand::new("ACGTACGT");
    /// let spliced = dna.cut_and_splice("CG", "-").unwrap();
    /// assert_eq!(spliced.materialize(), "A-TA-T");
    ///
    /// assert!(dna.cut_and_splice("", "-").is_err());
    /// ```
    pub fn cut_and_splice(&self, enzyme: &str, splicee: &str) -> Result<ChainStrand> {
        if enzyme.is_empty() {
            return Err(StrandError::InvalidArgument(
                "enzyme must contain at least one base".to_string(),
            ));
        }

        let source = self.materialize();
        let mut matches = source.match_indices(enzyme);

        let Some((first, _)) = matches.next() else {
            trace!("Enzyme '{}' not found, copying strand", enzyme);
            return Ok(ChainStrand::new(source));
        };

        let mut spliced = ChainStrand::new(&source[..first]);
        spliced.append(splicee);
        let mut start = first + enzyme.len();
        let mut cuts = 1;

        for (pos, _) in matches {
            spliced.append(&source[start..pos]);
            spliced.append(splicee);
            start = pos + enzyme.len();
            cuts += 1;
        }

        if start < source.len() {
            spliced.append(&source[start..]);
        }

        debug!("Spliced {} occurrences of '{}'", cuts, enzyme);
        Ok(spliced)
    }

    /// A label identifying this strand implementation.
    pub fn strand_info(&self) -> String {
        STRAND_INFO.to_string()
    }

    pub fn get_stats(&self) -> String {
        format!("# append calls = {}", self.append_count)
    }

    /// Whether `advance` has another chunk to return.
    pub fn has_more(&self) -> bool {
        match self.cursor {
            Cursor::Start => true,
            Cursor::After(id) => self.chunks.next(id).is_some(),
        }
    }

    /// Returns the fragment under the cursor and moves past it.
    ///
    /// Chunks appended after the cursor reached the end are picked up by
    /// later calls.
    ///
    /// # Errors
    /// `StrandError::EndOfSequence` if every chunk has been returned. The
    /// cursor does not move in that case.
    pub fn advance(&mut self) -> Result<&str> {
        let id = match self.cursor {
            Cursor::Start => self.chunks.head(),
            Cursor::After(id) => self.chunks.next(id).ok_or(StrandError::EndOfSequence)?,
        };
        self.cursor = Cursor::After(id);
        Ok(self.chunks.fragment(id))
    }

    /// Moves the cursor back to the head of the chain.
    pub fn rewind(&mut self) {
        self.cursor = Cursor::Start;
    }
}

impl Materialize for ChainStrand {
    fn materialize(&self) -> String {
        ChainStrand::materialize(self)
    }
}

impl DnaStrand for ChainStrand {
    fn initialize(&mut self, source: &str) {
        ChainStrand::initialize(self, source)
    }

    fn size(&self) -> usize {
        ChainStrand::size(self)
    }

    fn append(&mut self, dna: &str) {
        ChainStrand::append(self, dna)
    }

    fn reverse(&self) -> Self {
        ChainStrand::reverse(self)
    }

    fn cut_and_splice(&self, enzyme: &str, splicee: &str) -> Result<Self> {
        ChainStrand::cut_and_splice(self, enzyme, splicee)
    }

    fn strand_info(&self) -> String {
        ChainStrand::strand_info(self)
    }

    fn get_stats(&self) -> String {
        ChainStrand::get_stats(self)
    }
}
