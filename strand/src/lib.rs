//! Linked-chunk DNA strands.
//!
//! [`ChainStrand`] stores a strand as a chain of immutable text chunks so that
//! repeated appends never copy what is already stored. The [`DnaStrand`]
//! trait is the operation set shared with other strand implementations, and
//! [`Materialize`] is the only capability a collaborator needs to be appended.

mod capability;
mod chain_strand;
mod chunk;
pub mod error;

pub use capability::{DnaStrand, Materialize};
pub use chain_strand::ChainStrand;
pub use error::StrandError;
