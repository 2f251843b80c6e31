/// Position of a chunk inside a [`ChunkList`] arena.
pub(crate) type ChunkId = usize;

const HEAD: ChunkId = 0;

/// One immutable fragment of a strand plus the link to the chunk after it.
#[derive(Debug, Clone)]
pub(crate) struct Chunk {
    fragment: Box<str>,
    next: Option<ChunkId>,
}

impl Chunk {
    fn new(fragment: Box<str>) -> Self {
        Self {
            fragment,
            next: None,
        }
    }
}

/// Singly-linked chain of chunks stored in an arena.
///
/// Chunks are never moved or rewritten once pushed; the only mutation is
/// linking a new chunk behind the current tail. The head always exists, so a
/// chain is never empty.
#[derive(Debug, Clone)]
pub(crate) struct ChunkList {
    chunks: Vec<Chunk>,
    tail: ChunkId,
    byte_len: usize,
}

impl ChunkList {
    pub fn new<S: Into<Box<str>>>(seed: S) -> Self {
        let seed = seed.into();
        let byte_len = seed.len();

        Self {
            chunks: vec![Chunk::new(seed)],
            tail: HEAD,
            byte_len,
        }
    }

    /// Links `fragment` behind the tail without visiting any earlier chunk.
    pub fn push(&mut self, fragment: &str) -> ChunkId {
        let id = self.chunks.len();
        self.chunks.push(Chunk::new(fragment.into()));
        self.chunks[self.tail].next = Some(id);
        self.tail = id;
        self.byte_len += fragment.len();
        id
    }

    pub fn head(&self) -> ChunkId {
        HEAD
    }

    pub fn fragment(&self, id: ChunkId) -> &str {
        &self.chunks[id].fragment
    }

    pub fn next(&self, id: ChunkId) -> Option<ChunkId> {
        self.chunks[id].next
    }

    /// Number of chunks in the chain, head included.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Total number of bytes over all fragments.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Walks the links from the head.
    pub fn fragments(&self) -> Fragments<'_> {
        Fragments {
            list: self,
            next: Some(HEAD),
        }
    }
}

/// Borrowing iterator over the fragments of a [`ChunkList`] in chain order.
pub(crate) struct Fragments<'a> {
    list: &'a ChunkList,
    next: Option<ChunkId>,
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.list.next(id);
        Some(self.list.fragment(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_has_single_head() {
        let list = ChunkList::new("GATC");

        assert_eq!(list.len(), 1);
        assert_eq!(list.fragment(list.head()), "GATC");
        assert_eq!(list.next(list.head()), None);
        assert_eq!(list.byte_len(), 4);
    }

    #[test]
    fn test_push_links_behind_tail() {
        let mut list = ChunkList::new("");
        let first = list.push("AC");
        let second = list.push("GT");

        assert_eq!(list.next(list.head()), Some(first));
        assert_eq!(list.next(first), Some(second));
        assert_eq!(list.next(second), None);
        assert_eq!(list.byte_len(), 4);
    }

    #[test]
    fn test_fragments_follow_chain_order() {
        let mut list = ChunkList::new("A");
        list.push("");
        list.push("CG");
        list.push("T");

        let fragments: Vec<&str> = list.fragments().collect();
        assert_eq!(fragments, vec!["A", "", "CG", "T"]);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut original = ChunkList::new("AA");
        let mut copy = original.clone();

        copy.push("TT");
        original.push("CC");

        assert_eq!(original.fragments().collect::<String>(), "AACC");
        assert_eq!(copy.fragments().collect::<String>(), "AATT");
    }
}
