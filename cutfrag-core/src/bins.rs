//! Bin bookkeeping for fragment assembly.
//!
//! The assembly walk assigns every position of each strand to a bin. Bins
//! are opened when a strand is cut and merged when two strands that sit in
//! different bins turn out to be paired at a position. Merges are recorded
//! in a union-find so that a position's final bin is resolved once, after
//! the walk, instead of by rewriting counters along the way.

/// Identifier of a bin. Lower ids were opened earlier in the walk.
pub type BinId = usize;

#[derive(Debug, Clone, Default)]
pub struct Bins {
    parent: Vec<BinId>,
}

impl Bins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh bin.
    pub fn open(&mut self) -> BinId {
        let id = self.parent.len();
        self.parent.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The representative of `bin`: the lowest id it has been merged with.
    pub fn find(&mut self, bin: BinId) -> BinId {
        let mut root = bin;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // path compression
        let mut node = bin;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    ///
    /// Merge two bins and return the surviving id, which is always the
    /// smaller of the two representatives.
    ///
    pub fn merge(&mut self, a: BinId, b: BinId) -> BinId {
        let (ra, rb) = (self.find(a), self.find(b));
        let (keep, drop) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[drop] = keep;
        keep
    }

    pub fn same(&mut self, a: BinId, b: BinId) -> bool {
        self.find(a) == self.find(b)
    }
}
