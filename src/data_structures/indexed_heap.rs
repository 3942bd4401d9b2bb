use std::fmt::Debug;

use crate::{Error, Result};

/// An index-addressable binary min-heap over (score, vertex) entries.
///
/// Vertices are dense `usize` identifiers. A vertex -> heap-slot map makes
/// decrease-key an in-place sift instead of the usual remove-and-reinsert,
/// so no tombstones accumulate and `current_score` is an O(1) lookup.
#[derive(Debug)]
pub struct IndexedHeap<P>
where
    P: PartialOrd + Copy + Debug + Ord,
{
    /// Heap-ordered (score, vertex) entries
    entries: Vec<(P, usize)>,

    /// Position of each vertex's live entry in `entries`, `None` once popped
    /// or never inserted
    slots: Vec<Option<usize>>,
}

impl<P> IndexedHeap<P>
where
    P: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedHeap {
            entries: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Creates a heap sized for vertices `0..vertices`
    pub fn with_capacity(vertices: usize) -> Self {
        IndexedHeap {
            entries: Vec::with_capacity(vertices),
            slots: vec![None; vertices],
        }
    }

    /// Returns true if no live entries remain
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vertex currently has a live entry
    pub fn contains(&self, vertex: usize) -> bool {
        self.slots.get(vertex).map_or(false, |slot| slot.is_some())
    }

    /// Inserts a vertex with the given score, or updates its score in place
    /// if it is already tracked. O(log n) either way.
    pub fn insert_or_update(&mut self, vertex: usize, score: P) {
        if vertex >= self.slots.len() {
            self.slots.resize(vertex + 1, None);
        }

        match self.slots[vertex] {
            Some(pos) => {
                let old = self.entries[pos].0;
                self.entries[pos].0 = score;
                if score < old {
                    self.sift_up(pos);
                } else {
                    self.sift_down(pos);
                }
            }
            None => {
                self.entries.push((score, vertex));
                let pos = self.entries.len() - 1;
                self.slots[vertex] = Some(pos);
                self.sift_up(pos);
            }
        }
    }

    /// Returns the tracked score of a vertex without removing it. O(1).
    ///
    /// Fails with [`Error::NotTracked`] if the vertex has already been
    /// popped or was never inserted.
    pub fn current_score(&self, vertex: usize) -> Result<P> {
        let pos = self
            .slots
            .get(vertex)
            .copied()
            .flatten()
            .ok_or(Error::NotTracked(vertex))?;
        Ok(self.entries[pos].0)
    }

    /// Removes and returns the (score, vertex) entry with the lowest score.
    ///
    /// Fails with [`Error::EmptyQueue`] if no live entries remain.
    pub fn pop_min(&mut self) -> Result<(P, usize)> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        let (score, vertex) = self.entries.pop().ok_or(Error::EmptyQueue)?;
        self.slots[vertex] = None;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok((score, vertex))
    }

    /// Returns the minimum (score, vertex) entry without removing it
    pub fn peek_min(&self) -> Option<(P, usize)> {
        self.entries.first().copied()
    }

    /// Swaps two heap slots and keeps the vertex -> slot map consistent
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.slots[self.entries[a].1] = Some(a);
        self.slots[self.entries[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].0 >= self.entries[parent].0 {
                break;
            }
            self.swap_entries(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap_entries(pos, smallest);
            pos = smallest;
        }
    }
}

impl<P> Default for IndexedHeap<P>
where
    P: PartialOrd + Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
