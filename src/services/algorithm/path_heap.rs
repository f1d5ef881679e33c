//! 搜索路径与优先队列
//!
//! Frontier structures for path search. A `SearchPath` is never mutated once
//! built: extending it yields a new path, so paths sharing a prefix can sit in
//! the heap side by side.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Key, Path};

/// A candidate path in the search frontier
#[derive(Debug, Clone)]
pub struct SearchPath {
    pub cost: i64,
    pub vertices: Vec<Key>,
}

impl SearchPath {
    /// The zero-cost path holding only `start`
    pub fn start(start: Key) -> Self {
        Self {
            cost: 0,
            vertices: vec![start],
        }
    }

    /// Returns a copy of this path with `vertex` appended and `cost` added.
    pub fn extend(&self, cost: i64, vertex: Key) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(vertex);

        Self {
            cost: self.cost.saturating_add(cost),
            vertices,
        }
    }

    pub fn last(&self) -> Option<Key> {
        self.vertices.last().copied()
    }
}

impl From<SearchPath> for Path {
    fn from(path: SearchPath) -> Self {
        if path.vertices.is_empty() {
            return Path::default();
        }

        Path {
            cost: path.cost,
            vertices: path.vertices,
        }
    }
}

// Paths compare by cost alone; the vertex sequence does not take part.
impl PartialEq for SearchPath {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for SearchPath {}

impl Ord for SearchPath {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：cost 小的优先
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for SearchPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of search paths by cumulative cost. Ties pop in no particular
/// order.
#[derive(Debug, Default)]
pub struct PathHeap {
    paths: BinaryHeap<SearchPath>,
}

impl PathHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heap seeded with `paths`
    pub fn with_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = SearchPath>,
    {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn push(&mut self, path: SearchPath) {
        self.paths.push(path);
    }

    /// Removes and returns the cheapest path
    pub fn pop(&mut self) -> Option<SearchPath> {
        self.paths.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u64) -> Key {
        Key::new(n)
    }

    #[test]
    fn test_extend_leaves_original_untouched() {
        let base = SearchPath::start(key(1));
        let left = base.extend(3, key(2));
        let right = base.extend(5, key(3));

        assert_eq!(base.vertices, vec![key(1)]);
        assert_eq!(base.cost, 0);
        assert_eq!(left.vertices, vec![key(1), key(2)]);
        assert_eq!(left.cost, 3);
        assert_eq!(right.vertices, vec![key(1), key(3)]);
        assert_eq!(right.last(), Some(key(3)));
    }

    #[test]
    fn test_extend_saturates() {
        let path = SearchPath::start(key(1)).extend(i64::MAX, key(2));
        assert_eq!(path.extend(1, key(3)).cost, i64::MAX);
    }

    #[test]
    fn test_heap_pops_cheapest_first() {
        let base = SearchPath::start(key(1));
        let mut heap = PathHeap::with_paths([
            base.extend(7, key(2)),
            base.extend(2, key(3)),
            base.extend(4, key(4)),
        ]);
        heap.push(base.clone());

        let costs: Vec<i64> = std::iter::from_fn(|| heap.pop().map(|p| p.cost)).collect();
        assert_eq!(costs, vec![0, 2, 4, 7]);
        assert!(heap.is_empty());
        assert!(heap.pop().is_none());
    }

    #[test]
    fn test_into_public_path() {
        let path: Path = SearchPath::start(key(4)).extend(2, key(5)).into();
        assert_eq!(path.cost, 2);
        assert_eq!(path.vertices, vec![key(4), key(5)]);

        let empty: Path = SearchPath {
            cost: 9,
            vertices: Vec::new(),
        }
        .into();
        assert!(empty.is_empty());
        assert_eq!(empty.cost, 0);
    }
}
