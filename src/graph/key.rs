//! Vertex keys
//!
//! - `Key`: opaque vertex identifier, with two reserved wildcard values
//! - `KeyGenerator`: per-graph monotonic counter handing out ordinary keys

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier of a vertex within one graph.
///
/// Ordinary keys are assigned from 1 upward. The zero key is never assigned
/// and the two wildcards sit at the top of the value space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u64);

impl Key {
    /// Wildcard endpoint for `Graph::delete_edge`: every edge touching the
    /// other endpoint in that direction.
    pub const ANY: Key = Key(u64::MAX);

    /// Wildcard start for traversals: every vertex in the graph.
    pub const ROOT: Key = Key(u64::MAX - 1);

    pub(crate) const fn new(key: u64) -> Self {
        Self(key)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Key::ANY || *self == Key::ROOT
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic key allocator owned by a single graph.
///
/// Wraparound into the wildcard range is not guarded against.
#[derive(Debug)]
pub struct KeyGenerator {
    last: AtomicU64,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Allocates the next key
    pub fn next_key(&self) -> Key {
        Key(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently allocated key value, 0 when none was handed out
    pub fn last_value(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

impl Clone for KeyGenerator {
    fn clone(&self) -> Self {
        Self {
            last: AtomicU64::new(self.last_value()),
        }
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
