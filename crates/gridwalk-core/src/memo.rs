//! Memoization keyed on structural equality.

use indexmap::IndexMap;
use std::hash::Hash;

/// A result cache keyed on a hashable composite key.
///
/// The key is the argument tuple itself (or a struct of the arguments), so
/// equality is structural and there is no textual encoding step that could
/// drift when fields are reordered.
///
/// [`get_or_insert_with`](Self::get_or_insert_with) hands the cache to the
/// compute closure, which lets a recursive function memoize its own
/// sub-calls:
///
/// ```
/// use gridwalk_core::Memo;
///
/// fn fib(n: u64, memo: &mut Memo<u64, u64>) -> u64 {
///     if n < 2 {
///         return n;
///     }
///     memo.get_or_insert_with(n, |memo| fib(n - 1, memo) + fib(n - 2, memo))
/// }
///
/// let mut memo = Memo::new();
/// assert_eq!(fib(80, &mut memo), 23_416_728_348_467_685);
/// assert_eq!(memo.len(), 79);
/// ```
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    results: IndexMap<K, V>,
    lookups: Option<IndexMap<K, u64>>,
}

impl<K: Hash + Eq + Clone, V: Clone> Memo<K, V> {
    /// An empty cache that does not count lookups.
    pub fn new() -> Self {
        Self {
            results: IndexMap::new(),
            lookups: None,
        }
    }

    /// An empty cache that records how many times each key is requested.
    pub fn with_counts() -> Self {
        Self {
            results: IndexMap::new(),
            lookups: Some(IndexMap::new()),
        }
    }

    /// Return the cached value for `key`, computing and storing it first
    /// if absent. `compute` receives the cache so it can recurse.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce(&mut Self) -> V) -> V {
        if let Some(counts) = self.lookups.as_mut() {
            *counts.entry(key.clone()).or_insert(0) += 1;
        }
        if let Some(value) = self.results.get(&key) {
            return value.clone();
        }
        let value = compute(self);
        self.results.insert(key, value.clone());
        value
    }

    /// The cached value for `key`, if any. Does not count as a lookup.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.results.get(key)
    }

    /// Store a value directly, returning the previous one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.results.insert(key, value)
    }

    /// How many times `key` was requested through
    /// [`get_or_insert_with`](Self::get_or_insert_with). Always `0` for a
    /// cache built with [`new`](Self::new).
    pub fn lookups(&self, key: &K) -> u64 {
        self.lookups
            .as_ref()
            .and_then(|counts| counts.get(key).copied())
            .unwrap_or(0)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drop every cached result and lookup count.
    pub fn clear(&mut self) {
        self.results.clear();
        if let Some(counts) = self.lookups.as_mut() {
            counts.clear();
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Arrangement {
        pattern: String,
        groups: Vec<usize>,
    }

    #[test]
    fn computes_each_key_once() {
        let mut memo: Memo<(u32, u32), u32> = Memo::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = memo.get_or_insert_with((2, 3), |_| {
                calls += 1;
                2 * 3
            });
            assert_eq!(v, 6);
        }
        assert_eq!(calls, 1);
        assert_eq!(memo.get(&(2, 3)), Some(&6));
    }

    #[test]
    fn composite_keys_compare_structurally() {
        let mut memo = Memo::with_counts();
        let key = Arrangement {
            pattern: "??".into(),
            groups: vec![1],
        };
        memo.get_or_insert_with(key.clone(), |_| 2u64);
        let same = Arrangement {
            pattern: String::from("??"),
            groups: vec![1],
        };
        assert_eq!(memo.get_or_insert_with(same, |_| unreachable!()), 2);
        assert_eq!(memo.lookups(&key), 2);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn counting_is_opt_in() {
        let mut memo: Memo<u8, u8> = Memo::new();
        memo.get_or_insert_with(1, |_| 1);
        memo.get_or_insert_with(1, |_| 1);
        assert_eq!(memo.lookups(&1), 0);
    }

    #[test]
    fn recursive_grid_paths() {
        // Lattice paths from (r, c) to (0, 0) moving only up or left.
        fn paths(r: u32, c: u32, memo: &mut Memo<(u32, u32), u64>) -> u64 {
            if r == 0 || c == 0 {
                return 1;
            }
            memo.get_or_insert_with((r, c), |memo| paths(r - 1, c, memo) + paths(r, c - 1, memo))
        }
        let mut memo = Memo::new();
        assert_eq!(paths(16, 16, &mut memo), 601_080_390);
        assert_eq!(memo.len(), 16 * 16);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut memo = Memo::with_counts();
        memo.get_or_insert_with("a", |_| 1);
        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.lookups(&"a"), 0);
    }
}
