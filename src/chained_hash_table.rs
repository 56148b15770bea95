//! Hash table whose buckets are splay trees.

use crate::error::Result;
use crate::hash_code::HashCode;
use crate::splay_tree::SplayTree;
use crate::DEFAULT_BUCKET_COUNT;

/// A hash table that resolves collisions by chaining into per-bucket splay trees.
///
/// A key is routed to bucket `key mod bucket_count` and every operation is delegated to that
/// bucket's `SplayTree`, so recently accessed keys in a crowded bucket stay cheap to reach. The
/// bucket count is fixed when the table is constructed.
///
/// # Examples
///
/// ```
/// use splay_collections::{ChainedHashTable, Error};
///
/// let mut table = ChainedHashTable::with_bucket_count(3);
/// table.insert(1, "one").unwrap();
/// table.insert(4, "four").unwrap();
///
/// assert_eq!(table.hash_code(&4), 1);
/// assert_eq!(table.peek(&4), Ok(&"four"));
/// assert_eq!(table.insert(1, "uno"), Err(Error::DuplicateKey));
///
/// assert_eq!(table.extract(&1), Ok("one"));
/// assert_eq!(table.len(), 1);
/// ```
pub struct ChainedHashTable<K, V> {
    buckets: Vec<SplayTree<K, V>>,
    len: usize,
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Ord + HashCode,
{
    /// Constructs a new, empty `ChainedHashTable<K, V>` with a single bucket.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Constructs a new, empty `ChainedHashTable<K, V>` with `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ChainedHashTable;
    ///
    /// let table: ChainedHashTable<u32, u32> = ChainedHashTable::with_bucket_count(16);
    /// assert_eq!(table.bucket_count(), 16);
    /// ```
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "Error: bucket count must be positive.");
        ChainedHashTable {
            buckets: (0..bucket_count).map(|_| SplayTree::new()).collect(),
            len: 0,
        }
    }

    /// Returns the index of the bucket that `key` belongs to.
    pub fn hash_code(&self, key: &K) -> usize {
        key.hash_code(self.buckets.len())
    }

    /// Inserts a key-value pair into its bucket. Returns `Error::DuplicateKey` if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{ChainedHashTable, Error};
    ///
    /// let mut table = ChainedHashTable::new();
    /// assert_eq!(table.insert(1, 1), Ok(()));
    /// assert_eq!(table.insert(1, 2), Err(Error::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        let index = self.hash_code(&key);
        self.buckets[index].insert(key, value)?;
        self.len += 1;
        Ok(())
    }

    /// Returns an immutable reference to the value associated with a particular key, splaying it
    /// to the root of its bucket. Returns `Error::NonexistentKey` if the key does not exist.
    pub fn peek(&mut self, key: &K) -> Result<&V> {
        let index = self.hash_code(key);
        self.buckets[index].peek(key)
    }

    /// Returns a mutable reference to the value associated with a particular key, splaying it to
    /// the root of its bucket. Returns `Error::NonexistentKey` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ChainedHashTable;
    ///
    /// let mut table = ChainedHashTable::new();
    /// table.insert(1, 1).unwrap();
    /// *table.peek_mut(&1).unwrap() += 1;
    /// assert_eq!(table.peek(&1), Ok(&2));
    /// ```
    pub fn peek_mut(&mut self, key: &K) -> Result<&mut V> {
        let index = self.hash_code(key);
        self.buckets[index].peek_mut(key)
    }

    /// Removes a key from the table and returns its value. Returns `Error::NonexistentKey` if
    /// the key does not exist.
    pub fn extract(&mut self, key: &K) -> Result<V> {
        let index = self.hash_code(key);
        let value = self.buckets[index].extract(key)?;
        self.len -= 1;
        Ok(value)
    }

    /// Checks if a key exists in the table without splaying its bucket.
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets[self.hash_code(key)].contains_key(key)
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the buckets of the table, indexed by hash code.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ChainedHashTable;
    ///
    /// let mut table = ChainedHashTable::with_bucket_count(2);
    /// table.insert(1, 1).unwrap();
    /// table.insert(3, 3).unwrap();
    /// assert!(table.buckets()[0].is_empty());
    /// assert_eq!(table.buckets()[1].len(), 2);
    /// ```
    pub fn buckets(&self) -> &[SplayTree<K, V>] {
        &self.buckets
    }

    /// Clears the table, removing all values. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }
}

impl<K, V> Default for ChainedHashTable<K, V>
where
    K: Ord + HashCode,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ChainedHashTable;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn bucket_len_sum<V>(table: &ChainedHashTable<i32, V>) -> usize {
        table.buckets().iter().map(|bucket| bucket.len()).sum()
    }

    #[test]
    fn test_new() {
        let table: ChainedHashTable<u32, u32> = ChainedHashTable::new();
        assert_eq!(table.bucket_count(), 1);
        assert!(table.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_zero_buckets() {
        let _table: ChainedHashTable<u32, u32> = ChainedHashTable::with_bucket_count(0);
    }

    #[test]
    fn test_colliding_keys() {
        let mut table = ChainedHashTable::with_bucket_count(3);
        for key in &[1, 4, 7] {
            table.insert(*key, key * 100).unwrap();
        }
        assert_eq!(table.buckets()[1].len(), 3);
        assert_eq!(table.len(), 3);

        for key in &[1, 4, 7] {
            assert_eq!(table.peek(key), Ok(&(key * 100)));
            assert_eq!(table.buckets()[1].root_key(), Some(key));
        }

        assert_eq!(table.extract(&4), Ok(400));
        assert_eq!(table.peek(&1), Ok(&100));
        assert_eq!(table.peek(&7), Ok(&700));
        assert_eq!(table.peek(&4), Err(Error::NonexistentKey));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut table = ChainedHashTable::with_bucket_count(4);
        table.insert(2, 2).unwrap();
        assert_eq!(table.insert(2, 3), Err(Error::DuplicateKey));
        assert_eq!(table.len(), 1);
        assert_eq!(table.peek(&2), Ok(&2));
    }

    #[test]
    fn test_extract_nonexistent() {
        let mut table = ChainedHashTable::with_bucket_count(4);
        table.insert(2, 2).unwrap();
        assert_eq!(table.extract(&6), Err(Error::NonexistentKey));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_negative_keys() {
        let mut table = ChainedHashTable::with_bucket_count(3);
        table.insert(-1, "a").unwrap();
        table.insert(2, "b").unwrap();
        assert_eq!(table.hash_code(&-1), 2);
        assert_eq!(table.buckets()[2].len(), 2);
        assert_eq!(table.extract(&-1), Ok("a"));
    }

    #[test]
    fn test_clear() {
        let mut table = ChainedHashTable::with_bucket_count(2);
        table.insert(1, 1).unwrap();
        table.insert(2, 2).unwrap();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.bucket_count(), 2);
        assert!(!table.contains_key(&1));
        assert_eq!(bucket_len_sum(&table), 0);
    }

    proptest! {
        #[test]
        fn matches_btreemap(
            bucket_count in 1usize..8,
            ops in proptest::collection::vec((any::<bool>(), -50i32..50, any::<u32>()), 0..300),
        ) {
            let mut table = ChainedHashTable::with_bucket_count(bucket_count);
            let mut expected = BTreeMap::new();
            for (is_insert, key, value) in ops {
                if is_insert {
                    let result = table.insert(key, value);
                    if expected.contains_key(&key) {
                        prop_assert_eq!(result, Err(Error::DuplicateKey));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        expected.insert(key, value);
                    }
                } else {
                    prop_assert_eq!(table.extract(&key).ok(), expected.remove(&key));
                }
                prop_assert_eq!(table.len(), expected.len());
                prop_assert_eq!(bucket_len_sum(&table), expected.len());
            }
            for (key, value) in &expected {
                prop_assert_eq!(table.peek(key), Ok(value));
            }
        }
    }
}
