//! Open addressing hash table with linear probing.

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::hash_code::HashCode;
use crate::DEFAULT_BUCKET_COUNT;
use log::{debug, trace};
use std::mem;

/// A hash table that stores entries in a flat array of slots and resolves collisions with linear
/// probing.
///
/// A key's probe sequence starts at its home slot, `key mod bucket_count`, and advances one slot
/// at a time, wrapping around at the end of the array. When an insertion finds no empty slot in a
/// full cycle, the table doubles its bucket count, rehashes every entry and retries.
///
/// Extraction empties the slot outright and no tombstones are kept. Lookups therefore never stop
/// at an empty slot: they examine a full cycle of `bucket_count` slots before reporting a key as
/// missing, which keeps every surviving key reachable no matter which slots were emptied.
///
/// # Examples
///
/// ```
/// use splay_collections::{Error, ProbingHashTable};
///
/// let mut table = ProbingHashTable::with_bucket_count(2);
/// table.insert(0, "zero").unwrap();
/// table.insert(2, "two").unwrap();
/// table.insert(4, "four").unwrap();
///
/// assert_eq!(table.bucket_count(), 4);
/// assert_eq!(table.peek(&4), Ok(&"four"));
/// assert_eq!(table.insert(2, "deux"), Err(Error::DuplicateKey));
///
/// assert_eq!(table.extract(&0), Ok("zero"));
/// assert_eq!(table.peek(&4), Ok(&"four"));
/// ```
pub struct ProbingHashTable<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    len: usize,
}

fn empty_slots<K, V>(bucket_count: usize) -> Vec<Option<Entry<K, V>>> {
    (0..bucket_count).map(|_| None).collect()
}

impl<K, V> ProbingHashTable<K, V>
where
    K: Eq + HashCode,
{
    /// Constructs a new, empty `ProbingHashTable<K, V>` with a single slot.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Constructs a new, empty `ProbingHashTable<K, V>` with `bucket_count` slots.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ProbingHashTable;
    ///
    /// let table: ProbingHashTable<u32, u32> = ProbingHashTable::with_bucket_count(16);
    /// assert_eq!(table.bucket_count(), 16);
    /// ```
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "Error: bucket count must be positive.");
        ProbingHashTable {
            slots: empty_slots(bucket_count),
            len: 0,
        }
    }

    /// Returns the home slot of `key`.
    pub fn hash_code(&self, key: &K) -> usize {
        key.hash_code(self.slots.len())
    }

    // Slot indices of the probe sequence of `key`, one full cycle long.
    fn probe_sequence(&self, key: &K) -> impl Iterator<Item = usize> {
        let bucket_count = self.slots.len();
        let home = self.hash_code(key);
        (0..bucket_count).map(move |step| (home + step) % bucket_count)
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.probe_sequence(key).find(|&index| match self.slots[index] {
            Some(ref entry) => entry.key == *key,
            None => false,
        })
    }

    fn vacancy(&self, key: &K) -> Option<usize> {
        self.probe_sequence(key)
            .find(|&index| self.slots[index].is_none())
    }

    // Stores a key known to be absent, growing the table until a vacancy exists.
    fn insert_absent(&mut self, key: K, value: V) {
        loop {
            if let Some(index) = self.vacancy(&key) {
                self.slots[index] = Some(Entry::new(key, value));
                self.len += 1;
                return;
            }
            let bucket_count = self.bucket_count() * 2;
            debug!(
                "probe cycle full at {} buckets, growing to {}",
                self.bucket_count(),
                bucket_count,
            );
            self.resize(bucket_count);
        }
    }

    /// Inserts a key-value pair into the table. Returns `Error::DuplicateKey` if the key already
    /// exists. Doubles the bucket count when no slot of the key's probe cycle is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, ProbingHashTable};
    ///
    /// let mut table = ProbingHashTable::new();
    /// assert_eq!(table.insert(1, 1), Ok(()));
    /// assert_eq!(table.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(table.insert(2, 2), Ok(()));
    /// assert_eq!(table.bucket_count(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.position(&key).is_some() {
            return Err(Error::DuplicateKey);
        }
        self.insert_absent(key, value);
        Ok(())
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `Error::NonexistentKey` if the key does not exist.
    pub fn peek(&self, key: &K) -> Result<&V> {
        let index = self.position(key).ok_or(Error::NonexistentKey)?;
        match self.slots[index] {
            Some(ref entry) => Ok(&entry.value),
            None => Err(Error::NonexistentKey),
        }
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns
    /// `Error::NonexistentKey` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ProbingHashTable;
    ///
    /// let mut table = ProbingHashTable::new();
    /// table.insert(1, 1).unwrap();
    /// *table.peek_mut(&1).unwrap() += 1;
    /// assert_eq!(table.peek(&1), Ok(&2));
    /// ```
    pub fn peek_mut(&mut self, key: &K) -> Result<&mut V> {
        let index = self.position(key).ok_or(Error::NonexistentKey)?;
        match self.slots[index] {
            Some(ref mut entry) => Ok(&mut entry.value),
            None => Err(Error::NonexistentKey),
        }
    }

    /// Removes a key from the table, empties its slot and returns its value. Returns
    /// `Error::NonexistentKey` if the key does not exist.
    pub fn extract(&mut self, key: &K) -> Result<V> {
        let index = self.position(key).ok_or(Error::NonexistentKey)?;
        let entry = self.slots[index].take().ok_or(Error::NonexistentKey)?;
        self.len -= 1;
        Ok(entry.value)
    }

    /// Changes the number of slots to `bucket_count` and rehashes every entry into the new slots
    /// in the order of their old slots. Requests that would leave fewer slots than entries, or no
    /// slots at all, are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ProbingHashTable;
    ///
    /// let mut table = ProbingHashTable::with_bucket_count(4);
    /// table.insert(1, 1).unwrap();
    /// table.insert(2, 2).unwrap();
    ///
    /// table.resize(1);
    /// assert_eq!(table.bucket_count(), 4);
    ///
    /// table.resize(8);
    /// assert_eq!(table.bucket_count(), 8);
    /// assert_eq!(table.peek(&2), Ok(&2));
    /// ```
    pub fn resize(&mut self, bucket_count: usize) {
        if bucket_count < self.len || bucket_count == 0 {
            trace!(
                "ignoring resize to {} buckets with {} entries",
                bucket_count,
                self.len,
            );
            return;
        }

        debug!(
            "rehashing {} entries from {} to {} buckets",
            self.len,
            self.bucket_count(),
            bucket_count,
        );
        let old_slots = mem::replace(&mut self.slots, empty_slots(bucket_count));
        self.len = 0;
        for entry in old_slots.into_iter().flatten() {
            let Entry { key, value } = entry;
            self.insert_absent(key, value);
        }
    }

    /// Checks if a key exists in the table.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots.
    pub fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the entry stored in the slot at `index`, or `None` if the slot is empty or out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::ProbingHashTable;
    ///
    /// let mut table = ProbingHashTable::with_bucket_count(4);
    /// table.insert(1, "one").unwrap();
    /// table.insert(5, "five").unwrap();
    /// assert_eq!(table.slot(1), Some((&1, &"one")));
    /// assert_eq!(table.slot(2), Some((&5, &"five")));
    /// assert_eq!(table.slot(3), None);
    /// ```
    pub fn slot(&self, index: usize) -> Option<(&K, &V)> {
        self.slots
            .get(index)
            .and_then(|slot| slot.as_ref())
            .map(Entry::as_pair)
    }

    /// Clears the table, removing all values. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }
}

impl<K, V> Default for ProbingHashTable<K, V>
where
    K: Eq + HashCode,
{
    fn default() -> Self {
        Self::new()
    }
}
