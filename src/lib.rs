//! Associative key-value containers built on a parent-linked splay tree.
//!
//! - [`SplayTree`](splay_tree/struct.SplayTree.html): an ordered map that splays every accessed
//!   node to the root.
//! - [`ChainedHashTable`](chained_hash_table/struct.ChainedHashTable.html): a fixed number of
//!   splay tree buckets selected by `key mod bucket_count`.
//! - [`ProbingHashTable`](probing_hash_table/struct.ProbingHashTable.html): a flat slot array
//!   with linear probing that doubles its capacity when full.

mod arena;
mod entry;
mod error;
mod hash_code;

pub mod chained_hash_table;
pub mod probing_hash_table;
pub mod splay_tree;

pub use crate::chained_hash_table::ChainedHashTable;
pub use crate::error::{Error, Result};
pub use crate::hash_code::HashCode;
pub use crate::probing_hash_table::ProbingHashTable;
pub use crate::splay_tree::SplayTree;

/// Number of buckets used by the hash tables' `new` constructors.
pub const DEFAULT_BUCKET_COUNT: usize = 1;
