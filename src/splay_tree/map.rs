use crate::arena::Handle;
use crate::error::{Error, Result};
use crate::splay_tree::node::Link;
use crate::splay_tree::tree::{self, Nodes};
use std::borrow::Borrow;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed items are quick to access again. After every successful insertion or lookup, the
/// accessed node is "splayed" to the root of the tree through a sequence of rotations. Each node
/// keeps a back-reference to its parent, so splaying walks upward from the accessed node.
///
/// Keys are unique: inserting an existing key is an error rather than a replacement.
///
/// # Examples
///
/// ```
/// use splay_collections::{Error, SplayTree};
///
/// let mut tree = SplayTree::new();
/// tree.insert(0, "zero").unwrap();
/// tree.insert(3, "three").unwrap();
///
/// assert_eq!(tree.peek(&0), Ok(&"zero"));
/// assert_eq!(tree.root_key(), Some(&0));
/// assert_eq!(tree.insert(3, "again"), Err(Error::DuplicateKey));
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.minimum_key(), Ok(&0));
/// assert_eq!(tree.maximum_key(), Ok(&3));
///
/// assert_eq!(tree.extract(&0), Ok("zero"));
/// assert_eq!(tree.extract(&0), Err(Error::NonexistentKey));
/// ```
pub struct SplayTree<K, V> {
    nodes: Nodes<K, V>,
    root: Link,
}

impl<K, V> SplayTree<K, V> {
    /// Constructs a new, empty `SplayTree<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree {
            nodes: Nodes::new(),
            root: None,
        }
    }

    /// Inserts a key-value pair into the tree and splays it to the root. Returns
    /// `Error::DuplicateKey` and leaves the tree untouched if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(1, 1), Ok(()));
    /// assert_eq!(tree.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(tree.peek(&1), Ok(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Ord,
    {
        let SplayTree {
            ref mut nodes,
            ref mut root,
        } = self;
        tree::insert(nodes, root, key, value).map(|_| ())
    }

    /// Returns an immutable reference to the value associated with a particular key and splays
    /// its node to the root. Returns `Error::NonexistentKey` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// tree.insert(2, 2).unwrap();
    /// assert_eq!(tree.peek(&1), Ok(&1));
    /// assert_eq!(tree.root_key(), Some(&1));
    /// assert_eq!(tree.peek(&0), Err(Error::NonexistentKey));
    /// ```
    pub fn peek<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.splay_key(key)?;
        Ok(&self.nodes[handle].entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key and splays its
    /// node to the root. Returns `Error::NonexistentKey` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// *tree.peek_mut(&1).unwrap() = 2;
    /// assert_eq!(tree.peek(&1), Ok(&2));
    /// ```
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.splay_key(key)?;
        Ok(&mut self.nodes[handle].entry.value)
    }

    /// Removes a key from the tree and returns its value. Returns `Error::NonexistentKey` and
    /// leaves the tree untouched if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// assert_eq!(tree.extract(&1), Ok(1));
    /// assert_eq!(tree.extract(&1), Err(Error::NonexistentKey));
    /// ```
    pub fn extract<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let SplayTree {
            ref mut nodes,
            ref mut root,
        } = self;
        let handle = tree::find(nodes, *root, key).ok_or(Error::NonexistentKey)?;
        Ok(tree::remove(nodes, root, handle).value)
    }

    /// Returns the minimum key of the tree after splaying it to the root. Returns
    /// `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.minimum_key(), Err(Error::EmptyTree));
    /// tree.insert(1, 1).unwrap();
    /// tree.insert(3, 3).unwrap();
    /// assert_eq!(tree.minimum_key(), Ok(&1));
    /// ```
    pub fn minimum_key(&mut self) -> Result<&K> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        let handle = tree::leftmost(&self.nodes, root);
        tree::splay(&mut self.nodes, &mut self.root, handle);
        Ok(&self.nodes[handle].entry.key)
    }

    /// Returns the maximum key of the tree after splaying it to the root. Returns
    /// `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.maximum_key(), Err(Error::EmptyTree));
    /// tree.insert(1, 1).unwrap();
    /// tree.insert(3, 3).unwrap();
    /// assert_eq!(tree.maximum_key(), Ok(&3));
    /// ```
    pub fn maximum_key(&mut self) -> Result<&K> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        let handle = tree::rightmost(&self.nodes, root);
        tree::splay(&mut self.nodes, &mut self.root, handle);
        Ok(&self.nodes[handle].entry.key)
    }

    /// Checks if a key exists in the tree. Note that `contains_key` does not splay the tree in
    /// order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// assert!(!tree.contains_key(&0));
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::find(&self.nodes, self.root, key).is_some()
    }

    /// Returns the key stored at the root of the tree, or `None` if the tree is empty.
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[root].entry.key)
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1).unwrap();
    /// tree.insert(2, 2).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn splay_key<Q>(&mut self, key: &Q) -> Result<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = tree::find(&self.nodes, self.root, key).ok_or(Error::NonexistentKey)?;
        tree::splay(&mut self.nodes, &mut self.root, handle);
        Ok(handle)
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
