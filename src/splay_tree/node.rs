use crate::arena::Handle;
use crate::entry::Entry;

pub type Link = Option<Handle>;

/// A splay tree node stored in the tree's arena.
///
/// `left` and `right` are the only paths that reach a node from the root. `parent` is a
/// back-reference used for rotations and is cleared when the node becomes the root or is detached.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub left: Link,
    pub right: Link,
    pub parent: Link,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, parent: Link) -> Self {
        Node {
            entry: Entry::new(key, value),
            left: None,
            right: None,
            parent,
        }
    }

    pub fn detach(&mut self) {
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}
