use crate::arena::{Arena, Handle};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::splay_tree::node::{Link, Node};
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type Nodes<K, V> = Arena<Node<K, V>>;

// Replaces `old` with `new` in the child slot of `parent`, or at the root if `parent` is `None`.
fn replace_child<K, V>(
    nodes: &mut Nodes<K, V>,
    root: &mut Link,
    parent: Link,
    old: Handle,
    new: Handle,
) {
    match parent {
        None => *root = Some(new),
        Some(parent) => {
            let parent_node = &mut nodes[parent];
            if parent_node.left == Some(old) {
                parent_node.left = Some(new);
            } else {
                parent_node.right = Some(new);
            }
        },
    }
}

// Promotes the left child of `a` into the position of `a`.
fn rotate_right<K, V>(nodes: &mut Nodes<K, V>, root: &mut Link, a: Handle) {
    let b = nodes[a].left.expect("Expected left child node to be `Some`.");
    let inner = nodes[b].right;

    nodes[a].left = inner;
    if let Some(inner) = inner {
        nodes[inner].parent = Some(a);
    }

    let parent = nodes[a].parent;
    nodes[b].parent = parent;
    replace_child(nodes, root, parent, a, b);

    nodes[b].right = Some(a);
    nodes[a].parent = Some(b);
}

// Promotes the right child of `a` into the position of `a`.
fn rotate_left<K, V>(nodes: &mut Nodes<K, V>, root: &mut Link, a: Handle) {
    let b = nodes[a].right.expect("Expected right child node to be `Some`.");
    let inner = nodes[b].left;

    nodes[a].right = inner;
    if let Some(inner) = inner {
        nodes[inner].parent = Some(a);
    }

    let parent = nodes[a].parent;
    nodes[b].parent = parent;
    replace_child(nodes, root, parent, a, b);

    nodes[b].left = Some(a);
    nodes[a].parent = Some(b);
}

/// Rotates `target` up until it is the root of the tree.
pub fn splay<K, V>(nodes: &mut Nodes<K, V>, root: &mut Link, target: Handle) {
    while let Some(parent) = nodes[target].parent {
        let is_left = nodes[parent].left == Some(target);
        match nodes[parent].parent {
            // zig
            None => {
                if is_left {
                    rotate_right(nodes, root, parent);
                } else {
                    rotate_left(nodes, root, parent);
                }
            },
            Some(grandparent) => {
                let parent_is_left = nodes[grandparent].left == Some(parent);
                match (is_left, parent_is_left) {
                    // zig-zig
                    (true, true) => {
                        rotate_right(nodes, root, grandparent);
                        rotate_right(nodes, root, parent);
                    },
                    (false, false) => {
                        rotate_left(nodes, root, grandparent);
                        rotate_left(nodes, root, parent);
                    },
                    // zig-zag
                    (false, true) => {
                        rotate_left(nodes, root, parent);
                        rotate_right(nodes, root, grandparent);
                    },
                    (true, false) => {
                        rotate_right(nodes, root, parent);
                        rotate_left(nodes, root, grandparent);
                    },
                }
            },
        }
    }
}

pub fn find<K, V, Q>(nodes: &Nodes<K, V>, root: Link, key: &Q) -> Link
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = root;
    while let Some(handle) = curr {
        let node = &nodes[handle];
        curr = match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => node.left,
            Ordering::Greater => node.right,
            Ordering::Equal => return Some(handle),
        };
    }
    None
}

pub fn leftmost<K, V>(nodes: &Nodes<K, V>, mut handle: Handle) -> Handle {
    while let Some(left) = nodes[handle].left {
        handle = left;
    }
    handle
}

pub fn rightmost<K, V>(nodes: &Nodes<K, V>, mut handle: Handle) -> Handle {
    while let Some(right) = nodes[handle].right {
        handle = right;
    }
    handle
}

/// Links a new node at the leaf position for `key` and splays it to the root.
pub fn insert<K, V>(nodes: &mut Nodes<K, V>, root: &mut Link, key: K, value: V) -> Result<Handle>
where
    K: Ord,
{
    let mut parent = None;
    let mut is_left = false;
    let mut curr = *root;
    while let Some(handle) = curr {
        let node = &nodes[handle];
        is_left = match key.cmp(&node.entry.key) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => return Err(Error::DuplicateKey),
        };
        parent = curr;
        curr = if is_left { node.left } else { node.right };
    }

    let handle = nodes.allocate(Node::new(key, value, parent));
    match parent {
        None => *root = Some(handle),
        Some(parent) if is_left => nodes[parent].left = Some(handle),
        Some(parent) => nodes[parent].right = Some(handle),
    }
    splay(nodes, root, handle);
    Ok(handle)
}

/// Splays `handle` to the root, unlinks it and returns its entry.
pub fn remove<K, V>(nodes: &mut Nodes<K, V>, root: &mut Link, handle: Handle) -> Entry<K, V> {
    splay(nodes, root, handle);

    let (left, right) = (nodes[handle].left, nodes[handle].right);
    *root = match (left, right) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => {
            nodes[child].parent = None;
            Some(child)
        },
        (Some(left), Some(right)) => {
            trace!("splicing in-order successor into the root");
            let successor = leftmost(nodes, right);
            if successor != right {
                let successor_parent = nodes[successor]
                    .parent
                    .expect("Expected in-order successor to have a parent.");
                let successor_right = nodes[successor].right;
                nodes[successor_parent].left = successor_right;
                if let Some(successor_right) = successor_right {
                    nodes[successor_right].parent = Some(successor_parent);
                }

                nodes[successor].right = Some(right);
                nodes[right].parent = Some(successor);
            }
            nodes[successor].left = Some(left);
            nodes[left].parent = Some(successor);
            nodes[successor].parent = None;
            Some(successor)
        },
    };

    nodes[handle].detach();
    nodes.free(handle).entry
}
