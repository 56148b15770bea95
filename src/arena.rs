//! Slab allocator that owns every node of a splay tree.

use std::mem;
use std::ops::{Index, IndexMut};

/// A copyable reference to an object stored in an `Arena<T>`.
///
/// A handle does not own its object and becomes invalid once the object is freed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A single-type allocator backed by one `Vec`.
///
/// Freed slots are chained into a free list and reused by later allocations, so handles stay
/// small and stable. Dropping the arena drops every live object without recursion.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` and returns a handle to it.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle(self.slots.len() - 1)
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Expected a vacant slot at the head of the free list."),
                }
                Handle(index)
            },
        }
    }

    /// Removes the object referenced by `handle` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to a vacant or out of bounds slot.
    pub fn free(&mut self, handle: Handle) -> T {
        let Handle(index) = handle;
        if index >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        match mem::replace(&mut self.slots[index], Slot::Vacant(self.head)) {
            Slot::Occupied(value) => {
                self.head = Some(index);
                self.len -= 1;
                value
            },
            Slot::Vacant(next) => {
                self.slots[index] = Slot::Vacant(next);
                panic!("Error: attempting to free vacant slot.");
            },
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Drops every object and forgets all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle refers to a vacant slot.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle refers to a vacant slot.")
    }
}
