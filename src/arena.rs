//! Slot storage for tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object stored in an `Arena<T>`.
///
/// Handles are plain indices: they do not own the object they refer to and stay valid until the
/// object is freed or the arena is cleared.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(usize);

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A single-type allocator backed by a `Vec`.
///
/// Every object lives in one slot of a contiguous vector, so cloning or dropping the arena is a
/// flat walk over the slots regardless of how the objects link to each other. Freed slots are
/// chained into a free list and reused by later allocations.
///
/// # Examples
///
/// ```
/// use avl_union::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
#[derive(Clone)]
pub struct Arena<T> {
    head: Option<Handle>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` objects before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_union::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns its handle. Vacant slots are reused before
    /// the arena grows.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle(self.slots.len() - 1)
            },
            Some(handle) => {
                let vacant = mem::replace(&mut self.slots[handle.0], Slot::Occupied(value));
                match vacant {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Expected a vacant slot."),
                }
                handle
            },
        }
    }

    /// Deallocates an object and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to an invalid or vacant slot.
    pub fn free(&mut self, handle: Handle) -> T {
        if handle.0 >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        let old = mem::replace(&mut self.slots[handle.0], Slot::Vacant(self.head));
        match old {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                value
            },
            Slot::Vacant(next) => {
                self.slots[handle.0] = Slot::Vacant(next);
                panic!("Error: attempting to free vacant slot.");
            },
        }
    }

    /// Returns an immutable reference to an object, or `None` if the handle is invalid or vacant.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object, or `None` if the handle is invalid or vacant.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns mutable references to two distinct objects at once.
    ///
    /// # Panics
    ///
    /// Panics if both handles are equal or either one is invalid or vacant.
    pub fn pair_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Error: aliasing handles.");
        let (low, high, swapped) = if a.0 < b.0 { (a.0, b.0, false) } else { (b.0, a.0, true) };
        let (head, tail) = self.slots.split_at_mut(high);
        let pair = match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => (x, y),
            _ => panic!("Error: entry out of bounds."),
        };
        if swapped {
            (pair.1, pair.0)
        } else {
            pair
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
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
        self.get(handle).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: entry out of bounds.")
    }
}
