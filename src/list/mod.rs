use std::fmt::{Debug, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use crate::error::{InvariantError, ListError, Result};
use crate::{Iter, IterMut};

pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list whose nodes are owned by an arena.
/// Elements are addressed by zero-based positions; pushing and popping at
/// either end take constant time, and every positional access walks from the
/// closer end of the list.
///
/// The `List` contains:
/// - `nodes`, the arena of slots holding either a node or a free-list entry;
/// - `head` and `tail`, the slots of the first and the last node;
/// - `free`, the first vacant slot available for reuse;
/// - the length `len`.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `prev`/`next` given as `None` stand for the outside of the list, so
///   connecting `None` to a node makes that node the new head (or tail).
pub struct List<T> {
    nodes: Vec<Slot<T>>,
    free: Option<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    /// the length of the list
    pub(crate) len: usize,
}

/// Index of a slot in the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

pub(crate) struct Node<T> {
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) element: T,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NodeId> {
        self.head
    }
    pub(crate) fn back_node(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match &self.nodes[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("slot {} is linked but vacant", id.0),
        }
    }
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.nodes[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("slot {} is linked but vacant", id.0),
        }
    }

    pub(crate) fn element(&self, id: NodeId) -> &T {
        &self.node(id).element
    }
    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }
    pub(crate) fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    /// Link `prev` and `next` to each other. `None` on either side stands for
    /// the outside of the list and updates `head` or `tail` instead.
    fn connect(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Allocate a node holding `element` and link it between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent (only checked in
    /// `#[cfg(debug_assertions)]`), otherwise the list becomes ill-formed.
    fn attach_node(&mut self, prev: Option<NodeId>, next: Option<NodeId>, element: T) -> NodeId {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.allocate(element);
        self.connect(prev, Some(node));
        self.connect(Some(node), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
        node
    }

    /// Unlink the node `id` by connecting its neighbours directly, release its
    /// slot and return its element.
    fn detach_node(&mut self, id: NodeId) -> T {
        let Node { prev, next, .. } = *self.node(id);
        self.connect(prev, next);
        self.len -= 1;
        self.release(id).element
    }

    fn allocate(&mut self, element: T) -> NodeId {
        let node = Node {
            next: None,
            prev: None,
            element,
        };
        match self.free {
            Some(id) => {
                match mem::replace(&mut self.nodes[id.0], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list reaches occupied slot {}", id.0),
                }
                id
            }
            None => {
                self.nodes.push(Slot::Occupied(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let next_free = self.free;
        self.free = Some(id);
        match mem::replace(&mut self.nodes[id.0], Slot::Vacant { next_free }) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("slot {} released twice", id.0),
        }
    }

    /// Walk to the node at `at` from the closer end of the list.
    ///
    /// The caller must guarantee `at < len`.
    fn walk_to(&self, at: usize) -> NodeId {
        debug_assert!(at < self.len);
        let back_steps = self.len - 1 - at;
        let found = if at < back_steps {
            (0..at).fold(self.head, |node, _| node.and_then(|id| self.next_of(id)))
        } else {
            (0..back_steps).fold(self.tail, |node, _| node.and_then(|id| self.prev_of(id)))
        };
        match found {
            Some(id) => id,
            None => unreachable!("chain is shorter than its length {}", self.len),
        }
    }

    /// Resolve the position `at` into a node, or fail with
    /// [`ListError::OutOfRange`] when `at >= len`.
    pub(crate) fn node_at(&self, at: usize) -> Result<NodeId> {
        if at >= self.len {
            return Err(self.out_of_range(at));
        }
        Ok(self.walk_to(at))
    }

    pub(crate) fn out_of_range(&self, position: usize) -> ListError {
        ListError::OutOfRange {
            position,
            len: self.len,
        }
    }

    /// Exchange the elements held by `a` and `b`. The links are untouched.
    pub(crate) fn swap_elements(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (left, right) = self.nodes.split_at_mut(high);
        match (&mut left[low], &mut right[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.element, &mut y.element),
            _ => unreachable!("swapping elements of a vacant slot"),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NodeId>, next: Option<NodeId>) {
        let after_prev = match prev {
            Some(prev) => self.next_of(prev),
            None => self.head,
        };
        let before_next = match next {
            Some(next) => self.prev_of(next),
            None => self.tail,
        };
        assert_eq!(after_prev, next);
        assert_eq!(before_next, prev);
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        match (self.head, self.tail) {
            (None, None) if self.len == 0 => {}
            (Some(_), Some(_)) if self.len > 0 => {}
            (head, tail) => {
                return Err(InvariantError::BoundaryLink {
                    message: format!("head {head:?} and tail {tail:?} with length {}", self.len),
                })
            }
        }

        // Every slot must be reached exactly once, either from the chain or
        // from the free list.
        let mut accounted = vec![false; self.nodes.len()];

        let (mut prev, mut current, mut position) = (None, self.head, 0);
        while let Some(id) = current {
            if position >= self.nodes.len() || accounted.get(id.0) == Some(&true) {
                return Err(InvariantError::Cycle { steps: position });
            }
            let node = match self.nodes.get(id.0) {
                Some(Slot::Occupied(node)) => node,
                _ => return Err(InvariantError::VacantLink { position, slot: id.0 }),
            };
            if node.prev != prev {
                return Err(InvariantError::BrokenBackLink { position });
            }
            accounted[id.0] = true;
            prev = current;
            current = node.next;
            position += 1;
        }
        if position != self.len {
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual: position,
            });
        }
        if prev != self.tail {
            return Err(InvariantError::BoundaryLink {
                message: format!("tail {:?} is not the last node {prev:?}", self.tail),
            });
        }

        let (mut free, mut steps) = (self.free, 0);
        while let Some(id) = free {
            if steps >= self.nodes.len() {
                return Err(InvariantError::Cycle { steps });
            }
            match self.nodes.get(id.0) {
                Some(Slot::Vacant { next_free }) if !accounted[id.0] => {
                    accounted[id.0] = true;
                    free = *next_free;
                }
                _ => return Err(InvariantError::CorruptFreeList { slot: id.0 }),
            }
            steps += 1;
        }

        match accounted.iter().position(|seen| !seen) {
            Some(slot) => Err(InvariantError::LeakedSlot { slot }),
            None => Ok(()),
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use bidir_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty `List` whose arena can hold `capacity` nodes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// Clearing an empty list does nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        let released = self.len;
        while self.pop_front().is_ok() {}
        self.nodes.clear();
        self.free = None;
        #[cfg(feature = "tracing")]
        if released > 0 {
            tracing::trace!(released, "list cleared");
        }
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| self.element(id))
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(&mut self.node_mut(head).element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| self.element(id))
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        Some(&mut self.node_mut(tail).element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.attach_node(None, self.head, elt);
    }

    /// Removes the first element and returns it, or
    /// [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(ListError::EmptyContainer)?;
        Ok(self.detach_node(head))
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.attach_node(self.tail, None, elt);
    }

    /// Removes the last element from a list and returns it, or
    /// [`ListError::EmptyContainer`] if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(ListError::EmptyContainer)?;
        Ok(self.detach_node(tail))
    }

    /// Provides a reference to the element at position `at`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*at*, *n* - *at*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::{List, ListError};
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert_eq!(list.get(3), Err(ListError::OutOfRange { position: 3, len: 3 }));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        let id = self.node_at(at)?;
        Ok(self.element(id))
    }

    /// Provides a mutable reference to the element at position `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at >= len`.
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T> {
        let id = self.node_at(at)?;
        Ok(&mut self.node_mut(id).element)
    }

    /// Adds an element at the given position in the list. Inserting at
    /// `len` appends the element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*at*, *n* - *at*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// assert!(list.insert(9, 6).is_err());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        if at > self.len {
            return Err(self.out_of_range(at));
        }
        if at == 0 {
            self.push_front(elt);
        } else if at == self.len {
            self.push_back(elt);
        } else {
            // the new node goes right before the node currently at `at`
            let anchor = self.walk_to(at);
            self.attach_node(self.prev_of(anchor), Some(anchor), elt);
        }
        Ok(())
    }

    /// Replaces the element at the given position and returns the old one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.replace(1, 'x'), Ok('b'));
    /// assert_eq!(list, List::from(['a', 'x', 'c']));
    /// ```
    pub fn replace(&mut self, at: usize, elt: T) -> Result<T> {
        let id = self.node_at(at)?;
        Ok(mem::replace(&mut self.node_mut(id).element, elt))
    }

    /// Removes the element at the given position and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*at*, *n* - *at*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        if at >= self.len {
            return Err(self.out_of_range(at));
        }
        if at == 0 {
            self.pop_front()
        } else if at == self.len - 1 {
            self.pop_back()
        } else {
            let id = self.walk_to(at);
            Ok(self.detach_node(id))
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Checks the structural invariants of the list: the boundary links,
    /// that every `next` link is mirrored by a `prev` link, that the chain
    /// holds exactly `len` nodes, and that every arena slot is either linked
    /// or free.
    ///
    /// A list built only through the public API always validates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from([3, 1, 2]);
    /// list.remove(1).unwrap();
    /// list.sort();
    /// assert!(list.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        let checked = self.check_invariants();
        #[cfg(feature = "tracing")]
        if let Err(err) = &checked {
            tracing::debug!(%err, len = self.len, "list invariant violated");
        }
        checked
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(elt) => elt,
            Err(_) => panic!("position {index} is out of range for a list of length {len}"),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
