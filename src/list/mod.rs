use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace};
use slab::Slab;

use crate::error::ListError;
use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked sequence container. It allows inserting and
/// removing elements at both ends, and before any [`Position`], in constant time.
///
/// The `List` contains:
/// - an arena `nodes` owning every node of the list;
/// - the indices `head` and `tail` of the first and the last node, both absent
///   when the list is empty;
/// - a length field `len`.
///
/// Links between nodes are arena indices, so they never own anything. A node
/// is released exactly once: either when it is removed from the arena by a
/// pop or an erase, or when the arena itself is dropped.
///
/// # Naming Conventions
///
/// - `begin`/`end`: the position of the first element and the off-the-end
///   position;
/// - `prev`/`next`: the neighbours of a node, `None` past either end.
pub struct List<T> {
    pub(crate) nodes: Slab<Node<T>>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
    /// Identifies this node among every node ever created, so a stale
    /// position whose arena slot got reused is still rejected.
    pub(crate) stamp: u64,
}

static NEXT_STAMP: AtomicU64 = AtomicU64::new(0);

// private methods
impl<T> List<T> {
    /// Link `prev` and `next` as neighbours.
    ///
    /// An absent `prev` makes `next` the new head, and an absent `next` makes
    /// `prev` the new tail.
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Attach a new node holding `element` to the list, between `prev` and `next`,
    /// and return its index.
    ///
    /// `prev` and `next` must be adjacent (checked only in `#[cfg(debug_assertions)]`),
    /// otherwise the list becomes ill-formed.
    pub(crate) fn attach_node(
        &mut self,
        prev: Option<usize>,
        next: Option<usize>,
        element: T,
    ) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let index = self.nodes.insert(Node::new(element, prev, next));
        self.connect(prev, Some(index));
        self.connect(Some(index), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(index));
            self.assert_adjacent(Some(index), next);
        }
        index
    }

    /// Detach the node at `index` from the list and return it, or return `None`
    /// if no node lives there.
    pub(crate) fn detach_node(&mut self, index: usize) -> Option<Node<T>> {
        let node = self.nodes.try_remove(index)?;
        self.connect(node.prev, node.next);
        self.len -= 1;
        Some(node)
    }

    /// Resolve `position` to the index of the node it names, or to `None` for
    /// the off-the-end position.
    pub(crate) fn resolve(&self, position: Position) -> Result<Option<usize>, ListError> {
        let handle = match position.handle() {
            Some(handle) => handle,
            None => return Ok(None),
        };
        match self.nodes.get(handle.index) {
            Some(node) if node.stamp == handle.stamp => Ok(Some(handle.index)),
            _ => {
                debug!("rejected stale position {:?}", position);
                Err(ListError::InvalidPosition)
            }
        }
    }

    /// The position of the node at `index`, or the off-the-end position.
    pub(crate) fn position_of(&self, index: Option<usize>) -> Position {
        match index {
            Some(index) => Position::new(index, self.nodes[index].stamp),
            None => Position::END,
        }
    }

    pub(crate) fn next_of(&self, index: Option<usize>) -> Option<usize> {
        index.and_then(|index| self.nodes[index].next)
    }

    /// The node before `index`, where the node before the off-the-end
    /// position is the tail.
    pub(crate) fn prev_of(&self, index: Option<usize>) -> Option<usize> {
        match index {
            Some(index) => self.nodes[index].prev,
            None => self.tail,
        }
    }

    /// Run after every structural change.
    #[inline]
    pub(crate) fn check(&self) {
        #[cfg(feature = "strict-invariants")]
        self.assert_invariants();
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<usize>, next: Option<usize>) {
        let after_prev = match prev {
            Some(prev) => self.nodes[prev].next,
            None => self.head,
        };
        assert_eq!(after_prev, next);
        assert_eq!(self.prev_of(next), prev);
    }

    /// Walk the whole chain in both directions and assert the link invariants.
    #[cfg(any(test, feature = "strict-invariants"))]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.len, self.nodes.len(), "length out of sync with the arena");
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());

        let (mut prev, mut current) = (None, self.head);
        for _ in 0..self.len {
            let index = current.expect("forward chain is shorter than the length");
            assert_eq!(self.nodes[index].prev, prev, "asymmetric link");
            prev = current;
            current = self.nodes[index].next;
        }
        assert_eq!(current, None, "forward chain is longer than the length");
        assert_eq!(prev, self.tail);

        let (mut next, mut current) = (None, self.tail);
        for _ in 0..self.len {
            let index = current.expect("backward chain is shorter than the length");
            assert_eq!(self.nodes[index].next, next, "asymmetric link");
            next = current;
            current = self.nodes[index].prev;
        }
        assert_eq!(current, None, "backward chain is longer than the length");
        assert_eq!(next, self.head);
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use dlist::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
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
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
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
    /// use dlist::List;
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
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), Err(ListError::OutOfRange));
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        if !self.is_empty() {
            trace!("clearing a list of {} elements", self.len);
        }
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or [`ListError::OutOfRange`] if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(ListError::OutOfRange));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        match self.head {
            Some(head) => Ok(&self.nodes[head].element),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Provides a mutable reference to the front element, or [`ListError::OutOfRange`]
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1]);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        match self.head {
            Some(head) => Ok(&mut self.nodes[head].element),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Provides a reference to the back element, or [`ListError::OutOfRange`] if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(ListError::OutOfRange));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        match self.tail {
            Some(tail) => Ok(&self.nodes[tail].element),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Provides a mutable reference to the back element, or [`ListError::OutOfRange`]
    /// if the list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        match self.tail {
            Some(tail) => Ok(&mut self.nodes[tail].element),
            None => Err(ListError::OutOfRange),
        }
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
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let head = self.head;
        self.attach_node(None, head, elt);
        self.check();
    }

    /// Removes the first element and returns it, or returns
    /// [`ListError::Underflow`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::Underflow));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::Underflow));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::Underflow)?;
        let node = self.detach_node(head).ok_or(ListError::Underflow)?;
        self.check();
        Ok(node.into_element())
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
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let tail = self.tail;
        self.attach_node(tail, None, elt);
        self.check();
    }

    /// Removes the last element from a list and returns it, or returns
    /// [`ListError::Underflow`] if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::Underflow));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::Underflow)?;
        let node = self.detach_node(tail).ok_or(ListError::Underflow)?;
        self.check();
        Ok(node.into_element())
    }

    /// The position of the first element, or [`Position::END`] if the list
    /// is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position_of(self.head)
    }

    /// The off-the-end position. It is always [`Position::END`].
    #[inline]
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Inserts `elt` before `position` and returns the position of the new
    /// element.
    ///
    /// Inserting before [`begin`](List::begin) is a `push_front`, and inserting
    /// before [`end`](List::end) is a `push_back`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] if `position` is stale or belongs
    /// to another list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// let one = list.next_position(list.begin()).unwrap();
    ///
    /// let nine = list.insert(one, 9).unwrap();
    /// assert_eq!(list.get(nine), Ok(&9));
    /// assert_eq!(list, List::from([0, 9, 1, 2]));
    ///
    /// list.insert(list.end(), 3).unwrap();
    /// assert_eq!(list, List::from([0, 9, 1, 2, 3]));
    /// ```
    pub fn insert(&mut self, position: Position, elt: T) -> Result<Position, ListError> {
        let next = self.resolve(position)?;
        let prev = self.prev_of(next);
        trace!("inserting before {:?}", position);
        let index = self.attach_node(prev, next, elt);
        self.check();
        Ok(self.position_of(Some(index)))
    }

    /// Removes the element at `position` and returns the position of the
    /// element that followed it.
    ///
    /// Erasing [`end`](List::end) does nothing and returns `end`. Positions of
    /// the other elements stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] if `position` is stale or belongs
    /// to another list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// let next = list.erase(list.begin()).unwrap();
    /// assert_eq!(list.get(next), Ok(&1));
    /// assert_eq!(list, List::from([1, 2]));
    ///
    /// assert_eq!(list.erase(list.end()), Ok(list.end()));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn erase(&mut self, position: Position) -> Result<Position, ListError> {
        let index = match self.resolve(position)? {
            Some(index) => index,
            None => return Ok(Position::END),
        };
        trace!("erasing {:?}", position);
        let next = self.nodes[index].next;
        self.detach_node(index);
        self.check();
        Ok(self.position_of(next))
    }

    /// Provides a reference to the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] for the off-the-end position, and
    /// [`ListError::InvalidPosition`] for a stale or foreign one.
    pub fn get(&self, position: Position) -> Result<&T, ListError> {
        let index = self.resolve(position)?.ok_or(ListError::OutOfRange)?;
        Ok(&self.nodes[index].element)
    }

    /// Provides a mutable reference to the element at `position`. Fails like
    /// [`List::get`].
    pub fn get_mut(&mut self, position: Position) -> Result<&mut T, ListError> {
        let index = self.resolve(position)?.ok_or(ListError::OutOfRange)?;
        Ok(&mut self.nodes[index].element)
    }

    /// The position after `position`. The off-the-end position stays where it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([1]);
    /// let end = list.next_position(list.begin()).unwrap();
    /// assert_eq!(end, list.end());
    /// assert_eq!(list.next_position(end), Ok(list.end()));
    /// ```
    pub fn next_position(&self, position: Position) -> Result<Position, ListError> {
        let index = self.resolve(position)?;
        Ok(self.position_of(self.next_of(index)))
    }

    /// The position before `position`, where the position before the
    /// off-the-end one is the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] when there is no previous element,
    /// i.e. at the first element, or at the off-the-end position of an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let list = List::from([1, 2]);
    /// let last = list.prev_position(list.end()).unwrap();
    /// assert_eq!(list.get(last), Ok(&2));
    /// assert_eq!(list.prev_position(list.begin()), Err(ListError::OutOfRange));
    /// ```
    pub fn prev_position(&self, position: Position) -> Result<Position, ListError> {
        let index = self.resolve(position)?;
        match self.prev_of(index) {
            Some(prev) => Ok(self.position_of(Some(prev))),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Provides a cursor at `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor(list.begin()).unwrap();
    /// assert_eq!(cursor.current(), Ok(&1));
    /// ```
    pub fn cursor(&self, position: Position) -> Result<Cursor<'_, T>, ListError> {
        let current = self.resolve(position)?;
        Ok(Cursor::new(self, current))
    }

    /// Provides a cursor at the first element, or at the off-the-end position
    /// if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head)
    }

    /// Provides a cursor at the off-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), Err(ListError::OutOfRange));
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Provides a cursor with editing operations at `position`.
    pub fn cursor_mut(&mut self, position: Position) -> Result<CursorMut<'_, T>, ListError> {
        let current = self.resolve(position)?;
        Ok(CursorMut::new(self, current))
    }

    /// Provides a cursor with editing operations at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Ok(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Ok(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Provides a cursor with editing operations at the off-the-end position.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([0, 1, 2]);
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
    /// use dlist::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Exchanges the contents of two lists without touching any element.
    ///
    /// Positions keep naming the same elements, which now live in the other list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut a = List::from([1, 2]);
    /// let mut b = List::from([3]);
    /// let two = a.prev_position(a.end()).unwrap();
    ///
    /// a.swap(&mut b);
    /// assert_eq!(a, List::from([3]));
    /// assert_eq!(b, List::from([1, 2]));
    /// assert_eq!(b.get(two), Ok(&2));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        trace!("swapping lists of {} and {} elements", self.len, other.len);
        std::mem::swap(self, other);
        self.check();
        other.check();
    }

    /// Releases every element of the list, then takes over all the nodes of
    /// `other`, leaving `other` empty.
    ///
    /// Moving out of a list by value is done with `std::mem::take`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut a = List::from([1, 2]);
    /// let mut b = List::from([3, 4, 5]);
    ///
    /// a.move_from(&mut b);
    /// assert_eq!(a, List::from([3, 4, 5]));
    /// assert!(b.is_empty());
    ///
    /// let c = std::mem::take(&mut a);
    /// assert_eq!(c.len(), 3);
    /// assert_eq!(a.len(), 0);
    /// ```
    pub fn move_from(&mut self, other: &mut Self) {
        trace!("moving {} elements into a list of {}", other.len, self.len);
        self.clear();
        self.swap(other);
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

impl<T> Node<T> {
    /// Create a node holding `element`, linked to `prev` and `next`.
    pub(crate) fn new(element: T, prev: Option<usize>, next: Option<usize>) -> Self {
        Node {
            element,
            prev,
            next,
            stamp: NEXT_STAMP.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub(crate) fn into_element(self) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;

    fn assert_list<T: std::fmt::Debug + PartialEq + Clone>(list: &List<T>, expected: &[T]) {
        list.assert_invariants();
        assert_eq!(list.len(), expected.len());
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(
            list.iter().rev().cloned().collect::<Vec<_>>(),
            expected.iter().rev().cloned().collect::<Vec<_>>()
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        let position = list.begin();
        list.insert(position, DropChecker::new(0, &dropped)).unwrap();
        list.erase(position).unwrap();
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 0, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(ListError::OutOfRange));
        assert_eq!(list.back(), Err(ListError::OutOfRange));
        assert_eq!(list.pop_front(), Err(ListError::Underflow));
        assert_eq!(list.pop_back(), Err(ListError::Underflow));
        assert_list(&list, &[]);

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(ListError::Underflow));
        assert_list(&list, &[]);

        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        assert_list(&list, &[0, 1, 2]);
        assert_eq!(list.front(), Ok(&0));
        assert_eq!(list.back(), Ok(&2));

        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list.pop_back(), Ok(2));
        assert_list(&list, &[1]);
        assert_eq!(list.front(), list.back());

        assert_eq!(list.pop_back(), Ok(1));
        assert_list(&list, &[]);
    }

    #[test]
    fn list_push_pop_round_trip() {
        let mut list = List::from([1, 2, 3]);
        let original = list.clone();

        list.push_back(4);
        assert_eq!(list.pop_back(), Ok(4));
        assert_eq!(list, original);

        list.push_front(0);
        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list, original);
        assert_list(&list, &[1, 2, 3]);
    }

    #[test]
    fn list_front_back_mut() {
        let mut list = List::from([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_list(&list, &[10, 2, 30]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), Err(ListError::OutOfRange));
        assert_eq!(empty.back_mut(), Err(ListError::OutOfRange));
    }

    #[test]
    fn list_empty_access_is_out_of_range() {
        let mut list = List::from([1]);
        assert_eq!(list.pop_back(), Ok(1));

        // the same condition as dereferencing the off-the-end position
        assert_eq!(list.front(), list.cursor_end().current());
        assert_eq!(list.back(), list.get(list.end()));
        assert!(matches!(list.front(), Err(ListError::OutOfRange)));
        assert!(matches!(list.back_mut(), Err(ListError::OutOfRange)));
        assert_list(&list, &[]);
    }

    #[cfg(feature = "strict-invariants")]
    #[test]
    fn list_checks_after_every_change() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut list = List::from([1, 2]);
        list.len += 1;
        let result = catch_unwind(AssertUnwindSafe(|| list.push_back(3)));
        assert!(result.is_err(), "a broken length went unnoticed");

        // repair the length so that dropping the list passes the checks again
        list.len = list.nodes.len();
        assert_list(&list, &[1, 2, 3]);
        assert_eq!(list.pop_front(), Ok(1));
        list.insert(list.end(), 4).unwrap();
        assert_list(&list, &[2, 3, 4]);
    }

    #[test]
    fn list_insert() {
        let mut list = List::from([0, 1, 2]);
        let one = list.next_position(list.begin()).unwrap();
        let nine = list.insert(one, 9).unwrap();
        assert_eq!(list.get(nine), Ok(&9));
        assert_eq!(list.get(one), Ok(&1));
        assert_list(&list, &[0, 9, 1, 2]);

        let front = list.insert(list.begin(), -1).unwrap();
        assert_eq!(front, list.begin());
        assert_list(&list, &[-1, 0, 9, 1, 2]);

        let back = list.insert(list.end(), 3).unwrap();
        assert_eq!(list.next_position(back), Ok(list.end()));
        assert_list(&list, &[-1, 0, 9, 1, 2, 3]);

        let mut empty = List::new();
        let only = empty.insert(empty.end(), 7).unwrap();
        assert_eq!(only, empty.begin());
        assert_list(&empty, &[7]);
    }

    #[test]
    fn list_erase() {
        let mut list = List::from_iter(0..5);
        let end = list.end();
        assert_eq!(list.erase(end), Ok(end));
        assert_list(&list, &[0, 1, 2, 3, 4]);

        let first = list.begin();
        let next = list.erase(first).unwrap();
        assert_eq!(next, list.begin());
        assert_eq!(list.get(next), Ok(&1));
        assert_list(&list, &[1, 2, 3, 4]);

        let last = list.prev_position(list.end()).unwrap();
        assert_eq!(list.erase(last), Ok(list.end()));
        assert_list(&list, &[1, 2, 3]);

        let two = list.next_position(list.begin()).unwrap();
        let three = list.next_position(two).unwrap();
        assert_eq!(list.erase(two), Ok(three));
        assert_list(&list, &[1, 3]);

        // the positions of the remaining elements are still valid
        assert_eq!(list.get(three), Ok(&3));
        let only = list.erase(list.begin()).unwrap();
        assert_eq!(list.erase(only), Ok(list.end()));
        assert_list(&list, &[]);
    }

    #[test]
    fn list_stale_positions() {
        let mut list = List::from([0, 1, 2]);
        let zero = list.begin();
        list.erase(zero).unwrap();
        assert_eq!(list.get(zero), Err(ListError::InvalidPosition));
        assert_eq!(list.erase(zero), Err(ListError::InvalidPosition));
        assert_eq!(list.insert(zero, 5), Err(ListError::InvalidPosition));
        assert_eq!(list.next_position(zero), Err(ListError::InvalidPosition));
        assert_eq!(list.prev_position(zero), Err(ListError::InvalidPosition));
        assert!(list.cursor(zero).is_err());

        // the arena may hand the slot of `zero` to the new node, but never its stamp
        list.push_back(3);
        assert_eq!(list.get(zero), Err(ListError::InvalidPosition));
        assert_list(&list, &[1, 2, 3]);

        let other = list.clone();
        assert_eq!(other.get(list.begin()), Err(ListError::InvalidPosition));
        assert_eq!(other.get(other.end()), Err(ListError::OutOfRange));
    }

    #[test]
    fn list_end_position() {
        let mut list = List::new();
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.end(), list.end());
        assert_eq!(list.prev_position(list.end()), Err(ListError::OutOfRange));
        list.push_back(1);
        assert_ne!(list.begin(), list.end());
        assert_eq!(list.end(), List::<u8>::new().end());
    }

    #[test]
    fn list_len_equals_steps() {
        for n in 0..6 {
            let list = List::from_iter(0..n);
            let (mut position, mut steps) = (list.begin(), 0);
            while position != list.end() {
                position = list.next_position(position).unwrap();
                steps += 1;
            }
            assert_eq!(steps, list.len());
        }
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..10);
        list.clear();
        assert_list(&list, &[]);
        list.clear();
        assert_list(&list, &[]);
        list.push_front(1);
        assert_list(&list, &[1]);
    }

    #[test]
    fn list_swap_and_move() {
        let mut a = List::from([1, 2, 3]);
        let mut b = List::from([4]);
        let three = a.prev_position(a.end()).unwrap();
        a.swap(&mut b);
        assert_list(&a, &[4]);
        assert_list(&b, &[1, 2, 3]);
        assert_eq!(b.get(three), Ok(&3));

        a.move_from(&mut b);
        assert_list(&a, &[1, 2, 3]);
        assert_list(&b, &[]);

        let c = std::mem::take(&mut a);
        assert_list(&c, &[1, 2, 3]);
        assert_list(&a, &[]);
        assert_eq!(c.get(three), Ok(&3));
    }
}
