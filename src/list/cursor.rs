use crate::error::ListError;
use crate::list::List;
use std::fmt;
use std::fmt::Formatter;

/// A position in a `List`: either one of its elements, or the off-the-end
/// position [`Position::END`].
///
/// A `Position` is a plain value. It does not borrow the list, so it can be
/// kept while the list is edited and handed back to [`List::insert`] or
/// [`List::erase`]. Removing the element a position names makes the position
/// stale; the list rejects stale positions (and positions of other lists)
/// with [`ListError::InvalidPosition`].
///
/// # Examples
///
/// ```
/// use dlist::{List, ListError, Position};
///
/// let mut list = List::from(['A', 'B', 'C']);
/// let b = list.next_position(list.begin()).unwrap();
///
/// list.push_front('Z');
/// assert_eq!(list.get(b), Ok(&'B'));
///
/// list.erase(b).unwrap();
/// assert_eq!(list.get(b), Err(ListError::InvalidPosition));
///
/// assert_eq!(list.end(), Position::END);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position(Option<Handle>);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Handle {
    pub(crate) index: usize,
    pub(crate) stamp: u64,
}

impl Position {
    /// The off-the-end position, one past the last element of any list.
    pub const END: Position = Position(None);

    pub(crate) fn new(index: usize, stamp: u64) -> Self {
        Position(Some(Handle { index, stamp }))
    }

    pub(crate) fn handle(self) -> Option<Handle> {
        self.0
    }

    /// Returns `true` for the off-the-end position.
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::END
    }
}

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor:
/// the *n* elements and the off-the-end position.
///
/// # Examples
///
/// ```
/// use dlist::{List, ListError};
///
/// // Create a list: [ A B C D #]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #]
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Ok(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// cursor.move_next();
/// assert_eq!(cursor.current(), Ok(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), Err(ListError::OutOfRange));
///
/// // Moving forward from the end stays at the end
/// cursor.move_next();
/// assert!(cursor.is_end());
///
/// // Move cursor backward: [ A B C|D #]
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Ok(&'D'));
///
/// // Moving backward from the first element fails and the cursor stays put
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.move_prev(), Err(ListError::OutOfRange));
/// assert_eq!(cursor.current(), Ok(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: Option<usize>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by their positions.
///
/// Only cursors belonging to the same list and having the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use dlist::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different lists.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like a [`Cursor`], except that it can also mutate the list
/// at its position. Because it borrows the list mutably, the lifetime of the
/// references it yields is tied to the cursor itself.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the list
/// immutably.
///
/// # Examples
///
/// ```compile_fail
/// use dlist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: Option<usize>,
    pub(crate) list: &'a mut List<T>,
}

/// A read-only view of the node a cursor is on, exposing its links.
///
/// # Examples
///
/// ```
/// use dlist::List;
///
/// let list = List::from([1, 2, 3]);
/// let node = list.cursor_start().node().unwrap();
/// assert_eq!(node.element(), &1);
/// assert!(node.prev().is_none());
/// assert_eq!(node.next().map(|next| *next.element()), Some(2));
/// ```
pub struct NodeRef<'a, T: 'a> {
    list: &'a List<T>,
    index: usize,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns the position of the cursor, which can outlive the cursor.
            pub fn position(&self) -> Position {
                self.list.position_of(self.current)
            }

            /// Returns `true` if the cursor is at the off-the-end position.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position. At the off-the-end
            /// position the cursor stays put.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use dlist::List;
            ///
            /// let list = List::from([1]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_next();
            /// assert!(cursor.is_end());
            ///
            /// cursor.move_next();
            /// assert!(cursor.is_end());
            /// ```
            pub fn move_next(&mut self) {
                self.current = self.list.next_of(self.current);
            }

            /// Move the cursor to the previous position, or return an error
            /// when there is no previous element. Moving backward from the
            /// off-the-end position reaches the last element.
            ///
            /// If an error occurs, the cursor stays put.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use dlist::{List, ListError};
            ///
            /// let list = List::from([1, 2]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.move_prev().is_ok());
            /// assert_eq!(cursor.current(), Ok(&2));
            /// assert!(cursor.move_prev().is_ok());
            /// assert_eq!(cursor.current(), Ok(&1));
            ///
            /// assert_eq!(cursor.move_prev(), Err(ListError::OutOfRange));
            /// assert_eq!(cursor.current(), Ok(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), ListError> {
                match self.list.prev_of(self.current) {
                    Some(prev) => {
                        self.current = Some(prev);
                        Ok(())
                    }
                    None => Err(ListError::OutOfRange),
                }
            }

            /// Set the cursor to the start of the list (i.e. the first element,
            /// or the off-the-end position of an empty list).
            #[inline]
            pub fn move_to_start(&mut self) {
                self.current = self.list.head;
            }

            /// Set the cursor to the off-the-end position.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.current = None;
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current().ok())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<usize>) -> Self {
        Self { current, list }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference to the element at the cursor, or
    /// [`ListError::OutOfRange`] at the off-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let list = List::from([1, 2]);
    /// let mut cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Ok(&1));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), Ok(&2));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), Err(ListError::OutOfRange));
    /// ```
    pub fn current(&self) -> Result<&'a T, ListError> {
        match self.current {
            Some(index) => Ok(&self.list.nodes[index].element),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Return an immutable reference to the element before the cursor, or
    /// `None` if the cursor is at the first element.
    pub fn previous(&self) -> Option<&'a T> {
        let list = self.list;
        list.prev_of(self.current)
            .map(|prev| &list.nodes[prev].element)
    }

    /// Return the node at the cursor, or `None` at the off-the-end position.
    pub fn node(&self) -> Option<NodeRef<'a, T>> {
        let list = self.list;
        self.current.map(|index| NodeRef { list, index })
    }

    /// The list the cursor walks over.
    pub fn view(&self) -> &'a List<T> {
        self.list
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Option<usize>) -> Self {
        Self { current, list }
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference to the element at the cursor, or
    /// [`ListError::OutOfRange`] at the off-the-end position.
    pub fn current(&self) -> Result<&T, ListError> {
        match self.current {
            Some(index) => Ok(&self.list.nodes[index].element),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Return a mutable reference to the element at the cursor, or
    /// [`ListError::OutOfRange`] at the off-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Ok(&5));
    ///
    /// // Cannot mutate the off-the-end position.
    /// assert_eq!(list.cursor_end_mut().current_mut(), Err(ListError::OutOfRange));
    /// ```
    pub fn current_mut(&mut self) -> Result<&mut T, ListError> {
        match self.current {
            Some(index) => Ok(&mut self.list.nodes[index].element),
            None => Err(ListError::OutOfRange),
        }
    }

    /// Return an immutable reference to the element before the cursor, or
    /// `None` if the cursor is at the first element.
    pub fn previous(&self) -> Option<&T> {
        self.list
            .prev_of(self.current)
            .map(|prev| &self.list.nodes[prev].element)
    }

    /// Return the node at the cursor, or `None` at the off-the-end position.
    pub fn node(&self) -> Option<NodeRef<'_, T>> {
        let list = &*self.list;
        self.current.map(|index| NodeRef { list, index })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.view().back(), Ok(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(list, List::from([4, 1, 2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element first in the list. The cursor stays on its element.
    ///
    /// It is the same as [`List::push_front`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used.
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
    }

    /// Append an element to the back of the list. The cursor stays on its
    /// element, or at the off-the-end position.
    pub fn push_back(&mut self, item: T) {
        self.list.push_back(item);
    }

    /// Remove the first element and return it, or return
    /// [`ListError::Underflow`] if the list is empty.
    ///
    /// A cursor on the removed element moves to the next one.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.pop_front(), Ok(1));
    /// assert_eq!(cursor.current(), Ok(&2));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.current.is_some() && self.current == self.list.head {
            self.move_next();
        }
        self.list.pop_front()
    }

    /// Remove the last element and return it, or return
    /// [`ListError::Underflow`] if the list is empty.
    ///
    /// A cursor on the removed element moves to the off-the-end position.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.current.is_some() && self.current == self.list.tail {
            self.move_to_end();
        }
        self.list.pop_back()
    }

    /// Add an element before the cursor position. The cursor stays on its
    /// element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.move_next();
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.current(), Ok(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(list, List::from([1, 4, 2, 3, 5]));
    /// ```
    pub fn insert(&mut self, item: T) {
        let prev = self.list.prev_of(self.current);
        self.list.attach_node(prev, self.current, item);
        self.list.check();
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the off-the-end position. After removal, the
    /// cursor is moved to the next position.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.move_next();
    ///
    /// assert_eq!(cursor.remove(), Some(1)); // becomes [0, 2, 3, 4]
    /// assert_eq!(cursor.current(), Ok(&2));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert!(cursor.is_end());
    ///
    /// assert_eq!(list, List::from([0, 2, 3, 4]));
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let index = self.current?;
        let next = self.list.next_of(self.current);
        let node = self.list.detach_node(index)?;
        self.current = next;
        self.list.check();
        Some(node.into_element())
    }
}

impl<'a, T: 'a> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for NodeRef<'a, T> {}

impl<'a, T: 'a> NodeRef<'a, T> {
    fn at(&self, index: Option<usize>) -> Option<NodeRef<'a, T>> {
        let list = self.list;
        index.map(|index| NodeRef { list, index })
    }

    /// The element held by the node.
    pub fn element(&self) -> &'a T {
        &self.list.nodes[self.index].element
    }

    /// The node before this one, or `None` for the first node.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.at(self.list.nodes[self.index].prev)
    }

    /// The node after this one, or `None` for the last node.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.at(self.list.nodes[self.index].next)
    }

    /// The position of the node.
    pub fn position(&self) -> Position {
        self.list.position_of(Some(self.index))
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("element", self.element())
            .field("position", &self.position())
            .finish()
    }
}
