use crate::list::List;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a `List`.
///
/// It keeps the two ends `front..=back` of the elements not yielded yet,
/// together with their count.
///
/// # Examples
///
/// ```compile_fail
/// use dlist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.head,
            back: list.tail,
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// The nodes of a list live in one arena, so the mutable references are
/// split off the arena up front and queued in list order.
///
/// # Complexity
///
/// Unlike [`Iter`], creating an `IterMut` is not free: it walks the whole
/// arena and allocates two buffers, taking *O*(*capacity*) time and space
/// before the first element is yielded. Each step after that is *O*(1).
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use dlist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    elements: VecDeque<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let (mut current, len) = (list.head, list.len);
        let mut slots = Vec::new();
        for (index, node) in list.nodes.iter_mut() {
            if slots.len() <= index {
                slots.resize_with(index + 1, || None);
            }
            slots[index] = Some((&mut node.element, node.next));
        }
        let mut elements = VecDeque::with_capacity(len);
        while let Some((element, next)) = current.and_then(|index| slots[index].take()) {
            elements.push_back(element);
            current = next;
        }
        Self { elements }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.elements).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.elements.len(), Some(self.elements.len()))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.pop_back()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Build a list from a literal ordered list of elements.
///
/// # Examples
///
/// ```
/// use dlist::List;
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Ok(&1));
/// assert_eq!(list.back(), Ok(&3));
/// ```
impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_iter(elements)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
