use crate::list::List;
use log::trace;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Two lists are equal if they have the same length and their elements are
/// pairwise equal in order. The comparison stops at the first mismatch.
///
/// # Examples
///
/// ```
/// use dlist::List;
///
/// assert_eq!(List::from([1, 2, 3]), List::from([1, 2, 3]));
/// assert_ne!(List::from([1, 2, 3]), List::from([1, 2]));
/// assert_ne!(List::from([1, 2, 3]), List::from([3, 2, 1]));
/// ```
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrites the elements of `self` in place with those of `other`,
    /// appending or releasing nodes to match its length.
    fn clone_from(&mut self, other: &Self) {
        trace!("copying {} elements over a list of {}", other.len(), self.len());
        let mut cursor_mut = self.cursor_start_mut();
        for elem_other in other {
            match cursor_mut.current_mut() {
                Ok(elem) => elem.clone_from(elem_other),
                Err(_) => cursor_mut.insert(elem_other.clone()),
            }
            cursor_mut.move_next();
        }
        while cursor_mut.remove().is_some() {}
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        assert!(a == a);
        assert!(a == b && b == a);
        assert!(a != List::from([1, 2]));
        assert!(List::from([1, 2]) != a);
        assert!(a != List::from([3, 2, 1]));
        assert_eq!(List::<i32>::new(), List::new());
        assert_ne!(List::new(), List::from([0]));
    }

    #[test]
    fn list_eq_ignores_layout() {
        let mut a = List::from([0, 1, 2, 3]);
        a.pop_front().unwrap();
        a.push_back(4);
        let mut b = List::new();
        b.push_front(3);
        b.push_back(4);
        b.push_front(2);
        b.push_front(1);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_ord() {
        let a = List::from([1, 2, 3]);
        assert_eq!(a.cmp(&List::from([1, 2, 4])), Ordering::Less);
        assert_eq!(a.cmp(&List::from([1, 2])), Ordering::Greater);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert_eq!(
            List::from([1.0, f64::NAN]).partial_cmp(&List::from([1.0, 2.0])),
            None
        );
    }

    #[test]
    fn list_clone_independence() {
        let a = List::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.push_back(4);
        *b.front_mut().unwrap() = 10;
        b.erase(b.next_position(b.begin()).unwrap()).unwrap();
        assert_eq!(a, List::from([1, 2, 3]));
        assert_eq!(a.len(), 3);
        assert_eq!(b, List::from([10, 3, 4]));
        a.assert_invariants();
        b.assert_invariants();
    }

    #[test]
    fn list_clone_from() {
        fn test_clone_from(target: &[i32], source: &[i32]) {
            let mut list = List::from_iter(target.iter().copied());
            let source = List::from_iter(source.iter().copied());
            list.clone_from(&source);
            list.assert_invariants();
            assert_eq!(list, source);
        }
        test_clone_from(&[1, 2, 3], &[4, 5, 6]);
        test_clone_from(&[1, 2, 3], &[4]);
        test_clone_from(&[1], &[4, 5, 6]);
        test_clone_from(&[], &[4, 5]);
        test_clone_from(&[1, 2], &[]);
        test_clone_from(&[], &[]);
    }

    #[test]
    fn list_contains() {
        let list = List::from(["a", "b"]);
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"c"));
        assert!(!List::new().contains(&"a"));
    }
}
