use crate::error::{ListError, Result};
use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

mod sort;

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

    /// Clears `self` and reinserts a copy of every element of `source`.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.iter().cloned());
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

/// Formats the list as `[a, b, c]`, or `[]` when it is empty.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elt) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elt, f)?;
        }
        f.write_str("]")
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
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

    /// Returns the position of the first element equal to `x`, or `None` if
    /// there is none.
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
    /// let list = List::from(['a', 'b', 'a']);
    /// assert_eq!(list.position(&'a'), Some(0));
    /// assert_eq!(list.position(&'b'), Some(1));
    /// assert_eq!(list.position(&'z'), None);
    /// ```
    pub fn position(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Counts the elements equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let list = List::from([1, 2, 1, 1]);
    /// assert_eq!(list.count(&1), 3);
    /// assert_eq!(list.count(&5), 0);
    /// ```
    pub fn count(&self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        self.iter().filter(|e| *e == x).count()
    }

    /// Swaps the elements at positions `a` and `b`. The nodes themselves stay
    /// where they are; swapping a position with itself does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if either position is `>= len`, in
    /// which case the list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// list.swap(0, 2).unwrap();
    /// assert_eq!(list, List::from([3, 2, 1, 4]));
    /// assert!(list.swap(1, 4).is_err());
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let x = self.node_at(a)?;
        let y = self.node_at(b)?;
        self.swap_elements(x, y);
        Ok(())
    }

    /// Reverses the order of the elements in place.
    ///
    /// Two cursors start from both ends and exchange their elements while
    /// moving towards each other, so the links are never rewritten.
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
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// list.reverse();
    /// assert_eq!(list, List::from([5, 4, 3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        let (mut front, mut back) = (self.front_node(), self.back_node());
        // the cursors meet in the middle after `len / 2` exchanges
        for _ in 0..self.len() / 2 {
            let (Some(x), Some(y)) = (front, back) else {
                break;
            };
            self.swap_elements(x, y);
            front = self.next_of(x);
            back = self.prev_of(y);
        }
    }

    /// Sort the list in ascending order.
    ///
    /// This sort is unstable (i.e., may reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time on average,
    /// and *O*(*n*<sup>2</sup>) in the worst case (e.g. an already sorted list).
    /// It uses *O*(log(*n*)) stack and no other memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a quicksort over ranges of nodes, taking the
    /// last node of a range as its pivot. Elements are exchanged between
    /// nodes; the links of the list are never rewritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    /// let mut list = List::from([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::quick_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is unstable (i.e., may reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified. After sorting, no pair of adjacent
    /// elements `(a, b)` has `compare(a, b) == Ordering::Greater`.
    ///
    /// For example, while [`f64`] doesn’t implement [`Ord`] because
    /// `NaN != NaN`, we can use `total_cmp` as our sort function.
    /// ```
    /// use bidir_list::List;
    /// let mut floats = List::from([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.total_cmp(b));
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v, List::from([1, 2, 3, 4, 5]));
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v, List::from([5, 4, 3, 2, 1]));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quick_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is unstable (i.e., may reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort::quick_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Replaces the contents of the list with the elements of `iter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.assign([7, 8]);
    /// assert_eq!(list, List::from([7, 8]));
    /// ```
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(iter);
    }

    /// Appends a copy of every element of `slice` to the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::List;
    ///
    /// let mut list = List::from([String::from("a")]);
    /// list.extend_from_slice(&[String::from("b"), String::from("c")]);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn extend_from_slice(&mut self, slice: &[T])
    where
        T: Clone,
    {
        self.extend(slice.iter().cloned());
    }

    /// Renders the elements as `[a, b, c]`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty, since there
    /// is nothing to render. Use the [`Display`](fmt::Display) implementation
    /// to get `[]` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidir_list::{List, ListError};
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.render().as_deref(), Ok("[1, 2, 3]"));
    ///
    /// list.clear();
    /// assert_eq!(list.render(), Err(ListError::EmptyContainer));
    /// ```
    pub fn render(&self) -> Result<String>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        Ok(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::List;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn list_scenario() {
        let mut list = List::from([5, 3, 8, 1, 9]);
        list.sort();
        assert_eq!(list, List::from([1, 3, 5, 8, 9]));
        assert_eq!(list.position(&8), Some(3));
        assert_eq!(list.count(&3), 1);
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list, List::from([3, 5, 8, 9]));
        list.push_front(0);
        assert_eq!(list, List::from([0, 3, 5, 8, 9]));
        list.reverse();
        assert_eq!(list, List::from([9, 8, 5, 3, 0]));
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn list_empty_preconditions() {
        let mut list = List::<i32>::new();
        assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
        assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
        assert_eq!(list.render(), Err(ListError::EmptyContainer));
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn list_sort_orders() {
        fn check_sorted<F>(list: &List<i32>, mut compare: F)
        where
            F: FnMut(&i32, &i32) -> Ordering,
        {
            let elements = Vec::from_iter(list.iter().copied());
            for pair in elements.windows(2) {
                assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
        let input = [7, -2, 7, 0, 13, 5, -2, 8, 1, 1, 4];
        let mut list = List::from(input);
        list.sort();
        check_sorted(&list, |a, b| a.cmp(b));

        list.sort_by(|a, b| b.cmp(a));
        check_sorted(&list, |a, b| b.cmp(a));

        list.sort_by_key(|x| (x % 3, *x));
        check_sorted(&list, |a, b| (a % 3, *a).cmp(&(b % 3, *b)));

        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        list.sort();
        assert_eq!(Vec::from_iter(list), sorted);
    }

    #[test]
    fn list_swap() {
        let original = [1, 2, 3, 4, 5];
        let mut list = List::from(original);
        for (a, b) in [(0, 4), (1, 3), (2, 2), (4, 0), (0, 1)] {
            list.swap(a, b).unwrap();
            assert_eq!(list[a], original[b]);
            assert_eq!(list[b], original[a]);
            list.swap(a, b).unwrap();
            assert_eq!(list, List::from(original));
        }
        assert_eq!(
            list.swap(0, 5),
            Err(ListError::OutOfRange {
                position: 5,
                len: 5
            })
        );
        assert_eq!(
            list.swap(usize::MAX, 0),
            Err(ListError::OutOfRange {
                position: usize::MAX,
                len: 5
            })
        );
        assert_eq!(list, List::from(original));
    }

    #[test]
    fn list_reverse() {
        for len in 0..6 {
            let mut list = List::from_iter(0..len);
            list.reverse();
            assert_eq!(list, List::from_iter((0..len).rev()));
            list.reverse();
            assert_eq!(list, List::from_iter(0..len));
            assert_eq!(list.validate(), Ok(()));
        }
    }

    #[test]
    fn list_clone_and_assign() {
        let list = List::from_iter(0..5);
        let mut cloned = list.clone();
        assert_eq!(cloned, list);

        cloned.push_back(5);
        assert_ne!(cloned, list);

        let mut target = List::from([9, 9]);
        target.clone_from(&list);
        assert_eq!(target, list);
        assert_eq!(target.validate(), Ok(()));

        target.assign(Vec::new());
        assert!(target.is_empty());
        target.extend_from_slice(&[1, 2]);
        assert_eq!(target, List::from([1, 2]));
    }

    #[test]
    fn list_hash_and_order() {
        fn hash_of(list: &List<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from([1, 2, 3]);
        let b = List::from_iter(1..4);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
    }

    #[test]
    fn list_render() {
        let list = List::from(["x", "y"]);
        assert_eq!(list.render(), Ok(String::from("[x, y]")));
        assert_eq!(format!("{:?}", list), r#"["x", "y"]"#);
    }
}
