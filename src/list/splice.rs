//! Relinking operations that move nodes between lists, or inside a list,
//! without touching the elements.

use std::ops::RangeBounds;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::node::Node;
use crate::list::{resolve_range, List};

impl<T> List<T> {
    /// Walk `count - 1` nodes forward from `front` and return the last node
    /// of the closed range `front..=back`.
    fn range_back(front: NonNull<Node<T>>, count: usize) -> NonNull<Node<T>> {
        let mut back = front;
        // SAFETY: the caller passes the length of a range of data nodes.
        (1..count).for_each(|_| back = unsafe { Node::next(back) });
        back
    }

    fn check_position(&self, at: usize) -> Result<()> {
        if at > self.len {
            return Err(Error::OutOfRange {
                index: at,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Moves the elements in `range` of `other` before position `at` of
    /// `self`, in their original order. No element is copied or dropped.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if `range` is reversed or empty;
    /// - [`Error::OutOfRange`] if `range` ends after `other.len()`, or if
    ///   `at > self.len()`.
    ///
    /// Both lists are left untouched on error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*i* + *k*) time, where *k* is the
    /// number of moved elements, which have to be walked to keep both
    /// lengths exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut other = List::from([4, 5, 6, 7]);
    ///
    /// list.splice_range(1, &mut other, 1..3).unwrap();
    /// assert_eq!(list, List::from([1, 5, 6, 2, 3]));
    /// assert_eq!(other, List::from([4, 7]));
    ///
    /// assert_eq!(
    ///     list.splice_range(0, &mut other, 1..1),
    ///     Err(Error::InvalidRange { start: 1, end: 1 })
    /// );
    /// ```
    pub fn splice_range<R>(&mut self, at: usize, other: &mut List<T>, range: R) -> Result<()>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(range, other.len)?;
        if start == end {
            return Err(Error::InvalidRange { start, end });
        }
        self.check_position(at)?;

        let count = end - start;
        let front = other.node_at(start);
        let back = List::range_back(front, count);
        let target = self.node_at(at);
        // SAFETY: `front..=back` is a range of `count` data nodes of `other`,
        // and `target` is a node of `self`, which is a different list.
        unsafe {
            let detached = other.detach_nodes(front, back, count);
            self.attach_nodes(target, detached);
        }
        Ok(())
    }

    /// Moves the element at `index` of `other` before position `at` of `self`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `index >= other.len()` or
    /// `at > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from(['a', 'c']);
    /// let mut other = List::from(['b']);
    ///
    /// list.splice_one(1, &mut other, 0).unwrap();
    /// assert_eq!(list, List::from(['a', 'b', 'c']));
    /// assert!(other.is_empty());
    /// assert!(list.splice_one(0, &mut other, 0).is_err());
    /// ```
    pub fn splice_one(&mut self, at: usize, other: &mut List<T>, index: usize) -> Result<()> {
        other.check_index(index)?;
        self.splice_range(at, other, index..=index)
    }

    /// Moves every element of `other` before position `at` of `self`,
    /// leaving `other` empty.
    ///
    /// Splicing an empty list does nothing.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `at > self.len()`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 4]);
    /// let mut other = List::from([2, 3]);
    ///
    /// list.splice_all(1, &mut other).unwrap();
    /// assert_eq!(list, List::from([1, 2, 3, 4]));
    /// assert!(other.is_empty());
    ///
    /// list.splice_all(4, &mut other).unwrap();
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn splice_all(&mut self, at: usize, other: &mut List<T>) -> Result<()> {
        self.check_position(at)?;
        if let Some(detached) = other.detach_all_nodes() {
            let target = self.node_at(at);
            // SAFETY: `target` is a node of `self`.
            unsafe { self.attach_nodes(target, detached) };
        }
        Ok(())
    }

    /// Moves the elements in `range` before position `at` of the same list.
    ///
    /// Relocating a range to its own start or end does nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if `range` is reversed or empty, or if `at`
    ///   lies strictly inside of it;
    /// - [`Error::OutOfRange`] if `range` ends after `len`, or if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    ///
    /// list.relocate(3..5, 1).unwrap();
    /// assert_eq!(list, List::from([0, 3, 4, 1, 2, 5]));
    ///
    /// list.relocate(0..2, 6).unwrap();
    /// assert_eq!(list, List::from([4, 1, 2, 5, 0, 3]));
    ///
    /// assert_eq!(list.relocate(1..4, 2), Err(Error::InvalidRange { start: 1, end: 4 }));
    /// ```
    pub fn relocate<R>(&mut self, range: R, at: usize) -> Result<()>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(range, self.len)?;
        if start == end || (start < at && at < end) {
            return Err(Error::InvalidRange { start, end });
        }
        self.check_position(at)?;
        if at == start || at == end {
            return Ok(());
        }

        let front = self.node_at(start);
        let back = List::range_back(front, end - start);
        let target = self.node_at(at);
        // SAFETY: `front..=back` is a range of data nodes of the list, and
        // `target` lies outside of it.
        unsafe { Node::move_range_before(front, back, target) };
        Ok(())
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, List::from(['a', 'b', 'c']));
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the ghost node belongs to the list.
            unsafe { self.attach_nodes(self.ghost_node(), detached) };
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the front node belongs to the list.
            unsafe { self.attach_nodes(self.front_node(), detached) };
        }
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index, including the index.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let tail = list.split_off(1);
    ///
    /// assert_eq!(list, List::from([1]));
    /// assert_eq!(tail, List::from([2, 3]));
    /// ```
    pub fn split_off(&mut self, at: usize) -> List<T> {
        self.cursor_mut(at).split().unwrap_or_default()
    }

    /// Moves all elements of `other` before position `at`, consuming `other`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 6]);
    /// list.splice_at(2, List::from([3, 4, 5]));
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5, 6]));
    /// ```
    pub fn splice_at(&mut self, at: usize, other: Self) {
        self.cursor_mut(at).splice(other);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::node::live;
    use crate::list::tests::assert_well_formed;
    use crate::list::List;
    use std::iter::FromIterator;

    fn to_vec(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn splice_range_moves_nodes() {
        let before = live::count();
        let mut list = List::from_iter(0..4);
        let mut other = List::from_iter(10..15);
        let addresses: Vec<*const i32> = other
            .iter()
            .skip(1)
            .take(3)
            .map(|x| x as *const _)
            .collect();

        list.splice_range(2, &mut other, 1..4).unwrap();
        assert_eq!(to_vec(&list), vec![0, 1, 11, 12, 13, 2, 3]);
        assert_eq!(to_vec(&other), vec![10, 14]);
        // The very same nodes now live in `list`.
        let moved: Vec<*const i32> = list.iter().skip(2).take(3).map(|x| x as *const _).collect();
        assert_eq!(moved, addresses);
        assert_eq!(live::count(), before + 9);
        assert_well_formed(&list);
        assert_well_formed(&other);
    }

    #[test]
    fn splice_range_at_both_ends() {
        let mut list = List::from_iter(0..3);
        let mut other = List::from_iter(10..16);
        list.splice_range(0, &mut other, ..2).unwrap();
        list.splice_range(5, &mut other, 2..).unwrap();
        assert_eq!(to_vec(&list), vec![10, 11, 0, 1, 2, 14, 15]);
        list.splice_range(7, &mut other, ..).unwrap();
        assert_eq!(to_vec(&list), vec![10, 11, 0, 1, 2, 14, 15, 12, 13]);
        assert!(other.is_empty());
        assert_well_formed(&list);
        assert_well_formed(&other);
    }

    #[test]
    fn splice_range_errors_leave_lists_untouched() {
        let mut list = List::from_iter(0..3);
        let mut other = List::from_iter(10..13);
        assert_eq!(
            list.splice_range(0, &mut other, 2..2),
            Err(Error::InvalidRange { start: 2, end: 2 })
        );
        assert_eq!(
            list.splice_range(0, &mut other, 2..1),
            Err(Error::InvalidRange { start: 2, end: 1 })
        );
        assert_eq!(
            list.splice_range(0, &mut other, 1..4),
            Err(Error::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            list.splice_range(4, &mut other, 0..1),
            Err(Error::OutOfRange { index: 4, len: 3 })
        );
        let mut empty = List::new();
        assert!(list.splice_range(0, &mut empty, ..).is_err());
        assert_eq!(to_vec(&list), vec![0, 1, 2]);
        assert_eq!(to_vec(&other), vec![10, 11, 12]);
    }

    #[test]
    fn splice_one_and_all() {
        let mut list = List::from_iter(0..2);
        let mut other = List::from_iter(10..13);
        list.splice_one(1, &mut other, 2).unwrap();
        assert_eq!(to_vec(&list), vec![0, 12, 1]);
        assert_eq!(
            list.splice_one(0, &mut other, 2),
            Err(Error::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            list.splice_all(4, &mut other),
            Err(Error::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(other.len(), 2);
        list.splice_all(3, &mut other).unwrap();
        assert_eq!(to_vec(&list), vec![0, 12, 1, 10, 11]);
        assert!(other.is_empty());
        list.splice_all(0, &mut other).unwrap();
        assert_eq!(list.len(), 5);
        assert_well_formed(&list);
        assert_well_formed(&other);
    }

    #[test]
    fn relocate_inside_list() {
        let mut list = List::from_iter(0..6);
        list.relocate(0..1, 6).unwrap();
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5, 0]);
        list.relocate(4..6, 0).unwrap();
        assert_eq!(to_vec(&list), vec![5, 0, 1, 2, 3, 4]);
        // No-ops at the range boundaries.
        list.relocate(1..3, 1).unwrap();
        list.relocate(1..3, 3).unwrap();
        assert_eq!(to_vec(&list), vec![5, 0, 1, 2, 3, 4]);
        assert_eq!(list.relocate(1..3, 2), Err(Error::InvalidRange { start: 1, end: 3 }));
        assert_eq!(list.relocate(2..2, 0), Err(Error::InvalidRange { start: 2, end: 2 }));
        assert_eq!(list.relocate(0..1, 7), Err(Error::OutOfRange { index: 7, len: 6 }));
        assert_eq!(list.len(), 6);
        assert_well_formed(&list);
    }

    #[test]
    fn append_prepend_split() {
        let mut list = List::from_iter(3..5);
        let mut other = List::from_iter(0..3);
        list.prepend(&mut other);
        other.extend(5..7);
        list.append(&mut other);
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(other.is_empty());

        let tail = list.split_off(4);
        assert_eq!(to_vec(&tail), vec![4, 5, 6]);
        assert!(list.split_off(4).is_empty());
        list.splice_at(1, tail);
        assert_eq!(to_vec(&list), vec![0, 4, 5, 6, 1, 2, 3]);
        assert_well_formed(&list);
    }
}
