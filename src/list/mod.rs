use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Bound, Index, IndexMut, RangeBounds};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::node::Node;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
pub(crate) mod node;
#[cfg(all(not(miri), test))]
mod proptests;
mod splice;

pub use algorithms::extract::ExtractIf;

/// A doubly-linked list with owned nodes, implemented as a cyclic list around
/// a payload-less ghost node.
///
/// Inserting and erasing at a known position take *O*(1) time, and every
/// reordering operation (splice, merge, sort, reverse) relinks nodes instead
/// of moving elements. In compromise, reaching a position by index takes
/// *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `ghost` to the ghost node, whose `next` is the first element
///   and whose `prev` is the last one (both are the ghost itself when the
///   list is empty);
/// - the number `len` of data nodes, kept up to date by every operation.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list positions, left inclusive and
///   right exclusive (probably the ghost node).
pub struct List<T> {
    ghost: NonNull<Node<T>>,
    /// the number of data nodes
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Nodes fragment detached from a list, used in list splitting or
/// splicing.
///
/// While detached, `front.prev` and `back.next` are stale and must not be
/// read.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: the ghost node lives as long as the list.
        unsafe { Node::next(self.ghost) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: the ghost node lives as long as the list.
        unsafe { Node::prev(self.ghost) }
    }

    /// The node at position `at`, walking from the nearer end of the list.
    /// Position `len` is the ghost node.
    pub(crate) fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at <= self.len);
        let mut node = self.ghost;
        // SAFETY: at most `len` steps are taken in either direction, so the
        // walk never leaves the cycle.
        unsafe {
            if at <= self.len / 2 {
                for _ in 0..=at {
                    node = Node::next(node);
                }
            } else {
                for _ in at..self.len {
                    node = Node::prev(node);
                }
            }
        }
        node
    }

    /// Acquire a node for `element` and link it before `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list.
    pub(crate) unsafe fn link_before(
        &mut self,
        next: NonNull<Node<T>>,
        element: T,
    ) -> NonNull<Node<T>> {
        let node = Node::acquire(element);
        Node::insert_before(node, next);
        self.len += 1;
        node
    }

    /// Unlink the data node `node` from the list and release it.
    ///
    /// It is unsafe because it does not check whether `node` is a data node
    /// of this list. Unlinking the ghost node, or a node of another list,
    /// makes both lists ill-formed.
    pub(crate) unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        debug_assert!(node != self.ghost, "Cannot unlink the ghost node");
        Node::detach(node);
        self.len -= 1;
        Node::release(node)
    }

    /// Detach the range `front..=back` of `len` nodes from the list.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid
    /// range of the list, or whether `len` is its length.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        self.len -= len;
        node::connect(Node::prev(front), Node::next(back));
        DetachedNodes { front, back, len }
    }

    /// Attach detached nodes to the list, right before `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        let prev = Node::prev(next);
        #[cfg(any(debug_assertions, feature = "check-links"))]
        node::assert_adjacent(prev, next);
        node::connect(prev, detached.front);
        node::connect(detached.back, next);
        self.len += detached.len;
    }

    /// Detach all nodes from the list, or return `None` if it is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `front_node()..=back_node()` is the whole, non-empty list.
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        // SAFETY: the ghost node belongs to the new list.
        unsafe { list.attach_nodes(list.ghost_node(), detached) };
        list
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use splice_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: Node::acquire_ghost(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a list of `n` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from_elem("a", 3);
    /// assert_eq!(list, List::from(["a", "a", "a"]));
    /// ```
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut list = List::new();
        if n > 0 {
            (1..n).for_each(|_| list.push_back(value.clone()));
            list.push_back(value);
        }
        list
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements of the `List`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is a data node.
        unsafe { Some(Node::element_mut(self.front_node())) }
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is a data node.
        unsafe { Some(Node::element_mut(self.back_node())) }
    }

    /// Like [`List::front`], but fails with [`Error::Empty`] on an empty list.
    pub fn try_front(&self) -> Result<&T> {
        self.front().ok_or(Error::Empty)
    }

    /// Like [`List::back`], but fails with [`Error::Empty`] on an empty list.
    pub fn try_back(&self) -> Result<&T> {
        self.back().ok_or(Error::Empty)
    }

    /// Provides a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{Error, List};
    ///
    /// let list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.at(1), Ok(&'b'));
    /// assert_eq!(list.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        // SAFETY: `index < len`, so the node is a data node.
        unsafe { Ok(Node::element(self.node_at(index))) }
    }

    /// Provides a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        // SAFETY: `index < len`, so the node is a data node.
        unsafe { Ok(Node::element_mut(self.node_at(index))) }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Adds an element first in the list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: the front node belongs to the list.
        unsafe { self.link_before(self.front_node(), elt) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is a data node.
        unsafe { Some(self.unlink(self.front_node())) }
    }

    /// Appends an element to the back of a list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: the ghost node belongs to the list.
        unsafe { self.link_before(self.ghost, elt) };
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is a data node.
        unsafe { Some(self.unlink(self.back_node())) }
    }

    /// Like [`List::pop_front`], but fails with [`Error::Empty`] on an empty
    /// list.
    pub fn try_pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(Error::Empty)
    }

    /// Like [`List::pop_back`], but fails with [`Error::Empty`] on an empty
    /// list.
    pub fn try_pop_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(Error::Empty)
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the ghost node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        if let Err(err) = cursor.seek_to(at) {
            panic!("Cannot create cursor: {}", err);
        }
        cursor
    }

    /// Provides a cursor at the first node, or at the ghost node if the list
    /// is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost, self.len)
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        if let Err(err) = cursor.seek_to(at) {
            panic!("Cannot create cursor: {}", err);
        }
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (ghost, len) = (self.ghost, self.len);
        CursorMut::new(self, ghost, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Inserts `elt` before position `at` and returns a cursor at the new
    /// element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let cursor = list.insert(2, 4).unwrap();
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(cursor.index(), 2);
    ///
    /// list.insert(4, 5).unwrap();
    /// assert!(list.insert(9, 6).is_err());
    /// assert_eq!(list, List::from([1, 2, 4, 3, 5]));
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<CursorMut<'_, T>> {
        if at > self.len {
            return Err(Error::OutOfRange {
                index: at,
                len: self.len,
            });
        }
        let mut cursor = self.cursor_mut(at);
        cursor.insert(elt);
        cursor.move_prev();
        Ok(cursor)
    }

    /// Inserts every element of `iter`, in order, before position `at`.
    /// Returns the number of inserted elements.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `at > len`; nothing is inserted.
    pub fn insert_iter<I>(&mut self, at: usize, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        if at > self.len {
            return Err(Error::OutOfRange {
                index: at,
                len: self.len,
            });
        }
        let mut cursor = self.cursor_mut(at);
        let mut count = 0;
        for elt in iter {
            cursor.insert(elt);
            count += 1;
        }
        Ok(count)
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert!(list.remove(1).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.check_index(at)?;
        // SAFETY: `at < len`, so the node is a data node of the list.
        unsafe { Ok(self.unlink(self.node_at(at))) }
    }

    /// Erases the elements in `range`, and returns how many were erased.
    ///
    /// An empty range erases nothing.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRange`] if the range is reversed and with
    /// [`Error::OutOfRange`] if it ends after `len`. The list is left
    /// untouched on error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*i* + *k*) time, where *k* is the
    /// number of erased elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// assert_eq!(list.erase_range(2..8), Ok(6));
    /// assert_eq!(list, List::from([0, 1, 8, 9]));
    ///
    /// assert_eq!(list.erase_range(..), Ok(4));
    /// assert!(list.is_empty());
    /// assert_eq!(list.erase_range(..), Ok(0));
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(range, self.len)?;
        let mut cursor = self.cursor_mut(start);
        for _ in start..end {
            cursor.remove();
        }
        Ok(end - start)
    }
}

/// Turn `range` into a `start..end` pair of positions in a list of length
/// `len`.
pub(crate) fn resolve_range<R>(range: R, len: usize) -> Result<(usize, usize)>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .ok_or(Error::OutOfRange { index: start, len })?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .ok_or(Error::OutOfRange { index: end, len })?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    if end > len {
        return Err(Error::OutOfRange { index: end, len });
    }
    Ok((start, end))
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
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
        // SAFETY: every data node was released by `clear`, and the ghost
        // node is released only here.
        unsafe { Node::release_ghost(self.ghost) };
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

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
pub(crate) mod tests {
    use crate::error::Error;
    use crate::list::node::live;
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    /// An element recording its value into `dropped` when dropped.
    #[derive(Debug)]
    pub(crate) struct DropChecker<'a, T: Copy> {
        pub(crate) value: T,
        dropped: &'a RefCell<Vec<T>>,
    }

    impl<'a, T: Copy> DropChecker<'a, T> {
        pub(crate) fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }

    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    /// Walk the list in both directions and check the link and length
    /// invariants.
    pub(crate) fn assert_well_formed<T>(list: &List<T>) {
        use crate::list::node::Node;
        let ghost = list.ghost_node();
        let mut forward = 0;
        let mut node = ghost;
        unsafe {
            loop {
                let next = Node::next(node);
                assert_eq!(Node::prev(next), node);
                node = next;
                if node == ghost {
                    break;
                }
                forward += 1;
            }
            let mut backward = 0;
            let mut node = Node::prev(ghost);
            while node != ghost {
                backward += 1;
                node = Node::prev(node);
            }
            assert_eq!(backward, forward);
        }
        assert_eq!(list.len(), forward);
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_well_formed(&list);
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let before = live::count();
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        assert_eq!(live::count(), before + 3);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
        assert_eq!(live::count(), before);
    }

    #[test]
    fn list_move_keeps_ghost() {
        let list = List::from_iter(0..3);
        let mut moved = Box::new(list);
        assert_well_formed(&moved);
        let mut other = List::from_iter(3..5);
        std::mem::swap(&mut *moved, &mut other);
        assert_well_formed(&moved);
        assert_well_formed(&other);
        assert_eq!(Vec::from_iter(moved.iter().copied()), vec![3, 4]);
        assert_eq!(Vec::from_iter(other.iter().copied()), vec![0, 1, 2]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.try_front(), Err(Error::Empty));
        assert_eq!(list.try_back(), Err(Error::Empty));
        assert_eq!(list.try_pop_front(), Err(Error::Empty));
        assert_eq!(list.try_pop_back(), Err(Error::Empty));

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.try_back(), Ok(&3));
        assert_eq!(list.try_front(), Ok(&2));
        *list.front_mut().unwrap() = 20;
        *list.back_mut().unwrap() = 30;
        assert_eq!(list.try_pop_front(), Ok(20));
        assert_eq!(list.try_pop_back(), Ok(30));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_at() {
        let mut list = List::from_iter(0..7);
        for i in 0..7 {
            assert_eq!(list.at(i), Ok(&i));
            assert_eq!(list[i], i);
        }
        assert_eq!(list.at(7), Err(Error::OutOfRange { index: 7, len: 7 }));
        *list.at_mut(5).unwrap() = 50;
        list[6] = 60;
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2, 3, 4, 50, 60]);
        assert_eq!(List::<i32>::new().at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    #[should_panic(expected = "index 3 is out of range for a list of length 3")]
    fn list_index_out_of_range() {
        let list = List::from_iter(0..3);
        let _ = list[3];
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        {
            let cursor = list.insert(5, 10).unwrap();
            assert_eq!(cursor.current(), Some(&10));
            assert_eq!(cursor.index(), 5);
        }
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            vec![0, 1, 2, 3, 4, 10, 5, 6, 7, 8, 9]
        );

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));
        assert_eq!(list.remove(10), Err(Error::OutOfRange { index: 10, len: 10 }));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        assert_eq!(list.remove(0), Ok(11));

        list.insert(10, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
        assert!(list.insert(12, 13).is_err());
        assert_eq!(list.len(), 11);
        assert_well_formed(&list);
    }

    #[test]
    fn list_insert_iter() {
        let mut list = List::from_iter(0..3);
        assert_eq!(list.insert_iter(1, vec![7, 8, 9]), Ok(3));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 7, 8, 9, 1, 2]);
        assert_eq!(
            list.insert_iter(7, vec![1]),
            Err(Error::OutOfRange { index: 7, len: 6 })
        );
        assert_eq!(list.len(), 6);
        assert_well_formed(&list);
    }

    #[test]
    fn list_erase_range() {
        let mut list = List::from_iter(0..10);
        assert_eq!(list.erase_range(3..3), Ok(0));
        assert_eq!(list.erase_range(8..=9), Ok(2));
        assert_eq!(list.erase_range(..2), Ok(2));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(
            list.erase_range(4..2),
            Err(Error::InvalidRange { start: 4, end: 2 })
        );
        assert_eq!(
            list.erase_range(2..7),
            Err(Error::OutOfRange { index: 7, len: 6 })
        );
        assert_eq!(list.len(), 6);
        assert_eq!(list.erase_range(..), Ok(6));
        assert!(list.is_empty());
        assert_eq!(list.erase_range(..), Ok(0));
        assert_well_formed(&list);
    }

    #[test]
    fn list_from_elem() {
        let list = List::from_elem(String::from("x"), 3);
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|s| s == "x"));
        assert!(List::from_elem(1, 0).is_empty());
    }

    #[test]
    fn list_len_tracks_operations() {
        let before = live::count();
        let mut list = List::new();
        list.push_back(1);
        assert_eq!(list.len(), 1);
        list.pop_front();
        assert_eq!(list.len(), 0);
        list.extend(0..5);
        assert_eq!(list.len(), 5);
        list.remove(3).unwrap();
        assert_eq!(list.len(), 4);
        list.insert(1, 9).unwrap();
        assert_eq!(list.len(), 5);
        list.erase_range(1..3).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(live::count(), before + 3);
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(live::count(), before);
    }

    #[test]
    fn list_over_aligned_elements() {
        #[repr(align(256))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        struct Wide(u8);

        let before = live::count();
        let mut list = List::new();
        for i in [3, 1, 4, 1, 5].iter() {
            list.push_back(Wide(*i));
        }
        let ghost = list.ghost_node().as_ptr() as usize;
        assert_eq!(ghost % std::mem::align_of::<crate::list::node::Node<Wide>>(), 0);

        let mut other = List::from_iter([9, 2, 6].iter().map(|&i| Wide(i)));
        list.splice_range(2, &mut other, 1..).unwrap();
        list.sort();
        assert_well_formed(&list);
        assert_eq!(Vec::from_iter(list.iter().map(|w| w.0)), vec![1, 1, 2, 3, 4, 5, 6]);
        assert!(list.iter().all(|w| w as *const Wide as usize % 256 == 0));
        drop(other);
        drop(list);
        assert_eq!(live::count(), before);
    }
}
