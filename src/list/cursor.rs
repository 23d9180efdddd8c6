use crate::error::{Error, Result};
use crate::list::node::Node;
use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list.
///
/// [`Cursor::move_next`] and [`Cursor::move_prev`] step cyclically, passing
/// through the ghost node. Their `try_` counterparts refuse to cross it.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use splice_list::List;
///
/// // Create a list: [ A B C D #]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.try_move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.try_move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Create a cursor in the end and move forward: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert!(cursor.try_move_next().is_err());
/// // Move cursor forward, cyclically: [|A B C D #] (index = 0)
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by the node they designate.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use splice_list::List;
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
/// // Different list, different positions.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use splice_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// cursor2.move_next();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor. See the documents for details.
///
/// Every edit through a `CursorMut` keeps its `index` in step with its node.
///
/// # Examples
///
/// ```compile_fail
/// use splice_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                unsafe { Node::next(self.current) }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                unsafe { Node::prev(self.current) }
            }

            /// Step `steps` nodes forward without passing the ghost node.
            ///
            /// The caller guarantees `index + steps <= len`.
            fn walk_forward(&mut self, steps: usize) {
                debug_assert!(self.index + steps <= self.list.len());
                self.index += steps;
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Step `steps` nodes backward without passing the ghost node.
            ///
            /// The caller guarantees `steps <= index`.
            fn walk_backward(&mut self, steps: usize) {
                debug_assert!(steps <= self.index);
                self.index -= steps;
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor, which is `len` at the ghost node.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the ghost node.
            pub fn is_ghost(&self) -> bool {
                self.is_ghost_node()
            }

            /// Move the cursor to the next position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_next();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// assert_eq!(cursor.index(), 0);
            /// ```
            pub fn move_next(&mut self) {
                if self.is_empty() {
                    return;
                }
                if self.is_ghost_node() {
                    self.index = 0;
                } else {
                    self.index += 1;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_prev();
            ///
            /// // The cursor is now at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// assert_eq!(cursor.index(), 3);
            /// ```
            pub fn move_prev(&mut self) {
                if self.is_empty() {
                    return;
                }
                if self.is_front_node() {
                    self.index = self.list.len();
                } else {
                    self.index -= 1;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or fail with
            /// [`Error::Boundary`] if it is at the ghost node.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::{Error, List};
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // Forbid to move passing through the ghost node
            /// assert_eq!(cursor.try_move_next(), Err(Error::Boundary));
            ///
            /// // the cursor is still at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn try_move_next(&mut self) -> Result<()> {
                if self.is_ghost_node() {
                    return Err(Error::Boundary);
                }
                self.move_next();
                Ok(())
            }

            /// Move the cursor to the previous position, or fail with
            /// [`Error::Boundary`] if it is at the first position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::{Error, List};
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert_eq!(cursor.try_move_prev(), Err(Error::Boundary));
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn try_move_prev(&mut self) -> Result<()> {
                if self.is_front_node() {
                    return Err(Error::Boundary);
                }
                self.move_prev();
                Ok(())
            }

            /// Move forward the cursor by given steps, or fail with
            /// [`Error::Boundary`] when the move would pass through the
            /// ghost node.
            ///
            /// If an error occurs, the cursor will stay at the ghost node.
            ///
            /// This operation should compute in *O*(*steps*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move passing through the ghost node
            /// assert!(cursor.seek_forward(5).is_err());
            ///
            /// // the cursor is now at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<()> {
                (0..steps).try_for_each(|_| self.try_move_next())
            }

            /// Move backward the cursor by given steps, or fail with
            /// [`Error::Boundary`] when the move would pass through the
            /// ghost node.
            ///
            /// If an error occurs, the cursor will stay at the first node.
            ///
            /// This operation should compute in *O*(*steps*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.seek_backward(5).is_err());
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<()> {
                (0..steps).try_for_each(|_| self.try_move_prev())
            }

            /// Move the cursor to the given position `target`, or fail with
            /// [`Error::OutOfRange`] when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put. The cursor walks
            /// from whichever of itself, the front or the ghost node is
            /// nearest to `target`.
            ///
            /// # Examples
            ///
            /// ```
            /// use splice_list::{Error, List};
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert_eq!(cursor.seek_to(5), Err(Error::OutOfRange { index: 5, len: 3 }));
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                let len = self.list.len();
                match target {
                    target if target > len => {
                        return Err(Error::OutOfRange { index: target, len })
                    }
                    target if target == self.index => {}
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    // current=c, target=t, ghost=#
                    target if target > self.index => {
                        if target - self.index <= len - target {
                            // [    c-->t     #]
                            self.walk_forward(target - self.index);
                        } else {
                            // [ c     t<--#]
                            self.move_to_end();
                            self.walk_backward(len - target);
                        }
                    }
                    target => {
                        if self.index - target <= target {
                            // [    t<--c     #]
                            self.walk_backward(self.index - target);
                        } else {
                            // [-->t      c #]
                            self.move_to_start();
                            self.walk_forward(target);
                        }
                    }
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the ghost node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.ghost_node();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).current(), Some(&1));
    /// assert_eq!(list.cursor(2).current(), Some(&3));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes hold a valid element, borrowed from the
        // list for `'a`.
        unsafe { Some(Node::element(self.current)) }
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    ///
    /// This is useful where using the cursor as a reversed cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).previous(), None);
    /// assert_eq!(list.cursor(1).previous(), Some(&1));
    /// assert_eq!(list.cursor(3).previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never a ghost
        // node.
        unsafe { Some(Node::element(self.prev_node())) }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    pub fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    pub fn previous(&self) -> Option<&T> {
        self.as_cursor().previous()
    }

    /// Return an mutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the ghost node.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes hold a valid element, and the cursor is
        // the only way to reach the list while it is alive.
        unsafe { Some(Node::element_mut(self.current)) }
    }

    /// Return a mutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(3);
    /// *cursor.previous_mut().unwrap() *= 5;
    /// assert_eq!(cursor.previous(), Some(&15));
    ///
    /// assert!(list.cursor_mut(0).previous_mut().is_none());
    /// ```
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never a ghost
        // node.
        unsafe { Some(Node::element_mut(self.prev_node())) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
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
    /// Add an element first in the list.
    ///
    /// It is the same as [`List::push_front`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4);
    /// cursor.push_front(0);
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&4));
    ///
    /// assert_eq!(list, List::from([0, 1, 2, 3, 4]));
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
        self.index += 1;
    }

    /// Remove the first element and return it, or `None` if the list is
    /// empty.
    ///
    /// If the cursor was at the removed element, it moves to the new first
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4); // becomes [1, 2, 3, 4], points to # (the ghost node)
    /// assert_eq!(cursor.pop_front(), Some(1)); // becomes [2, 3, 4], points to #
    /// assert_eq!(cursor.index(), 3);
    /// assert_eq!(cursor.previous(), Some(&4));
    ///
    /// assert_eq!(list, List::from([2, 3, 4]));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.list.front_node();
        if front == self.list.ghost_node() {
            return None;
        }
        if self.current == front {
            self.current = self.next_node();
        } else {
            self.index -= 1;
        }
        self.list.pop_front()
    }

    /// Append an element to the back of a list.
    ///
    /// It is the same as [`List::push_back`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// cursor.insert(0);
    /// cursor.push_back(4);
    ///
    /// assert_eq!(list, List::from([0, 1, 2, 3, 4]));
    /// ```
    pub fn push_back(&mut self, item: T) {
        if self.is_ghost_node() {
            self.index += 1;
        }
        self.list.push_back(item)
    }

    /// Remove the last element from a list and return it, or `None` if
    /// it is empty.
    ///
    /// If the cursor was at the removed element, it moves to the ghost
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.pop_back(), Some(3));
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.index(), 2);
    ///
    /// assert_eq!(list, List::from([1, 2]));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let back = self.list.back_node();
        if back == self.list.ghost_node() {
            return None;
        }
        if self.current == back {
            self.current = self.list.ghost_node();
        } else if self.is_ghost_node() {
            self.index -= 1;
        }
        self.list.pop_back()
    }

    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor stays put but its `index` becomes
    /// `index + 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(list, List::from([1, 4, 2, 3, 5]));
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.current` is a valid node in the list.
        unsafe { self.list.link_before(self.current, item) };
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node and keeps its index.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.index(), 9);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-ghost node in the list.
        let item = unsafe { self.list.unlink(self.current) };
        self.current = next;
        Some(item)
    }

    /// Remove the element before the cursor and return it, or return `None` if
    /// the cursor is at the first node. After removal, the cursor is not moved,
    /// but its `index` becomes `index - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.backspace(), Some(4));
    /// assert_eq!(cursor.index(), 4);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.backspace(), Some(9));
    /// assert_eq!(cursor.index(), 8);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.try_move_prev().ok().and_then(|_| self.remove())
    }

    /// Split the list into two after the current element (inclusive). This will
    /// return a new list consisting of everything after the cursor (inclusive),
    /// with the original list retaining everything before (exclusive).
    ///
    /// If the cursor is pointing at the ghost node, `None` will be returned.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// let list2 = cursor.split().unwrap();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.index(), 5);
    ///
    /// assert_eq!(list2, List::from([5, 6, 7, 8, 9]));
    /// assert_eq!(list, List::from([0, 1, 2, 3, 4]));
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_ghost_node() {
            return None;
        }
        let len = self.list.len - self.index;
        // After splitting, the current node is pointing to the ghost node.
        let current = std::mem::replace(&mut self.current, self.list.ghost_node());
        let back = self.list.back_node();
        // SAFETY: current is a non-ghost node, so `current..=back` is a valid
        // range of `len` nodes.
        unsafe { Some(List::from_detached(self.list.detach_nodes(current, back, len))) }
    }

    /// Splice another list between the current node and its previous node.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([0, 1, 7, 8, 9]);
    /// let list2 = List::from([2, 3, 4, 5, 6]);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// cursor.splice(list2);
    /// assert_eq!(cursor.current(), Some(&7));
    /// assert_eq!(cursor.index(), 7);
    ///
    /// assert_eq!(list, List::from_iter(0..10));
    /// ```
    pub fn splice(&mut self, mut other: List<T>) {
        if let Some(detached) = other.detach_all_nodes() {
            self.index += detached.len;
            // SAFETY: `self.current` is a valid node in the list.
            unsafe { self.list.attach_nodes(self.current, detached) };
        }
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::tests::assert_well_formed;
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_cyclic_moves() {
        let list = List::from_iter(0..3);
        let mut cursor = list.cursor_start();
        for expected in [1, 2].iter() {
            cursor.move_next();
            assert_eq!(cursor.current(), Some(expected));
        }
        cursor.move_next();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 3);
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&0));
        assert_eq!(cursor.index(), 0);
        cursor.move_prev();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.try_move_next(), Err(Error::Boundary));
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn cursor_on_empty_list() {
        let list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        assert!(cursor.is_ghost());
        cursor.move_next();
        cursor.move_prev();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.try_move_next(), Err(Error::Boundary));
        assert_eq!(cursor.try_move_prev(), Err(Error::Boundary));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor, list.cursor_end());
    }

    #[test]
    fn cursor_seek_to_every_position() {
        let list = List::from_iter(0..9);
        let mut cursor = list.cursor_start();
        for &from in &[0, 2, 4, 7, 9] {
            for to in 0..=9 {
                cursor.seek_to(from).unwrap();
                cursor.seek_to(to).unwrap();
                assert_eq!(cursor.index(), to);
                assert_eq!(cursor.current(), list.iter().nth(to));
            }
        }
        assert_eq!(cursor.seek_to(10), Err(Error::OutOfRange { index: 10, len: 9 }));
        assert_eq!(cursor.index(), 9);
    }

    #[test]
    fn cursor_identity() {
        let list = List::from([1, 1, 1]);
        let (a, b) = (list.cursor(0), list.cursor(1));
        assert_ne!(a, b);
        assert!(a < b);
        let mut c = b;
        c.move_prev();
        assert_eq!(a, c);
    }

    #[test]
    fn cursor_mut_keeps_index() {
        let mut list = List::from_iter(0..5);
        let mut cursor = list.cursor_mut(2);

        cursor.push_front(-1);
        assert_eq!((cursor.index(), cursor.current()), (3, Some(&2)));
        cursor.push_back(5);
        assert_eq!((cursor.index(), cursor.current()), (3, Some(&2)));
        assert_eq!(cursor.pop_front(), Some(-1));
        assert_eq!((cursor.index(), cursor.current()), (2, Some(&2)));
        assert_eq!(cursor.pop_back(), Some(5));
        assert_eq!((cursor.index(), cursor.current()), (2, Some(&2)));

        cursor.move_to_start();
        assert_eq!(cursor.pop_front(), Some(0));
        assert_eq!((cursor.index(), cursor.current()), (0, Some(&1)));

        cursor.move_to_end();
        cursor.push_back(9);
        assert_eq!(cursor.index(), 5);
        assert_eq!(cursor.previous(), Some(&9));
        assert_eq!(cursor.pop_back(), Some(9));
        assert_eq!(cursor.index(), 4);

        cursor.seek_to(3).unwrap();
        assert_eq!(cursor.pop_back(), Some(4));
        assert!(cursor.is_ghost());
        assert_eq!(cursor.index(), 3);
        assert_well_formed(&list);
        assert_eq!(list, List::from([1, 2, 3]));
    }

    #[test]
    fn cursor_mut_edit_sequence() {
        let mut list = List::new();
        let mut cursor = list.cursor_start_mut();
        cursor.insert(1);
        cursor.insert(3);
        cursor.move_prev();
        cursor.insert(2);
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.index(), 2);
        cursor.splice(List::from([7, 8]));
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.remove(), Some(3));
        assert!(cursor.is_ghost());
        assert_eq!(cursor.backspace(), Some(8));
        assert_eq!(cursor.index(), 3);
        cursor.seek_to(1).unwrap();
        let tail = cursor.split().unwrap();
        assert_eq!(tail, List::from([2, 7]));
        assert_eq!(cursor.index(), 1);
        assert_well_formed(&tail);
        assert_well_formed(&list);
        assert_eq!(list, List::from([1]));
    }
}
