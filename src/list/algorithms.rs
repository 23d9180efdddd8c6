use crate::list::node::Node;
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub mod extract;
mod merge;
mod sort;

use extract::ExtractIf;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
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

    /// Overwrites the elements of `self` in place, reusing its nodes, then
    /// appends or drops the difference.
    fn clone_from(&mut self, other: &Self) {
        let mut source = other.iter();
        let mut cursor = self.cursor_start_mut();
        while let Some(elt) = cursor.current_mut() {
            match source.next() {
                Some(src) => elt.clone_from(src),
                None => break,
            }
            cursor.move_next();
        }
        if cursor.is_ghost() {
            source.for_each(|src| cursor.insert(src.clone()));
        } else {
            drop(cursor.split());
        }
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.iter().for_each(|elt| elt.hash(state));
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
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

    /// Removes the first element equal to `x` and returns it, or `None` if
    /// there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 1, 2]);
    /// assert_eq!(list.remove_item(&2), Some(2));
    /// assert_eq!(list, List::from([1, 1, 2]));
    /// assert_eq!(list.remove_item(&3), None);
    /// ```
    pub fn remove_item(&mut self, x: &T) -> Option<T>
    where
        T: PartialEq<T>,
    {
        let mut cursor = self.cursor_start_mut();
        while let Some(elt) = cursor.current() {
            if elt == x {
                return cursor.remove();
            }
            cursor.move_next();
        }
        None
    }

    /// Sort the list.
    ///
    /// This sort is not stable (i.e., may reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) expected time,
    /// *O*(*n*^2) in the worst case, and *O*(log(*n*)) stack.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a quicksort over the nodes, taking the first
    /// node of each range as the pivot. Nodes are relinked, elements are
    /// never moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([5, 3, 4, 1, 2]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::quick_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// The comparator function should define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified, but the list stays well-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
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
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v, List::from([1, 2, -3, 4, -5]));
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort::quick_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Merges the sorted list `other` into the sorted list `self`, leaving
    /// `other` empty.
    ///
    /// The merge is stable: elements of `self` stay in front of equal
    /// elements of `other`. If either list is not sorted, every element
    /// still ends up in `self`, in an unspecified order.
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 3, 5]);
    /// let mut other = List::from([2, 4, 6]);
    ///
    /// list.merge(&mut other);
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5, 6]));
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        merge::merge(self, other, |a, b| a.lt(b));
    }

    /// Merges the list `other` into `self` with a comparator function. Both
    /// lists should be sorted by the same comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([5, 3, 1]);
    /// let mut other = List::from([6, 4, 2]);
    ///
    /// list.merge_by(&mut other, |a, b| b.cmp(a));
    /// assert_eq!(list, List::from([6, 5, 4, 3, 2, 1]));
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge::merge(self, other, |a, b| compare(a, b) == Ordering::Less);
    }

    /// Reverses the order of the elements in place.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list, List::from([3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        // SAFETY: every node visited is a data node of the list, and moving
        // it to the front does not change the node that follows it.
        unsafe {
            let mut node = Node::next(ghost);
            while node != ghost {
                let next = Node::next(node);
                Node::move_before(node, Node::next(ghost));
                node = next;
            }
        }
    }

    /// Removes consecutive repeated elements, keeping the first of each run.
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 1, 2, 3, 3, 3, 1]);
    /// assert_eq!(list.unique(), 3);
    /// assert_eq!(list, List::from([1, 2, 3, 1]));
    /// ```
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.unique_by(|a, b| a == b)
    }

    /// Removes every element for which `same_bucket(retained, element)`
    /// holds, where `retained` is the last element kept before it.
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 4, 7, 8, 10]);
    /// // Drop elements within 2 of the last kept one.
    /// assert_eq!(list.unique_by(|kept, x| x - kept <= 2), 2);
    /// assert_eq!(list, List::from([1, 4, 7, 10]));
    /// ```
    pub fn unique_by<F>(&mut self, mut same_bucket: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut removed = 0;
        // SAFETY: `retained` and `node` are distinct data nodes of the list,
        // and `node` is unlinked only after its successor is read.
        unsafe {
            let mut retained = Node::next(ghost);
            if retained == ghost {
                return 0;
            }
            let mut node = Node::next(retained);
            while node != ghost {
                let next = Node::next(node);
                if same_bucket(Node::element(retained), Node::element(node)) {
                    drop(self.unlink(node));
                    removed += 1;
                } else {
                    retained = node;
                }
                node = next;
            }
        }
        removed
    }

    /// Removes consecutive elements that map to the same key.
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([10, 11, 21, 30, 35]);
    /// assert_eq!(list.unique_by_key(|x| x / 10), 2);
    /// assert_eq!(list, List::from([10, 21, 30]));
    /// ```
    pub fn unique_by_key<K, F>(&mut self, mut key: F) -> usize
    where
        F: FnMut(&T) -> K,
        K: PartialEq,
    {
        self.unique_by(|a, b| key(a) == key(b))
    }

    /// Removes every element satisfying `pred`, keeping the order of the
    /// others. Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// assert_eq!(list.remove_if(|x| x % 3 == 0), 4);
    /// assert_eq!(list, List::from([1, 2, 4, 5, 7, 8]));
    /// ```
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.extract_if(|elt| pred(elt)).finish()
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// This is [`List::remove_if`] with the predicate negated.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// list.retain(|&x| x % 2 == 0);
    /// assert_eq!(list, List::from([2, 4]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.remove_if(|elt| !f(elt));
    }

    /// Creates an iterator which uses a closure to determine if an element
    /// should be removed, yielding the removed elements.
    ///
    /// Elements left unvisited when the iterator is dropped are still
    /// filtered. Use [`List::remove_if`] when the removed elements are not
    /// needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut numbers = List::from([1, 2, 3, 4, 5, 6, 8, 9, 11, 13, 14, 15]);
    ///
    /// let evens = Vec::from_iter(numbers.extract_if(|x| *x % 2 == 0));
    ///
    /// assert_eq!(evens, vec![2, 4, 6, 8, 14]);
    /// assert_eq!(numbers, List::from([1, 3, 5, 9, 11, 13, 15]));
    /// ```
    pub fn extract_if<F>(&mut self, filter: F) -> ExtractIf<'_, T, F>
    where
        F: FnMut(&mut T) -> bool,
    {
        ExtractIf::new(self, filter)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::node::live;
    use crate::list::tests::{assert_well_formed, DropChecker};
    use crate::List;
    use std::cell::RefCell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn to_vec<T: Copy>(list: &List<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_compare_and_hash() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 4]);
        let c = List::from([1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_clone_from() {
        for &(dst, src) in &[(0, 0), (0, 4), (4, 0), (2, 5), (5, 2), (3, 3)] {
            let mut list = List::from_iter(100..100 + dst);
            let other = List::from_iter(0..src);
            list.clone_from(&other);
            assert_eq!(list, other);
            assert_well_formed(&list);
        }
    }

    #[test]
    fn list_remove_item() {
        let mut list = List::from([3, 1, 3]);
        assert_eq!(list.remove_item(&3), Some(3));
        assert_eq!(to_vec(&list), vec![1, 3]);
        assert_eq!(list.remove_item(&3), Some(3));
        assert_eq!(list.remove_item(&3), None);
        assert_eq!(to_vec(&list), vec![1]);
    }

    #[test]
    fn list_merge() {
        let mut list = List::from([1, 3, 5]);
        let mut other = List::from([2, 4, 6]);
        list.merge(&mut other);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5, 6]);
        assert!(other.is_empty());

        let mut empty = List::new();
        empty.merge(&mut list);
        assert_eq!(empty.len(), 6);
        assert!(list.is_empty());
        empty.merge(&mut list);
        assert_eq!(empty.len(), 6);
        assert_well_formed(&empty);
        assert_well_formed(&list);

        let mut tail = List::from([0, 7, 8, 9]);
        empty.merge(&mut tail);
        assert_eq!(to_vec(&empty), Vec::from_iter(0..10));
        assert_well_formed(&empty);
    }

    #[test]
    fn list_merge_is_stable() {
        let mut list = List::from([(1, 'a'), (2, 'a'), (2, 'b'), (3, 'a')]);
        let mut other = List::from([(0, 'x'), (2, 'x'), (3, 'x'), (4, 'x')]);
        list.merge_by(&mut other, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            to_vec(&list),
            vec![
                (0, 'x'),
                (1, 'a'),
                (2, 'a'),
                (2, 'b'),
                (2, 'x'),
                (3, 'a'),
                (3, 'x'),
                (4, 'x')
            ]
        );
    }

    #[test]
    fn list_merge_unsorted_keeps_every_node() {
        let before = live::count();
        let mut list = List::from([5, 1, 4]);
        let mut other = List::from([3, 9, 2, 0]);
        list.merge(&mut other);
        assert_eq!(list.len(), 7);
        let mut all = to_vec(&list);
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5, 9]);
        assert_well_formed(&list);
        drop(list);
        drop(other);
        assert_eq!(live::count(), before);
    }

    #[test]
    fn list_sort() {
        for n in 0..40 {
            let mut list = List::from_iter(0..n);
            list.sort();
            assert_eq!(to_vec(&list), Vec::from_iter(0..n));
            let mut list = List::from_iter((0..n).rev());
            list.sort();
            assert_eq!(to_vec(&list), Vec::from_iter(0..n));
            assert_well_formed(&list);
        }
        let mut list = List::from([5, 3, 4, 1, 2]);
        list.sort();
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn list_sort_with_duplicates() {
        // A fixed pseudo-random sequence with many repeated keys.
        let input = Vec::from_iter((0..200u32).map(|i| i.wrapping_mul(2_654_435_761) % 17));
        let mut list = List::from(input.clone());
        list.sort();
        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(to_vec(&list), expected);
        assert_well_formed(&list);

        let mut list = List::from_elem(7, 50);
        list.sort_by_key(|x| *x);
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn list_sort_drops_nothing() {
        let dropped = RefCell::new(Vec::new());
        let mut list = List::from_iter([4, 2, 9, 1].iter().map(|&v| DropChecker::new(v, &dropped)));
        list.sort_by(|a, b| a.value.cmp(&b.value));
        assert!(dropped.borrow().is_empty());
        assert_eq!(Vec::from_iter(list.iter().map(|x| x.value)), vec![1, 2, 4, 9]);
        drop(list);
        dropped.borrow_mut().sort_unstable();
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 4, 9]);
    }

    #[test]
    fn list_reverse() {
        for n in 0..6 {
            let mut list = List::from_iter(0..n);
            list.reverse();
            assert_eq!(to_vec(&list), Vec::from_iter((0..n).rev()));
            list.reverse();
            assert_eq!(to_vec(&list), Vec::from_iter(0..n));
            assert_well_formed(&list);
        }
    }

    #[test]
    fn list_unique() {
        let dropped = RefCell::new(Vec::new());
        let mut list = List::from_iter(
            [1, 1, 2, 2, 2, 3, 1, 1]
                .iter()
                .enumerate()
                .map(|(i, &v)| DropChecker::new((i, v), &dropped)),
        );
        assert_eq!(list.unique_by_key(|x| x.value.1), 4);
        assert_eq!(
            Vec::from_iter(list.iter().map(|x| x.value)),
            vec![(0, 1), (2, 2), (5, 3), (6, 1)]
        );
        assert_eq!(
            Vec::from_iter(dropped.borrow().iter().map(|x| x.0)),
            vec![1, 3, 4, 7]
        );
        assert_well_formed(&list);

        let mut list = List::from([1, 1, 2]);
        assert_eq!(list.unique(), 1);
        assert_eq!(list.unique(), 0);
        assert_eq!(List::<i32>::new().unique(), 0);
    }

    #[test]
    fn list_remove_if_and_retain() {
        let mut list = List::from_iter(0..10);
        assert_eq!(list.remove_if(|&x| x >= 7), 3);
        assert_eq!(list.remove_if(|_| false), 0);
        list.retain(|&x| x % 2 == 1);
        assert_eq!(to_vec(&list), vec![1, 3, 5]);
        assert_eq!(list.remove_if(|_| true), 3);
        assert!(list.is_empty());
        assert_well_formed(&list);
    }
}
