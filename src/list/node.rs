//! Nodes of a [`List`](crate::List) and the primitive relinking operations
//! every list operation is built from.
//!
//! All primitives here are `unsafe`: they take raw node pointers and trust
//! the caller that the pointers are live and the links around them are
//! consistent. Violating that is a contract violation of the caller, not a
//! recoverable error.

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

/// A node of the cyclic list.
///
/// The ghost node of a list is allocated with the layout of a `Node<T>`, but
/// its `element` is never initialized: it is only ever accessed through its
/// `next` and `prev` fields.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

impl<T> Node<T> {
    /// Acquire a new data node holding `element`.
    ///
    /// The new node is detached and linked to itself.
    pub(crate) fn acquire(element: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })));
        #[cfg(test)]
        live::add(1);
        // SAFETY: `node` was just allocated.
        unsafe { connect(node, node) };
        node
    }

    /// Release a detached data node and return its element.
    ///
    /// # Safety
    ///
    /// `this` must be a data node returned by [`Node::acquire`], already
    /// detached from any list, and not released before.
    pub(crate) unsafe fn release(this: NonNull<Node<T>>) -> T {
        #[cfg(test)]
        live::add(-1);
        Box::from_raw(this.as_ptr()).element
    }

    /// Acquire the ghost node of a new empty list, linked to itself.
    pub(crate) fn acquire_ghost() -> NonNull<Node<T>> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` holds two pointers, so `layout` is never zero-sized.
        let ghost = match NonNull::new(unsafe { alloc::alloc(layout) }.cast::<Node<T>>()) {
            Some(ghost) => ghost,
            None => alloc::handle_alloc_error(layout),
        };
        // SAFETY: `ghost` is allocated and aligned for a `Node<T>`; only the
        // link fields are written, the element stays uninitialized.
        unsafe {
            ptr::addr_of_mut!((*ghost.as_ptr()).next).write(ghost);
            ptr::addr_of_mut!((*ghost.as_ptr()).prev).write(ghost);
        }
        ghost
    }

    /// Release a ghost node returned by [`Node::acquire_ghost`].
    ///
    /// # Safety
    ///
    /// `ghost` must come from [`Node::acquire_ghost`] and must not be
    /// released twice. Every data node must have been released before.
    pub(crate) unsafe fn release_ghost(ghost: NonNull<Node<T>>) {
        alloc::dealloc(ghost.as_ptr().cast::<u8>(), Layout::new::<Node<T>>());
    }

    #[inline]
    pub(crate) unsafe fn next(this: NonNull<Node<T>>) -> NonNull<Node<T>> {
        (*this.as_ptr()).next
    }

    #[inline]
    pub(crate) unsafe fn prev(this: NonNull<Node<T>>) -> NonNull<Node<T>> {
        (*this.as_ptr()).prev
    }

    /// # Safety
    ///
    /// `this` must be a live data node, never a ghost node, and the returned
    /// reference must not outlive it.
    #[inline]
    pub(crate) unsafe fn element<'a>(this: NonNull<Node<T>>) -> &'a T {
        &(*this.as_ptr()).element
    }

    /// # Safety
    ///
    /// Same as [`Node::element`], and no other reference to the element may
    /// exist while the returned one is alive.
    #[inline]
    pub(crate) unsafe fn element_mut<'a>(this: NonNull<Node<T>>) -> &'a mut T {
        &mut (*this.as_ptr()).element
    }

    /// Unlink `this` from its list and link it to itself.
    ///
    /// A self-linked node (such as the ghost of an empty list) is left as it
    /// is.
    ///
    /// # Safety
    ///
    /// `this` and its neighbours must be live with consistent links. `this`
    /// must not be the ghost node of a non-empty list.
    pub(crate) unsafe fn detach(this: NonNull<Node<T>>) {
        connect(Node::prev(this), Node::next(this));
        connect(this, this);
    }

    /// Link the detached node `this` immediately before `target`.
    ///
    /// # Safety
    ///
    /// `this` must be detached and `target` must be a live node of a list
    /// with consistent links.
    pub(crate) unsafe fn insert_before(this: NonNull<Node<T>>, target: NonNull<Node<T>>) {
        let prev = Node::prev(target);
        #[cfg(any(debug_assertions, feature = "check-links"))]
        assert_adjacent(prev, target);
        connect(prev, this);
        connect(this, target);
    }

    /// Move `this` immediately before `target`, possibly across lists.
    ///
    /// Moving a node before itself does nothing.
    ///
    /// # Safety
    ///
    /// Both nodes must be live nodes of lists with consistent links, and
    /// `this` must be a data node.
    pub(crate) unsafe fn move_before(this: NonNull<Node<T>>, target: NonNull<Node<T>>) {
        if this == target {
            return;
        }
        Node::detach(this);
        Node::insert_before(this, target);
    }

    /// Move the closed range `front..=back` immediately before `target`.
    ///
    /// Only the six links around the three boundaries are rewritten.
    ///
    /// # Safety
    ///
    /// `front..=back` must be a valid range of data nodes (`front` is not on
    /// the right of `back`), and `target` must be a live node outside of it.
    pub(crate) unsafe fn move_range_before(
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        target: NonNull<Node<T>>,
    ) {
        connect(Node::prev(front), Node::next(back));
        let prev = Node::prev(target);
        connect(prev, front);
        connect(back, target);
        #[cfg(any(debug_assertions, feature = "check-links"))]
        {
            assert_adjacent(prev, front);
            assert_adjacent(back, target);
        }
    }
}

#[inline]
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

#[cfg(any(debug_assertions, feature = "check-links"))]
pub(crate) unsafe fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    assert_eq!(Node::next(prev), next, "broken `next` link");
    assert_eq!(Node::prev(next), prev, "broken `prev` link");
}


#[cfg(test)]
mod tests {
    use super::{live, Node};
    use std::ptr::NonNull;

    unsafe fn collect(ghost: NonNull<Node<i32>>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut node = Node::next(ghost);
        while node != ghost {
            assert_eq!(Node::prev(Node::next(node)), node);
            out.push(*Node::element(node));
            node = Node::next(node);
        }
        out
    }

    unsafe fn ring(values: &[i32]) -> (NonNull<Node<i32>>, Vec<NonNull<Node<i32>>>) {
        let ghost = Node::acquire_ghost();
        let nodes: Vec<_> = values.iter().map(|&v| Node::acquire(v)).collect();
        for &node in &nodes {
            Node::insert_before(node, ghost);
        }
        (ghost, nodes)
    }

    unsafe fn free(ghost: NonNull<Node<i32>>, nodes: Vec<NonNull<Node<i32>>>) {
        for node in nodes {
            Node::detach(node);
            Node::release(node);
        }
        Node::release_ghost(ghost);
    }

    #[test]
    fn node_ghost_is_self_linked() {
        unsafe {
            let ghost = Node::<i32>::acquire_ghost();
            assert_eq!(Node::next(ghost), ghost);
            assert_eq!(Node::prev(ghost), ghost);
            // Detaching a self-linked ghost leaves it untouched.
            Node::detach(ghost);
            assert_eq!(Node::next(ghost), ghost);
            Node::release_ghost(ghost);
        }
    }

    #[test]
    fn node_detach_and_insert() {
        let before = live::count();
        unsafe {
            let (ghost, nodes) = ring(&[1, 2, 3]);
            assert_eq!(live::count(), before + 3);
            assert_eq!(collect(ghost), vec![1, 2, 3]);

            Node::detach(nodes[1]);
            assert_eq!(Node::next(nodes[1]), nodes[1]);
            assert_eq!(collect(ghost), vec![1, 3]);

            Node::insert_before(nodes[1], nodes[0]);
            assert_eq!(collect(ghost), vec![2, 1, 3]);
            free(ghost, nodes);
        }
        assert_eq!(live::count(), before);
    }

    #[test]
    fn node_move_before() {
        unsafe {
            let (ghost, nodes) = ring(&[1, 2, 3, 4]);
            Node::move_before(nodes[2], nodes[2]);
            assert_eq!(collect(ghost), vec![1, 2, 3, 4]);
            Node::move_before(nodes[2], nodes[3]);
            assert_eq!(collect(ghost), vec![1, 2, 3, 4]);
            Node::move_before(nodes[3], nodes[0]);
            assert_eq!(collect(ghost), vec![4, 1, 2, 3]);
            Node::move_before(nodes[3], ghost);
            assert_eq!(collect(ghost), vec![1, 2, 3, 4]);
            free(ghost, nodes);
        }
    }

    #[test]
    fn node_move_range_before() {
        unsafe {
            let (ghost, nodes) = ring(&[1, 2, 3, 4, 5]);
            Node::move_range_before(nodes[3], nodes[4], nodes[0]);
            assert_eq!(collect(ghost), vec![4, 5, 1, 2, 3]);
            Node::move_range_before(nodes[0], nodes[1], ghost);
            assert_eq!(collect(ghost), vec![4, 5, 3, 1, 2]);

            // Across two rings.
            let (other, other_nodes) = ring(&[6, 7]);
            Node::move_range_before(other_nodes[0], other_nodes[1], nodes[2]);
            assert_eq!(collect(ghost), vec![4, 5, 6, 7, 3, 1, 2]);
            assert_eq!(collect(other), Vec::<i32>::new());
            Node::release_ghost(other);

            let mut all = nodes;
            all.extend(other_nodes);
            free(ghost, all);
        }
    }
}
