use crate::list::node::Node;
use crate::List;
use std::ptr::NonNull;

pub(crate) fn quick_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let ghost = list.ghost_node();
    // SAFETY: the nodes strictly between the ghost and itself are exactly
    // the data nodes of the list.
    unsafe { quick_sort_range(ghost, ghost, &mut less) };
}

/// Sort the open range of nodes strictly between `anchor` and `end`.
///
/// Neither bound is moved, so both stay valid while the nodes between them
/// are relinked.
unsafe fn quick_sort_range<T, F>(
    mut anchor: NonNull<Node<T>>,
    mut end: NonNull<Node<T>>,
    less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let pivot = Node::next(anchor);
        if pivot == end || Node::next(pivot) == end {
            return;
        }
        let (n_less, n_rest) = partition(pivot, end, less);
        // Recurse into the smaller part and iterate on the larger one.
        if n_less <= n_rest {
            quick_sort_range(anchor, pivot, less);
            anchor = pivot;
        } else {
            quick_sort_range(pivot, end, less);
            end = pivot;
        }
    }
}

/// Move every node of `pivot.next..end` that is less than `pivot` in front
/// of it, and return the sizes of both parts.
unsafe fn partition<T, F>(
    pivot: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut n_less, mut n_rest) = (0, 0);
    let mut node = Node::next(pivot);
    while node != end {
        let next = Node::next(node);
        if less(Node::element(node), Node::element(pivot)) {
            Node::move_before(node, pivot);
            n_less += 1;
        } else {
            n_rest += 1;
        }
        node = next;
    }
    (n_less, n_rest)
}
