use crate::list::node::Node;
use crate::List;

/// Merge the nodes of `other` into `list`, both sorted by `less`.
///
/// A node of `other` goes in front of the first node of `list` it is less
/// than, so ties keep the nodes of `list` first. Whatever is left of `other`
/// once the end of `list` is reached is appended in one step.
pub(crate) fn merge<T, F>(list: &mut List<T>, other: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let ghost = list.ghost_node();
    let mut local = list.front_node();
    // SAFETY: `local` is always a node of `list` and `incoming` a data node
    // of `other`; the lengths are moved along with every node.
    unsafe {
        while !other.is_empty() {
            let incoming = other.front_node();
            while local != ghost && !less(Node::element(incoming), Node::element(local)) {
                local = Node::next(local);
            }
            if local == ghost {
                break;
            }
            Node::move_before(incoming, local);
            other.len -= 1;
            list.len += 1;
        }
    }
    list.append(other);
}
