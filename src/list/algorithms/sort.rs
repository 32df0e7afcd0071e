use crate::list::{List, NodeId};

/// Sort the list in place with a quicksort over node ranges.
///
/// `less(a, b)` returns `true` if `a` must be placed before `b`. Only the
/// elements are exchanged, the links of the list are never rewritten.
pub(crate) fn quick_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = list.len();
    let (Some(front), Some(back)) = (list.front_node(), list.back_node()) else {
        return;
    };
    if len < 2 {
        return;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(len, "quick sort started");
    let partitions = sort_range(list, front, back, len, &mut less);
    #[cfg(feature = "tracing")]
    tracing::trace!(len, partitions, "quick sort finished");
    #[cfg(not(feature = "tracing"))]
    let _ = partitions;
}

/// Sort the closed range `front..=back` holding `len` nodes, and return the
/// number of partitions performed.
///
/// The shorter side of each partition is sorted recursively and the longer
/// side by looping, so the recursion is at most *O*(log(*n*)) deep even when
/// the pivot choice degrades to *O*(*n*<sup>2</sup>) comparisons.
fn sort_range<T, F>(
    list: &mut List<T>,
    mut front: NodeId,
    mut back: NodeId,
    mut len: usize,
    less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut partitions = 0;
    while len > 1 {
        let (pivot, left_len) = partition(list, front, back, less);
        partitions += 1;
        let right_len = len - left_len - 1;
        if left_len < right_len {
            if let Some(left_back) = list.prev_of(pivot).filter(|_| left_len > 1) {
                partitions += sort_range(list, front, left_back, left_len, less);
            }
            match list.next_of(pivot) {
                Some(next) => front = next,
                None => break,
            }
            len = right_len;
        } else {
            if let Some(right_front) = list.next_of(pivot).filter(|_| right_len > 1) {
                partitions += sort_range(list, right_front, back, right_len, less);
            }
            match list.prev_of(pivot) {
                Some(prev) => back = prev,
                None => break,
            }
            len = left_len;
        }
    }
    partitions
}

/// Partition `front..=back` around the element of `back`.
///
/// Every element sorting strictly before the pivot is moved to the front of
/// the range, then the pivot is swapped into the node right after them.
/// Returns that node together with the number of nodes before it.
///
/// `boundary` is the last node holding an element known to sort before the
/// pivot; `None` means no such node yet, so the next one to fill is `front`.
fn partition<T, F>(list: &mut List<T>, front: NodeId, back: NodeId, less: &mut F) -> (NodeId, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut boundary: Option<NodeId> = None;
    let mut left_len = 0;
    let mut current = front;
    while current != back {
        if less(list.element(current), list.element(back)) {
            let target = after(list, boundary, front);
            list.swap_elements(target, current);
            boundary = Some(target);
            left_len += 1;
        }
        current = match list.next_of(current) {
            Some(next) => next,
            None => unreachable!("`back` is not reachable from `front`"),
        };
    }
    let pivot = after(list, boundary, front);
    list.swap_elements(pivot, back);
    (pivot, left_len)
}

/// The node following `boundary`, where no boundary stands right before `front`.
fn after<T>(list: &List<T>, boundary: Option<NodeId>, front: NodeId) -> NodeId {
    match boundary {
        None => front,
        Some(boundary) => match list.next_of(boundary) {
            Some(next) => next,
            None => unreachable!("the boundary never reaches the pivot"),
        },
    }
}
