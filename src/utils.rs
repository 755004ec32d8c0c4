use crate::compare::Compare;

/// Index of the parent of `index`.  The root is its own parent.
#[inline]
pub(crate) fn parent(index: usize) -> usize {
    index.saturating_sub(1) / 2
}

#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Index of the last node with at least one child, if any.
pub(crate) fn last_parent(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some(len / 2 - 1)
    }
}

/**
 * Check that `data`, read as a complete binary tree in level order, has the
 * heap property under `cmp`: no child has a strictly higher priority than
 * its parent.
 */
pub fn is_heap_by<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|i| !cmp.greater(&data[i], &data[parent(i)]))
}
