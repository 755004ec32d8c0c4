use std::collections::BinaryHeap;

#[allow(dead_code)]
pub(crate) fn push_pop_std(values: &[i64]) -> i64 {
    let mut heap = BinaryHeap::with_capacity(values.len());
    for &value in values {
        heap.push(value);
    }
    let mut total = 0;
    while let Some(value) = heap.pop() {
        total += value;
    }
    total
}

#[allow(dead_code)]
pub(crate) fn heapify_std(values: &[i64]) -> BinaryHeap<i64> {
    BinaryHeap::from(values.to_vec())
}
