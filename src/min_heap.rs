use crate::compare::Reversed;
use crate::heap::Heap;

/// A heap that pops its smallest element first.
pub type MinHeap<T> = Heap<T, Reversed>;

impl<T: Ord> Heap<T, Reversed> {
    pub fn new() -> Self {
        Heap::new_by(Reversed)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Heap::with_capacity_by(capacity, Reversed)
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Heap::from_vec_by(data, Reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HeapError;

    #[test]
    fn test_min_heap() {
        let mut heap = MinHeap::new();
        for value in [5, 7, 8, 9, 10, 12, 5, 14, 11].iter() {
            heap.push(*value).unwrap();
        }
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Ok(&5));
        assert_eq!(heap.pop(), Ok(5));
        assert_eq!(heap.pop(), Ok(5));
        assert_eq!(heap.pop(), Ok(7));
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn test_min_heap_bounded() {
        let mut heap = MinHeap::with_capacity(1);
        heap.push(2).unwrap();
        assert_eq!(heap.push(1), Err(HeapError::CapacityExceeded { capacity: 1 }));
        assert_eq!(heap.peek(), Ok(&2));
    }

    #[test]
    fn test_min_heap_sorted() {
        let heap = MinHeap::from_vec(vec![3, 1, 2]);
        assert_eq!(heap.peek(), Ok(&1));
        // Ascending priority is descending value.
        assert_eq!(heap.into_sorted_vec(), vec![3, 2, 1]);
    }
}
