use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeapError {
    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Heap is full: capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },
}
