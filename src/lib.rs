mod heap;
mod min_heap;

pub mod compare;
pub mod errors;
pub mod utils;

pub use crate::heap::{Heap, IntoIterSorted, MaxHeap, DEFAULT_CAPACITY};
pub use compare::{Compare, Natural, Reversed};
pub use errors::HeapError;
pub use min_heap::MinHeap;
