use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;
use std::mem;
use std::slice;
use std::vec;

use log::debug;

use crate::compare::{Compare, Natural};
use crate::errors::HeapError;
use crate::errors::HeapError::*;
use crate::utils::{is_heap_by, last_parent, left_child, parent, right_child};

/// Size of the fixed buffer in the classic bounded priority queue.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Capacity {
    Bounded(usize),
    Unbounded,
}

/**
 * An array-backed binary heap.
 *
 * The elements are stored as a complete binary tree in level order: the
 * children of node `i` are at `2i + 1` and `2i + 2`, and its parent is at
 * `(i - 1) / 2`.  The comparator decides priority; with `Natural` this is a
 * max-heap.
 */
#[derive(Clone, Debug)]
pub struct Heap<T, C = Natural> {
    data: Vec<T>,
    capacity: Capacity,
    cmp: C,
}

pub type MaxHeap<T> = Heap<T, Natural>;

impl<T: Ord> Heap<T, Natural> {
    /// A growable max-heap.
    pub fn new() -> Self {
        Heap::new_by(Natural)
    }

    /// A max-heap that holds at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Heap::with_capacity_by(capacity, Natural)
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Heap::from_vec_by(data, Natural)
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    pub fn new_by(cmp: C) -> Self {
        Heap {
            data: Vec::new(),
            capacity: Capacity::Unbounded,
            cmp,
        }
    }

    pub fn with_capacity_by(capacity: usize, cmp: C) -> Self {
        Heap {
            data: Vec::with_capacity(capacity),
            capacity: Capacity::Bounded(capacity),
            cmp,
        }
    }

    /// Build a growable heap from `data` in linear time.
    pub fn from_vec_by(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Heap {
            data,
            capacity: Capacity::Unbounded,
            cmp,
        };
        heap.rebuild();
        heap
    }

    /// Insert `value`, or fail with `CapacityExceeded` if a bounded heap is full.
    /// The heap is unchanged on failure.
    pub fn push(&mut self, value: T) -> Result<(), HeapError> {
        if let Capacity::Bounded(capacity) = self.capacity {
            if self.data.len() >= capacity {
                debug!("push rejected: heap holds its capacity of {}", capacity);
                return Err(CapacityExceeded { capacity });
            }
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Remove and return the element with the highest priority.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let mut top = match self.data.pop() {
            Some(last) => last,
            None => {
                debug!("pop rejected: heap is empty");
                return Err(EmptyHeap);
            }
        };
        // The old last element takes the root, and the old root is returned.
        if !self.data.is_empty() {
            mem::swap(&mut top, &mut self.data[0]);
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Push every item of `iter`, stopping at the first failure.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), HeapError> {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        is_heap_by(&self.data, &self.cmp)
    }

    /// Consume the heap, returning its elements in ascending priority.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        self.data
    }

    /// Consume the heap, yielding elements from the highest priority down.
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    fn rebuild(&mut self) {
        let len = self.data.len();
        if let Some(last) = last_parent(len) {
            for index in (0..=last).rev() {
                self.sift_down_range(index, len);
            }
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if !self.cmp.greater(&self.data[index], &self.data[up]) {
                return;
            }
            self.data.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let end = self.data.len();
        self.sift_down_range(index, end);
    }

    // Only the prefix data[..end] is treated as part of the heap.
    fn sift_down_range(&mut self, mut index: usize, end: usize) {
        loop {
            let mut max = index;
            let left = left_child(index);
            let right = right_child(index);
            if left < end && self.cmp.greater(&self.data[left], &self.data[max]) {
                max = left;
            }
            if right < end && self.cmp.greater(&self.data[right], &self.data[max]) {
                max = right;
            }
            if max == index {
                return;
            }
            self.data.swap(index, max);
            index = max;
        }
    }
}

impl<T, C> Heap<T, C> {
    /// The element with the highest priority.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(EmptyHeap)
    }

    pub fn top(&self) -> Result<&T, HeapError> {
        self.peek()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The maximum number of elements, or `None` if the heap grows on demand.
    pub fn capacity(&self) -> Option<usize> {
        match self.capacity {
            Capacity::Bounded(capacity) => Some(capacity),
            Capacity::Unbounded => None,
        }
    }

    pub fn is_full(&self) -> bool {
        match self.capacity {
            Capacity::Bounded(capacity) => self.data.len() >= capacity,
            Capacity::Unbounded => false,
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in level order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl<T: fmt::Display, C> Heap<T, C> {
    /// Write the elements in level order on one line.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl<T: fmt::Display, C> fmt::Display for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return write!(f, "Heap is empty");
        }
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T, C: Compare<T> + Default> Default for Heap<T, C> {
    fn default() -> Self {
        Heap::new_by(C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from_vec_by(iter.into_iter().collect(), C::default())
    }
}

impl<T, C> IntoIterator for Heap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C> {
    heap: Heap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}
