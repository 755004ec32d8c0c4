use std::cmp::Ordering;

/// An ordering on `T` used to prioritize heap elements.
///
/// An element that compares `Greater` than another has higher priority, and
/// is popped first.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// The natural `Ord` ordering: the largest element has the highest priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of `Ord`: the smallest element has the highest priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord + ?Sized> Compare<T> for Reversed {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
