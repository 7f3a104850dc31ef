//! Growable ordered sequence with typed bounds checking

use crate::error::{AggError, Result};

/// Smallest non-zero capacity allocated on first growth
pub const MIN_CAPACITY: usize = 4;

/// Growable, randomly indexable sequence of values
///
/// Storage grows by doubling once full, so `push` is amortized O(1).
/// Cloning copies every element; moving (or `take`) hands over the
/// buffer without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create a sequence holding `len` default-constructed slots
    pub fn with_default_slots(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Self { items }
    }

    /// Append a value, doubling the backing storage when full
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        self.items.push(value);
    }

    fn grow(&mut self) {
        let target = (self.items.capacity() * 2).max(MIN_CAPACITY);
        self.items.reserve_exact(target - self.items.len());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Bounds-checked element access
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(AggError::IndexOutOfRange { index, len })
    }

    /// Bounds-checked mutable element access
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(AggError::IndexOutOfRange { index, len })
    }

    /// Move the contents out, leaving this sequence empty
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// Unchecked indexing; panics when out of range. Prefer [`Sequence::at`]
/// unless the index is guaranteed by construction.
impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut seq = Sequence::new();
        for v in 0..100 {
            seq.push(v * 3);
        }

        assert_eq!(seq.len(), 100);
        for i in 0..100 {
            assert_eq!(*seq.at(i).unwrap(), i * 3);
        }
    }

    #[test]
    fn test_growth_doubles() {
        let mut seq: Sequence<u8> = Sequence::new();
        assert_eq!(seq.capacity(), 0);

        seq.push(1);
        assert!(seq.capacity() >= MIN_CAPACITY);

        let before = seq.capacity();
        while seq.len() < before {
            seq.push(0);
        }
        seq.push(0);
        assert!(seq.capacity() >= before * 2);
    }

    #[test]
    fn test_at_out_of_range() {
        let seq: Sequence<i32> = [1, 2, 3].into_iter().collect();

        match seq.at(3) {
            Err(AggError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
        assert!(Sequence::<i32>::new().at(0).is_err());
    }

    #[test]
    fn test_at_mut() {
        let mut seq: Sequence<i32> = [1, 2, 3].into_iter().collect();
        *seq.at_mut(1).unwrap() = 20;
        assert_eq!(seq.as_slice(), &[1, 20, 3]);
        assert!(seq.at_mut(5).is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original: Sequence<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let copy = original.clone();

        original.at_mut(0).unwrap().push('!');
        assert_eq!(copy.at(0).unwrap(), "a");
        assert_eq!(original.at(0).unwrap(), "a!");
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut source: Sequence<i32> = (0..10).collect();
        let moved = source.take();

        assert!(source.is_empty());
        assert_eq!(moved.len(), 10);
    }

    #[test]
    fn test_default_slots() {
        let seq: Sequence<Vec<u32>> = Sequence::with_default_slots(4);
        assert_eq!(seq.len(), 4);
        assert!(seq.iter().all(|v| v.is_empty()));
    }
}
