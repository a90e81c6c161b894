use std::ops::{Index, IndexMut};

use crate::error::{NeuronError, Result};

/// Owned, resizable one-dimensional buffer.
///
/// The backing storage is a boxed slice, so capacity always equals the
/// logical size. Every size-changing operation allocates a fresh buffer and
/// copies into it.
///
/// Slots exposed by growing (`resize`, `with_size`) hold `T::default()`.
/// That value is an implementation detail; callers should write a slot before
/// reading it.
///
/// `insert`, `remove` and indexing treat an in-range index as the caller's
/// responsibility and panic otherwise. The `try_*` and `get` variants check
/// the index and report `IndexOutOfRange` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicArray<T> {
    data: Box<[T]>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> DynamicArray<T> {
        DynamicArray { data: Vec::new().into_boxed_slice() }
    }

    pub fn from_vec(values: Vec<T>) -> DynamicArray<T> {
        DynamicArray { data: values.into_boxed_slice() }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(NeuronError::IndexOutOfRange { index, len })
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Replaces the contents with a deep copy of `other`.
    pub fn assign(&mut self, other: &DynamicArray<T>) {
        self.data = other.data.to_vec().into_boxed_slice();
    }

    /// Grows by one, placing `value` at `index` and shifting `[index, len)` up.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, value: T, index: usize) {
        let mut buffer = Vec::with_capacity(self.data.len() + 1);
        buffer.extend_from_slice(&self.data[..index]);
        buffer.push(value);
        buffer.extend_from_slice(&self.data[index..]);
        self.data = buffer.into_boxed_slice();
    }

    /// Splices every element of `other` in at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_array(&mut self, other: &DynamicArray<T>, index: usize) {
        let mut buffer = Vec::with_capacity(self.data.len() + other.len());
        buffer.extend_from_slice(&self.data[..index]);
        buffer.extend_from_slice(&other.data);
        buffer.extend_from_slice(&self.data[index..]);
        self.data = buffer.into_boxed_slice();
    }

    /// Shrinks by one, dropping the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) {
        let (head, tail) = (&self.data[..index], &self.data[index + 1..]);
        let mut buffer = Vec::with_capacity(head.len() + tail.len());
        buffer.extend_from_slice(head);
        buffer.extend_from_slice(tail);
        self.data = buffer.into_boxed_slice();
    }

    /// Drops the inclusive range `[start_index, end_index]`.
    ///
    /// # Panics
    /// Panics if `start_index > end_index` or `end_index >= len`.
    pub fn remove_range(&mut self, start_index: usize, end_index: usize) {
        assert!(start_index <= end_index, "remove_range: start {start_index} > end {end_index}");
        let (head, tail) = (&self.data[..start_index], &self.data[end_index + 1..]);
        let mut buffer = Vec::with_capacity(head.len() + tail.len());
        buffer.extend_from_slice(head);
        buffer.extend_from_slice(tail);
        self.data = buffer.into_boxed_slice();
    }

    pub fn try_insert(&mut self, value: T, index: usize) -> Result<()> {
        let len = self.data.len();
        if index > len {
            return Err(NeuronError::IndexOutOfRange { index, len });
        }
        self.insert(value, index);
        Ok(())
    }

    pub fn try_remove(&mut self, index: usize) -> Result<()> {
        let len = self.data.len();
        if index >= len {
            return Err(NeuronError::IndexOutOfRange { index, len });
        }
        self.remove(index);
        Ok(())
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    pub fn with_size(size: usize) -> DynamicArray<T> {
        DynamicArray { data: vec![T::default(); size].into_boxed_slice() }
    }

    /// Reallocates to `new_size`, keeping the first `min(old, new)` elements.
    pub fn resize(&mut self, new_size: usize) {
        let kept = new_size.min(self.data.len());
        let mut buffer = Vec::with_capacity(new_size);
        buffer.extend_from_slice(&self.data[..kept]);
        buffer.resize(new_size, T::default());
        self.data = buffer.into_boxed_slice();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        DynamicArray::from_vec(values)
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
