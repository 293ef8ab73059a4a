use alloc::vec::Vec;

use super::StackError;

#[cfg(test)]
mod tests;

/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// The logical capacity (`limit`) is tracked separately from the allocator's reservation so that
/// growth follows the stack's own policy rather than `Vec`'s amortisation strategy.
#[derive(Debug)]
pub struct StackStorage<T> {
  data:  Vec<T>,
  limit: usize,
}

impl<T> StackStorage<T> {
  /// Creates an empty storage without allocating.
  #[must_use]
  pub const fn new() -> Self {
    Self { data: Vec::new(), limit: 0 }
  }

  /// Creates a storage buffer with room for exactly `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the allocator cannot reserve the buffer.
  pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|_| StackError::AllocError)?;
    Ok(Self { data, limit: capacity })
  }

  /// Returns the number of initialized elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns whether the storage currently holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Returns the configured capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Returns whether every slot up to the capacity limit is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.data.len() >= self.limit
  }

  /// Pushes an element onto the end of the storage without additional checks.
  pub fn push(&mut self, value: T) {
    debug_assert!(self.len() < self.limit);
    self.data.push(value);
  }

  /// Pops the last element from storage.
  pub fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  /// Returns a reference to the last element if it exists.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.data.last()
  }

  /// Returns a mutable reference to the last element if it exists.
  pub fn peek_mut(&mut self) -> Option<&mut T> {
    self.data.last_mut()
  }

  /// Drops every element while keeping the capacity limit.
  pub fn clear(&mut self) {
    self.data.clear();
  }

  /// Returns the occupied prefix as a slice.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Returns the occupied prefix as a mutable slice.
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  /// Attempts to grow the capacity limit to `new_capacity`.
  ///
  /// Growing to the current capacity or below is a no-op.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the allocator cannot satisfy the reservation. The
  /// storage is left untouched in that case.
  pub fn try_grow(&mut self, new_capacity: usize) -> Result<(), StackError> {
    if new_capacity <= self.limit {
      return Ok(());
    }
    let additional = new_capacity - self.data.len();
    self.data.try_reserve_exact(additional).map_err(|_| StackError::AllocError)?;
    self.limit = new_capacity;
    Ok(())
  }

  /// Creates a deep copy holding the same capacity and occupied elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the copy's buffer cannot be reserved.
  pub fn try_clone(&self) -> Result<Self, StackError>
  where
    T: Clone, {
    let mut copy = Self::with_capacity(self.limit)?;
    copy.data.extend_from_slice(&self.data);
    Ok(copy)
  }

  pub(crate) fn into_vec(self) -> Vec<T> {
    self.data
  }
}

impl<T> Default for StackStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for StackStorage<T> {
  fn clone(&self) -> Self {
    let mut data = Vec::with_capacity(self.limit);
    data.extend_from_slice(&self.data);
    Self { data, limit: self.limit }
  }

  fn clone_from(&mut self, source: &Self) {
    self.data.clear();
    self.data.reserve_exact(source.limit);
    self.data.extend_from_slice(&source.data);
    self.limit = source.limit;
  }
}
