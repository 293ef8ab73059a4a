use core::{
  cmp, fmt,
  ops::{Index, IndexMut},
};

use tracing::{trace, warn};

use super::{
  Cursor, IntoIter, Iter, IterMut, LOG_TARGET, PushOutcome, StackConfig, StackError, StackOverflowPolicy, StackStorage,
};


/// Growable LIFO stack over contiguous storage.
///
/// Elements are stored bottom to top, so index `0` is the oldest element and `len() - 1` is the
/// top. With the default [`StackOverflowPolicy::Grow`] a push onto a full stack doubles the
/// capacity (an empty-capacity stack grows to one slot).
pub struct Stack<T> {
  storage: StackStorage<T>,
  policy:  StackOverflowPolicy,
}

impl<T> Stack<T> {
  /// Creates an empty stack with no capacity. Nothing is allocated until the first push.
  #[must_use]
  pub const fn new() -> Self {
    Self { storage: StackStorage::new(), policy: StackOverflowPolicy::Grow }
  }

  /// Creates an empty stack preallocated to hold `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the buffer cannot be allocated.
  pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
    Self::from_config(StackConfig::new(capacity))
  }

  /// Creates an empty stack from the provided configuration.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the configured capacity cannot be allocated.
  pub fn from_config(config: StackConfig) -> Result<Self, StackError> {
    let storage = StackStorage::with_capacity(config.capacity())?;
    Ok(Self { storage, policy: config.overflow_policy() })
  }

  /// Returns the number of elements currently stored.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Alias of [`Stack::len`].
  #[must_use]
  pub fn size(&self) -> usize {
    self.len()
  }

  /// Returns the number of elements the stack holds before it has to grow.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Indicates whether the next push needs to grow (or is rejected under [`StackOverflowPolicy::Block`]).
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.storage.is_full()
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> StackOverflowPolicy {
    self.policy
  }

  /// Removes every element. The capacity is retained.
  pub fn clear(&mut self) {
    self.storage.clear();
  }

  /// Pushes an element onto the top of the stack according to the overflow policy.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when the stack is full under [`StackOverflowPolicy::Block`], or
  /// [`StackError::AllocError`] when growth fails. The stack is unchanged and `item` is dropped in
  /// both cases.
  pub fn push(&mut self, item: T) -> Result<PushOutcome, StackError> {
    if !self.storage.is_full() {
      self.storage.push(item);
      return Ok(PushOutcome::Pushed);
    }

    match self.policy {
      | StackOverflowPolicy::Block => Err(StackError::Full),
      | StackOverflowPolicy::Grow => {
        let capacity = self.grow()?;
        self.storage.push(item);
        Ok(PushOutcome::GrewTo { capacity })
      },
    }
  }

  /// Removes the top element. Popping an empty stack does nothing and returns `None`.
  pub fn pop(&mut self) -> Option<T> {
    self.storage.pop()
  }

  /// Returns a copy of the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn top(&self) -> Result<T, StackError>
  where
    T: Clone, {
    self.storage.peek().cloned().ok_or(StackError::Empty)
  }

  /// Returns a reference to the top element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.storage.peek()
  }

  /// Returns a mutable reference to the top element without removing it.
  pub fn peek_mut(&mut self) -> Option<&mut T> {
    self.storage.peek_mut()
  }

  /// Returns the element at `index` (counted from the bottom) if it is occupied.
  #[must_use]
  pub fn get(&self, index: usize) -> Option<&T> {
    self.storage.as_slice().get(index)
  }

  /// Returns a mutable reference to the element at `index` if it is occupied.
  pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    self.storage.as_mut_slice().get_mut(index)
  }

  /// Returns the occupied elements, bottom first.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    self.storage.as_slice()
  }

  /// Returns the occupied elements mutably, bottom first.
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    self.storage.as_mut_slice()
  }

  /// Returns an iterator over the elements from bottom to top.
  #[must_use]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.storage.as_slice())
  }

  /// Returns an iterator that allows modifying each element, bottom to top.
  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut::new(self.storage.as_mut_slice())
  }

  /// Returns a cursor positioned at the bottom element.
  #[must_use]
  pub fn begin(&self) -> Cursor<'_, T> {
    Cursor::new(self.storage.as_slice(), 0)
  }

  /// Returns a cursor positioned one past the top element.
  #[must_use]
  pub fn end(&self) -> Cursor<'_, T> {
    Cursor::new(self.storage.as_slice(), self.len())
  }

  /// Creates a deep copy with the same capacity, policy, and elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the copy's buffer cannot be allocated.
  pub fn try_clone(&self) -> Result<Self, StackError>
  where
    T: Clone, {
    Ok(Self { storage: self.storage.try_clone()?, policy: self.policy })
  }

  /// Logs the capacity, the element count, and every element at `DEBUG` level.
  ///
  /// Compiled to nothing without `debug_assertions`.
  pub fn display(&self)
  where
    T: fmt::Debug, {
    #[cfg(debug_assertions)]
    {
      tracing::debug!(target: LOG_TARGET, capacity = self.capacity(), len = self.len(), "stack display");
      for (index, item) in self.iter().enumerate() {
        tracing::debug!(target: LOG_TARGET, index = index, value = ?item, "stack element");
      }
    }
  }

  fn grow(&mut self) -> Result<usize, StackError> {
    let current = self.storage.capacity();
    let next = cmp::max(1, current.saturating_mul(2));
    match self.storage.try_grow(next) {
      | Ok(()) => {
        trace!(target: LOG_TARGET, from = current, to = next, len = self.len(), "stack grew");
        Ok(next)
      },
      | Err(err) => {
        warn!(target: LOG_TARGET, from = current, to = next, "stack growth failed to allocate");
        Err(err)
      },
    }
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for Stack<T> {
  fn clone(&self) -> Self {
    Self { storage: self.storage.clone(), policy: self.policy }
  }

  fn clone_from(&mut self, source: &Self) {
    self.storage.clone_from(&source.storage);
    self.policy = source.policy;
  }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Stack")
      .field("items", &self.as_slice())
      .field("capacity", &self.capacity())
      .field("policy", &self.policy)
      .finish()
  }
}

impl<T: PartialEq> PartialEq for Stack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Index<usize> for Stack<T> {
  type Output = T;

  /// # Panics
  ///
  /// Panics when `index >= len()`.
  fn index(&self, index: usize) -> &T {
    &self.storage.as_slice()[index]
  }
}

impl<T> IndexMut<usize> for Stack<T> {
  /// # Panics
  ///
  /// Panics when `index >= len()`.
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.storage.as_mut_slice()[index]
  }
}

impl<T> IntoIterator for Stack<T> {
  type IntoIter = IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.storage.into_vec())
  }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut Stack<T> {
  type IntoIter = IterMut<'a, T>;
  type Item = &'a mut T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}
