use core::{iter::FusedIterator, slice};

/// Read-only iterator over a [`Stack`](super::Stack), bottom to top.
#[derive(Debug)]
pub struct Iter<'a, T> {
  inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
  pub(crate) fn new(items: &'a [T]) -> Self {
    Self { inner: items.iter() }
  }

  /// Returns the elements not yet yielded.
  #[must_use]
  pub fn as_slice(&self) -> &'a [T] {
    self.inner.as_slice()
  }
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back()
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
