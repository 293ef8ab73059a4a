use core::{iter::FusedIterator, slice};

/// Mutable iterator over a [`Stack`](super::Stack), bottom to top.
#[derive(Debug)]
pub struct IterMut<'a, T> {
  inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
  pub(crate) fn new(items: &'a mut [T]) -> Self {
    Self { inner: items.iter_mut() }
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back()
  }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
