use alloc::vec::{self, Vec};
use core::iter::FusedIterator;

/// Owning iterator over a [`Stack`](super::Stack), bottom to top.
#[derive(Debug)]
pub struct IntoIter<T> {
  inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
  pub(crate) fn new(items: Vec<T>) -> Self {
    Self { inner: items.into_iter() }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back()
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
