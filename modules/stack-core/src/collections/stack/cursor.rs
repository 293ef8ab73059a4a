use core::{fmt, ptr};

#[cfg(test)]
mod tests;

/// Bidirectional position within a [`Stack`](super::Stack).
///
/// Valid positions run from `0` (the bottom element) to `len` (one past the top). Two cursors are
/// equal when they point at the same position of the same stack buffer.
pub struct Cursor<'a, T> {
  items:    &'a [T],
  position: usize,
}

impl<'a, T> Cursor<'a, T> {
  pub(crate) const fn new(items: &'a [T], position: usize) -> Self {
    Self { items, position }
  }

  /// Returns the current position.
  #[must_use]
  pub const fn index(&self) -> usize {
    self.position
  }

  /// Returns the element under the cursor, or `None` at the end position.
  #[must_use]
  pub fn current(&self) -> Option<&'a T> {
    self.items.get(self.position)
  }

  /// Indicates whether the cursor sits one past the top element.
  #[must_use]
  pub const fn is_end(&self) -> bool {
    self.position >= self.items.len()
  }

  /// Advances towards the top. Returns `false` when already at the end position.
  pub fn move_next(&mut self) -> bool {
    if self.is_end() {
      return false;
    }
    self.position += 1;
    true
  }

  /// Moves back towards the bottom. Returns `false` when already at the bottom.
  pub fn move_prev(&mut self) -> bool {
    if self.position == 0 {
      return false;
    }
    self.position -= 1;
    true
  }
}

impl<T> Clone for Cursor<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
  fn eq(&self, other: &Self) -> bool {
    ptr::eq(self.items, other.items) && self.position == other.position
  }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Cursor").field("position", &self.position).field("len", &self.items.len()).finish()
  }
}
