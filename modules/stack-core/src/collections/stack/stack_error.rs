use core::fmt;


/// Errors that may arise while operating on a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// Allocator-related failure occurred while reserving or growing the storage.
  AllocError,
  /// The stack is at capacity and its overflow policy forbids growth.
  Full,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::AllocError => write!(f, "failed to allocate stack buffer"),
      | StackError::Full => write!(f, "stack is full"),
    }
  }
}

impl core::error::Error for StackError {}
