/// Policy describing how a full stack handles an additional push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackOverflowPolicy {
  /// Double the storage capacity, starting from one slot when the stack has none.
  #[default]
  Grow,
  /// Reject the element with [`StackError::Full`](super::StackError::Full).
  Block,
}
