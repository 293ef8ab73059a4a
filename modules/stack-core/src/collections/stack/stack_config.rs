use super::StackOverflowPolicy;


/// Configuration object consumed by [`Stack::from_config`](super::Stack::from_config).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackConfig {
  capacity: usize,
  policy:   StackOverflowPolicy,
}

impl StackConfig {
  /// Creates a configuration that preallocates `capacity` slots and grows on overflow.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, policy: StackOverflowPolicy::Grow }
  }

  /// Returns a copy of this configuration using the provided overflow policy.
  #[must_use]
  pub const fn with_overflow_policy(mut self, policy: StackOverflowPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Returns the configured initial capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> StackOverflowPolicy {
    self.policy
  }
}
