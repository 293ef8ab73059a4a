/// Outcome of a successful push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored without changing the capacity.
  Pushed,
  /// The storage grew before the element was stored.
  GrewTo {
    /// Capacity after growth.
    capacity: usize,
  },
}
