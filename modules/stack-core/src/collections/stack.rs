//! Growable LIFO stack backed by contiguous storage.

mod cursor;
mod into_iter;
mod iter;
mod iter_mut;
mod push_outcome;
mod stack_config;
mod stack_error;
mod stack_overflow_policy;
mod stack_storage;
mod stack_struct;

pub use cursor::Cursor;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use push_outcome::PushOutcome;
pub use stack_config::StackConfig;
pub use stack_error::StackError;
pub use stack_overflow_policy::StackOverflowPolicy;
pub use stack_storage::StackStorage;
pub use stack_struct::Stack;

/// Target used for every `tracing` event emitted by the stack.
pub const LOG_TARGET: &str = "ponder::stack";
