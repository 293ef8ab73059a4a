#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Growable LIFO stack container.
//!
//! Re-exports the `no_std` core crate with the standard library enabled.


pub use ponder_stack_core_rs::collections::{
  self,
  stack::{
    Cursor, IntoIter, Iter, IterMut, LOG_TARGET, PushOutcome, Stack, StackConfig, StackError, StackOverflowPolicy,
    StackStorage,
  },
};

/// Returns the version of this crate as recorded in the package metadata.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
