//! Error types for the proxy library.

use crate::MaybeAsync;
use std::fmt;

/// An asynchronous value was asked for synchronously before it settled.
#[derive(thiserror::Error)]
#[error("asynchronous value has not settled")]
pub struct NotSettled<'a, T>(pub(crate) MaybeAsync<'a, T>);

impl<'a, T> NotSettled<'a, T> {
    /// Returns the value that was still in flight.
    pub fn into_inner(self) -> MaybeAsync<'a, T> {
        self.0
    }
}

impl<T> fmt::Debug for NotSettled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotSettled(..)")
    }
}
