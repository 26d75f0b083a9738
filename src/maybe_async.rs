use crate::{error::NotSettled, Thenable};
use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use std::{
    fmt,
    future::{Future, IntoFuture},
};

/// A value that is either already there or still being computed.
///
/// This is the widened return type of a proxy whose argument transform may
/// suspend. A `Ready` value is never turned into a future behind the caller's
/// back; awaiting it resolves on the first poll.
#[must_use = "a pending value does nothing unless awaited"]
pub enum MaybeAsync<'a, T> {
    Ready(T),
    Pending(LocalBoxFuture<'a, T>),
}

impl<'a, T> MaybeAsync<'a, T> {
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'a,
    {
        Self::Pending(future.boxed_local())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Maps the value, keeping it synchronous if it already is.
    pub fn map<U, F>(self, f: F) -> MaybeAsync<'a, U>
    where
        T: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        match self {
            Self::Ready(value) => MaybeAsync::Ready(f(value)),
            Self::Pending(future) => MaybeAsync::Pending(future.map(f).boxed_local()),
        }
    }

    /// Takes the value out if it is ready, otherwise hands the pending value
    /// back inside the error.
    pub fn try_ready(self) -> Result<T, NotSettled<'a, T>> {
        match self {
            Self::Ready(value) => Ok(value),
            pending => Err(NotSettled(pending)),
        }
    }
}

impl<T> From<T> for MaybeAsync<'_, T> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<'a, T> IntoFuture for MaybeAsync<'a, T> {
    type Output = T;
    type IntoFuture = Either<future::Ready<T>, LocalBoxFuture<'a, T>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => Either::Left(future::ready(value)),
            Self::Pending(future) => Either::Right(future),
        }
    }
}

impl<'f, T> Thenable for MaybeAsync<'f, T> {
    type Output = T;

    type Settled<'a, R: 'a> = MaybeAsync<'a, R>
    where
        Self: 'a;

    fn is_thenable(&self) -> bool {
        self.is_pending()
    }

    fn settle<'a, R, F>(self, f: F) -> Self::Settled<'a, R>
    where
        Self: 'a,
        R: 'a,
        F: FnOnce(Self::Output) -> R + 'a,
    {
        match self {
            Self::Ready(value) => MaybeAsync::Ready(f(value)),
            Self::Pending(future) => MaybeAsync::Pending(future.map(f).boxed_local()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MaybeAsync<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn ready_values_stay_synchronous() {
        let calls = Cell::new(0);
        let mapped = MaybeAsync::Ready(20).map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.try_ready().ok(), Some(21));
    }

    #[test]
    fn pending_values_defer_the_mapping() {
        let calls = Cell::new(0);
        let mapped = MaybeAsync::pending(async { 20 }).map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert!(mapped.is_pending());
        assert_eq!(calls.get(), 0);
        assert_eq!(block_on(mapped.into_future()), 21);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn try_ready_returns_the_pending_value() {
        let err = MaybeAsync::pending(async { "later" }).try_ready().unwrap_err();
        assert_eq!(block_on(err.into_inner().into_future()), "later");
    }

    #[test]
    fn ready_values_await_immediately() {
        let value: MaybeAsync<'_, _> = "now".into();
        assert_eq!(block_on(value.into_future()), "now");
    }

    #[test]
    fn debug_hides_the_future() {
        assert_eq!(format!("{:?}", MaybeAsync::Ready(1)), "Ready(1)");
        assert_eq!(
            format!("{:?}", MaybeAsync::pending(async { 1 })),
            "Pending(..)"
        );
    }
}
