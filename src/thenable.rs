use crate::MaybeAsync;
use futures::{FutureExt, TryFutureExt};
use std::future::Future;

/// A value that may still be in flight.
///
/// `settle` registers the continuation: ready values run it on the spot and
/// return its result directly, in-flight values return a pending
/// [`MaybeAsync`] that runs it once they resolve. [`Settled`](Self::Settled)
/// is the type-level half of that decision, so a proxy whose argument
/// transform can never suspend keeps a plain return type.
pub trait Thenable: Sized {
    type Output;

    type Settled<'a, R: 'a>
    where
        Self: 'a;

    fn is_thenable(&self) -> bool;

    fn settle<'a, R, F>(self, f: F) -> Self::Settled<'a, R>
    where
        Self: 'a,
        R: 'a,
        F: FnOnce(Self::Output) -> R + 'a;
}

/// Returns whether `value` is an in-flight asynchronous value.
pub fn is_thenable<T: Thenable>(value: &T) -> bool {
    value.is_thenable()
}

/// Marks any future as an asynchronous value.
///
/// This is how futures that know nothing about this crate take part in a
/// proxy: `Async::new(fut)` or `fut.into()`.
#[derive(Debug, Clone, Copy)]
#[must_use = "futures do nothing unless awaited"]
pub struct Async<F>(pub F);

impl<F> Async<F> {
    pub fn new(future: F) -> Self {
        Self(future)
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F: Future> From<F> for Async<F> {
    fn from(future: F) -> Self {
        Self(future)
    }
}

impl<Fut: Future> Thenable for Async<Fut> {
    type Output = Fut::Output;

    type Settled<'a, R: 'a> = MaybeAsync<'a, R>
    where
        Self: 'a;

    fn is_thenable(&self) -> bool {
        true
    }

    fn settle<'a, R, F>(self, f: F) -> Self::Settled<'a, R>
    where
        Self: 'a,
        R: 'a,
        F: FnOnce(Self::Output) -> R + 'a,
    {
        MaybeAsync::Pending(self.0.map(f).boxed_local())
    }
}

/// An asynchronous value that may reject.
///
/// The continuation only runs for `Ok`; an `Err` becomes the resolution of the
/// settled value unchanged.
#[derive(Debug, Clone, Copy)]
#[must_use = "futures do nothing unless awaited"]
pub struct TryAsync<F>(pub F);

impl<F> TryAsync<F> {
    pub fn new(future: F) -> Self {
        Self(future)
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<Fut, T, E> Thenable for TryAsync<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = T;

    type Settled<'a, R: 'a> = MaybeAsync<'a, Result<R, E>>
    where
        Self: 'a;

    fn is_thenable(&self) -> bool {
        true
    }

    fn settle<'a, R, F>(self, f: F) -> Self::Settled<'a, R>
    where
        Self: 'a,
        R: 'a,
        F: FnOnce(Self::Output) -> R + 'a,
    {
        MaybeAsync::Pending(self.0.map_ok(f).boxed_local())
    }
}

impl<T, E> Thenable for Result<T, E> {
    type Output = T;

    type Settled<'a, R: 'a> = Result<R, E>
    where
        Self: 'a;

    fn is_thenable(&self) -> bool {
        false
    }

    fn settle<'a, R, F>(self, f: F) -> Self::Settled<'a, R>
    where
        Self: 'a,
        R: 'a,
        F: FnOnce(Self::Output) -> R + 'a,
    {
        self.map(f)
    }
}

macro_rules! impl_ready {
    ($($arg:ident),*) => {
        impl<$($arg,)*> Thenable for ($($arg,)*) {
            type Output = Self;

            type Settled<'a, R: 'a> = R
            where
                Self: 'a;

            fn is_thenable(&self) -> bool {
                false
            }

            fn settle<'a, R, F>(self, f: F) -> Self::Settled<'a, R>
            where
                Self: 'a,
                R: 'a,
                F: FnOnce(Self::Output) -> R + 'a,
            {
                f(self)
            }
        }
    };
}

impl_ready!();
impl_ready!(A1);
impl_ready!(A1, A2);
impl_ready!(A1, A2, A3);
impl_ready!(A1, A2, A3, A4);
impl_ready!(A1, A2, A3, A4, A5);
impl_ready!(A1, A2, A3, A4, A5, A6);
impl_ready!(A1, A2, A3, A4, A5, A6, A7);
impl_ready!(A1, A2, A3, A4, A5, A6, A7, A8);
