//! Wrap a function so that its arguments and/or its result are transformed on
//! the way through, without changing how it is called.
//!
//! ```rust,ignore
//! use proxy_fn::{wrap, Async, Callable, Options};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let proxy = wrap(add).configure(
//!     Options::new()
//!         .from(|x: i32| (x * 2, 10))
//!         .to(|sum: i32| sum.to_string()),
//! );
//! assert_eq!(proxy.call((3,)), "16");
//!
//! // An argument transform may suspend; the proxy then returns a `MaybeAsync`.
//! let proxy = wrap(add).configure(
//!     Options::new()
//!         .from(|x: i32| Async::new(async move { (x * 2, 10) }))
//!         .to(|sum: i32| sum.to_string()),
//! );
//! assert_eq!(proxy.call((3,)).await, "16");
//! ```
//!
//! The target is never awaited by the proxy: `to` receives whatever the target
//! returned, future or not.

mod callable;
pub mod error;
mod maybe_async;
mod proxy;
mod thenable;

#[doc(inline)]
pub use proxy_fn_impl::*;

pub use callable::{Callable, Method};
pub use error::NotSettled;
pub use maybe_async::MaybeAsync;
pub use proxy::{wrap, Absent, Configurator, Interposition, Options, Present, Proxy, Stage};
pub use thenable::{is_thenable, Async, Thenable, TryAsync};
