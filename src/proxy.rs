mod call;

use std::{
    any,
    fmt,
    ops::{Deref, DerefMut},
};
use tracing::debug;

/// Starts configuring a proxy around `target`.
///
/// ```rust,ignore
/// let add_random = wrap(add).configure(
///     Options::new()
///         .from(|| Async::new(async {
///             let numbers = generate_numbers().await;
///             (numbers[0], numbers[1])
///         }))
///         .to(|sum: i32| sum * 2),
/// );
/// let doubled = add_random.call(()).await;
/// ```
pub fn wrap<F>(target: F) -> Configurator<F> {
    Configurator { target }
}

/// A target waiting for its [`Options`].
#[must_use = "a configurator does nothing until it is configured"]
pub struct Configurator<F> {
    target: F,
}

impl<F> Configurator<F> {
    pub fn configure<Fr, To>(self, options: Options<Fr, To>) -> Proxy<F, Fr, To>
    where
        Fr: Stage,
        To: Stage,
    {
        let Options { from, to } = options;
        let proxy = Proxy {
            target: self.target,
            from,
            to,
        };
        debug!(
            interposition = ?proxy.interposition(),
            target = any::type_name::<F>(),
            "configured proxy"
        );
        proxy
    }

    /// Configures a pure pass-through.
    pub fn build(self) -> Proxy<F> {
        self.configure(Options::new())
    }
}

/// An unconfigured stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Absent;

/// A configured stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Present<F>(pub F);

mod private {
    pub trait Sealed {}

    impl Sealed for super::Absent {}
    impl<F> Sealed for super::Present<F> {}
}

/// Either [`Absent`] or [`Present`].
pub trait Stage: private::Sealed {
    const PRESENT: bool;
}

impl Stage for Absent {
    const PRESENT: bool = false;
}

impl<F> Stage for Present<F> {
    const PRESENT: bool = true;
}

/// The two optional stages of a proxy.
///
/// `from` maps the proxy's arguments to the target's arguments and may return
/// an asynchronous value (see [`Thenable`](crate::Thenable)). `to` maps the
/// target's result to the proxy's result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Options<Fr = Absent, To = Absent> {
    pub from: Fr,
    pub to: To,
}

impl Options {
    pub fn new() -> Self {
        Self {
            from: Absent,
            to: Absent,
        }
    }
}

impl<Fr, To> Options<Fr, To> {
    pub fn from<G>(self, from: G) -> Options<Present<G>, To> {
        Options {
            from: Present(from),
            to: self.to,
        }
    }

    pub fn to<G>(self, to: G) -> Options<Fr, Present<G>> {
        Options {
            from: self.from,
            to: Present(to),
        }
    }
}

/// Which stages a proxy interposes around its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interposition {
    PassThrough,
    MapArgs,
    MapResult,
    MapBoth,
}

impl Interposition {
    pub fn of<Fr: Stage, To: Stage>() -> Self {
        match (Fr::PRESENT, To::PRESENT) {
            (false, false) => Self::PassThrough,
            (true, false) => Self::MapArgs,
            (false, true) => Self::MapResult,
            (true, true) => Self::MapBoth,
        }
    }
}

/// A callable standing in for its target.
///
/// Invoke it through [`Callable`](crate::Callable) or
/// [`Method`](crate::Method) exactly as the target would be invoked, except
/// that the arguments are the ones `from` accepts when it is present. Field
/// access dereferences to the target on every use.
#[derive(Clone, Copy)]
pub struct Proxy<F, Fr = Absent, To = Absent> {
    target: F,
    from: Fr,
    to: To,
}

impl<F, Fr, To> Proxy<F, Fr, To> {
    pub fn target(&self) -> &F {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut F {
        &mut self.target
    }

    pub fn into_inner(self) -> F {
        self.target
    }
}

impl<F, Fr: Stage, To: Stage> Proxy<F, Fr, To> {
    pub fn interposition(&self) -> Interposition {
        Interposition::of::<Fr, To>()
    }
}

impl<F, Fr, To> Deref for Proxy<F, Fr, To> {
    type Target = F;

    fn deref(&self) -> &Self::Target {
        &self.target
    }
}

impl<F, Fr, To> DerefMut for Proxy<F, Fr, To> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.target
    }
}

impl<F, Fr: Stage, To: Stage> fmt::Debug for Proxy<F, Fr, To> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("target", &any::type_name::<F>())
            .field("interposition", &self.interposition())
            .finish()
    }
}
