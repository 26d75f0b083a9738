/// Something that can be invoked with a tuple of positional arguments.
///
/// Like [`FnOnce`], `call` consumes the receiver. Shared invocation goes
/// through `&T`, which is what [`Proxy`](crate::Proxy) does with its target and
/// transforms. Every closure, function item and function pointer taking up to
/// eight arguments implements this trait; structs can opt in through
/// [`#[callable]`](macro@crate::callable).
pub trait Callable<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

/// Something that can be invoked with an explicit receiver in addition to
/// its positional arguments.
///
/// The receiver is forwarded verbatim by every proxy configuration.
pub trait Method<This, Args> {
    type Output;

    fn call_with(self, this: This, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Callable<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn call(self, ($($arg,)*): ($($arg,)*)) -> Ret {
                self($($arg),*)
            }
        }

        impl<Func, Ret, This, $($arg,)*> Method<This, ($($arg,)*)> for Func
        where
            Func: FnOnce(This, $($arg),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn call_with(self, this: This, ($($arg,)*): ($($arg,)*)) -> Ret {
                self(this, $($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
impl_callable!(A1, A2, A3, A4, A5, A6, A7);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8);
