use super::{Absent, Present, Proxy};
use crate::{Callable, Method, Thenable};
use tracing::trace;

type Ret<'a, F, Args> = <&'a F as Callable<Args>>::Output;
type MethodRet<'a, F, This, Args> = <&'a F as Method<This, Args>>::Output;
type Mapped<'a, Fr, Args> = <Ret<'a, Fr, Args> as Thenable>::Output;
type Settled<'a, Fr, Args, R> = <Ret<'a, Fr, Args> as Thenable>::Settled<'a, R>;

fn log_deferred<T: Thenable>(args: &T) {
    if args.is_thenable() {
        trace!("argument transform is in flight, deferring the target");
    }
}

impl<'a, F, Args> Callable<Args> for &'a Proxy<F, Absent, Absent>
where
    &'a F: Callable<Args>,
{
    type Output = Ret<'a, F, Args>;

    fn call(self, args: Args) -> Self::Output {
        Callable::call(&self.target, args)
    }
}

impl<'a, F, Fr, Args> Callable<Args> for &'a Proxy<F, Present<Fr>, Absent>
where
    &'a Fr: Callable<Args>,
    Ret<'a, Fr, Args>: Thenable + 'a,
    &'a F: Callable<Mapped<'a, Fr, Args>>,
    Ret<'a, F, Mapped<'a, Fr, Args>>: 'a,
{
    type Output = Settled<'a, Fr, Args, Ret<'a, F, Mapped<'a, Fr, Args>>>;

    fn call(self, args: Args) -> Self::Output {
        let target = &self.target;
        let args = Callable::call(&self.from.0, args);
        log_deferred(&args);
        args.settle(move |args| Callable::call(target, args))
    }
}

impl<'a, F, To, Args> Callable<Args> for &'a Proxy<F, Absent, Present<To>>
where
    &'a F: Callable<Args>,
    &'a To: Callable<(Ret<'a, F, Args>,)>,
{
    type Output = Ret<'a, To, (Ret<'a, F, Args>,)>;

    fn call(self, args: Args) -> Self::Output {
        let result = Callable::call(&self.target, args);
        Callable::call(&self.to.0, (result,))
    }
}

impl<'a, F, Fr, To, Args> Callable<Args> for &'a Proxy<F, Present<Fr>, Present<To>>
where
    &'a Fr: Callable<Args>,
    Ret<'a, Fr, Args>: Thenable + 'a,
    &'a F: Callable<Mapped<'a, Fr, Args>>,
    &'a To: Callable<(Ret<'a, F, Mapped<'a, Fr, Args>>,)>,
    Ret<'a, To, (Ret<'a, F, Mapped<'a, Fr, Args>>,)>: 'a,
{
    type Output = Settled<'a, Fr, Args, Ret<'a, To, (Ret<'a, F, Mapped<'a, Fr, Args>>,)>>;

    fn call(self, args: Args) -> Self::Output {
        let (target, to) = (&self.target, &self.to.0);
        let args = Callable::call(&self.from.0, args);
        log_deferred(&args);
        args.settle(move |args| Callable::call(to, (Callable::call(target, args),)))
    }
}

impl<'a, F, This, Args> Method<This, Args> for &'a Proxy<F, Absent, Absent>
where
    &'a F: Method<This, Args>,
{
    type Output = MethodRet<'a, F, This, Args>;

    fn call_with(self, this: This, args: Args) -> Self::Output {
        Method::call_with(&self.target, this, args)
    }
}

impl<'a, F, Fr, This, Args> Method<This, Args> for &'a Proxy<F, Present<Fr>, Absent>
where
    This: 'a,
    &'a Fr: Callable<Args>,
    Ret<'a, Fr, Args>: Thenable + 'a,
    &'a F: Method<This, Mapped<'a, Fr, Args>>,
    MethodRet<'a, F, This, Mapped<'a, Fr, Args>>: 'a,
{
    type Output = Settled<'a, Fr, Args, MethodRet<'a, F, This, Mapped<'a, Fr, Args>>>;

    fn call_with(self, this: This, args: Args) -> Self::Output {
        let target = &self.target;
        let args = Callable::call(&self.from.0, args);
        log_deferred(&args);
        args.settle(move |args| Method::call_with(target, this, args))
    }
}

impl<'a, F, To, This, Args> Method<This, Args> for &'a Proxy<F, Absent, Present<To>>
where
    &'a F: Method<This, Args>,
    &'a To: Callable<(MethodRet<'a, F, This, Args>,)>,
{
    type Output = Ret<'a, To, (MethodRet<'a, F, This, Args>,)>;

    fn call_with(self, this: This, args: Args) -> Self::Output {
        let result = Method::call_with(&self.target, this, args);
        Callable::call(&self.to.0, (result,))
    }
}

impl<'a, F, Fr, To, This, Args> Method<This, Args> for &'a Proxy<F, Present<Fr>, Present<To>>
where
    This: 'a,
    &'a Fr: Callable<Args>,
    Ret<'a, Fr, Args>: Thenable + 'a,
    &'a F: Method<This, Mapped<'a, Fr, Args>>,
    &'a To: Callable<(MethodRet<'a, F, This, Mapped<'a, Fr, Args>>,)>,
    Ret<'a, To, (MethodRet<'a, F, This, Mapped<'a, Fr, Args>>,)>: 'a,
{
    type Output =
        Settled<'a, Fr, Args, Ret<'a, To, (MethodRet<'a, F, This, Mapped<'a, Fr, Args>>,)>>;

    fn call_with(self, this: This, args: Args) -> Self::Output {
        let (target, to) = (&self.target, &self.to.0);
        let args = Callable::call(&self.from.0, args);
        log_deferred(&args);
        args.settle(move |args| Callable::call(to, (Method::call_with(target, this, args),)))
    }
}
