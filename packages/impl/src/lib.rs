use proc_macro::TokenStream;
use syn::{parse::Nothing, parse_macro_input, ItemImpl};

/// Makes a struct callable through one of its methods.
///
/// Mark the method with `#[call]` to implement `Callable` for `&Self`, or
/// with `#[call(this)]` to implement `Method`, taking the first parameter
/// after `&self` as the receiver. The struct's fields stay reachable through
/// any proxy built around it.
///
/// ```rust,ignore
/// struct Adder {
///     label: String,
/// }
///
/// #[proxy_fn::callable]
/// impl Adder {
///     #[call]
///     fn add(&self, a: i32, b: i32) -> i32 {
///         a + b
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn callable(attr: TokenStream, input: TokenStream) -> TokenStream {
    parse_macro_input!(attr as Nothing);
    let input = parse_macro_input!(input as ItemImpl);
    proxy_fn_lib::callable::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
