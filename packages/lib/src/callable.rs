use crate::utils::{NameElided, ReplaceSelf};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use std::iter;
use syn::{
    parse_quote, punctuated::Punctuated, visit_mut::VisitMut, Attribute, FnArg, GenericParam,
    Generics, ImplItem, ItemImpl, Lifetime, LifetimeDef, Receiver, Result, ReturnType, Signature,
    Token, Type,
};

mod kw {
    use syn::custom_keyword;

    custom_keyword!(this);
}

fn call_lifetime() -> Lifetime {
    Lifetime::new("'__call", Span::call_site())
}

/// Expands `#[callable]` on an inherent impl block.
pub fn expand(mut item: ItemImpl) -> Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`#[callable]` expects an inherent impl",
        ));
    }

    let mut calls = Vec::new();
    for impl_item in item.items.iter_mut() {
        if let ImplItem::Method(method) = impl_item {
            if let Some(kind) = take_call_attr(&mut method.attrs)? {
                calls.push(CallMethod::new(kind, &method.sig, &item.self_ty)?);
            }
        }
    }
    if calls.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.self_ty,
            "expected a method marked with `#[call]`",
        ));
    }

    let impls = calls
        .iter()
        .map(|call| call.expand(&item.self_ty, &item.generics));
    Ok(quote!(
        #item
        #(#impls)*
    ))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Plain,
    WithReceiver,
}

fn take_call_attr(attrs: &mut Vec<Attribute>) -> Result<Option<CallKind>> {
    let mut kind = None;
    let mut err = None;
    attrs.retain(|attr| {
        if !attr.path.is_ident("call") {
            return true;
        }
        let parsed = if kind.is_some() {
            Err(syn::Error::new_spanned(attr, "duplicate `#[call]` attribute"))
        } else if attr.tokens.is_empty() {
            Ok(CallKind::Plain)
        } else {
            attr.parse_args::<kw::this>()
                .map(|_| CallKind::WithReceiver)
        };
        match parsed {
            Ok(parsed) => kind = Some(parsed),
            Err(e) => match &mut err {
                None => err = Some(e),
                Some(err) => err.combine(e),
            },
        }
        false
    });
    match err {
        Some(err) => Err(err),
        None => Ok(kind),
    }
}

struct CallMethod {
    method: syn::Ident,
    this: Option<Type>,
    inputs: Vec<Type>,
    output: Type,
    lifetimes: Vec<Lifetime>,
}

impl CallMethod {
    fn new(kind: CallKind, sig: &Signature, self_ty: &Type) -> Result<Self> {
        if let Some(asyncness) = &sig.asyncness {
            return Err(syn::Error::new_spanned(
                asyncness,
                "a call method cannot be async, return `proxy_fn::Async` instead",
            ));
        }
        if !sig.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &sig.generics,
                "a call method cannot be generic",
            ));
        }
        if let Some(variadic) = &sig.variadic {
            return Err(syn::Error::new_spanned(
                variadic,
                "a call method cannot be variadic",
            ));
        }

        let mut inputs = sig.inputs.iter();
        match inputs.next() {
            Some(FnArg::Receiver(Receiver {
                reference: Some(_),
                mutability: None,
                ..
            })) => {}
            _ => {
                return Err(syn::Error::new_spanned(
                    &sig.ident,
                    "a call method must take `&self`",
                ))
            }
        }

        let mut elided = NameElided::fresh();
        let mut types = Vec::new();
        for arg in inputs {
            let mut ty = match arg {
                FnArg::Typed(arg) => (*arg.ty).clone(),
                FnArg::Receiver(receiver) => {
                    return Err(syn::Error::new_spanned(receiver, "unexpected receiver"))
                }
            };
            if let Type::ImplTrait(_) = &ty {
                return Err(syn::Error::new_spanned(
                    &ty,
                    "a call method cannot take `impl Trait` arguments",
                ));
            }
            ReplaceSelf(self_ty).visit_type_mut(&mut ty);
            elided.visit_type_mut(&mut ty);
            types.push(ty);
        }

        let this = match kind {
            CallKind::Plain => None,
            CallKind::WithReceiver if types.is_empty() => {
                return Err(syn::Error::new_spanned(
                    &sig.inputs,
                    "`#[call(this)]` expects a receiver parameter after `&self`",
                ))
            }
            CallKind::WithReceiver => Some(types.remove(0)),
        };

        let mut output = match &sig.output {
            ReturnType::Default => parse_quote!(()),
            ReturnType::Type(_, ty) => (**ty).clone(),
        };
        if let Type::ImplTrait(_) = &output {
            return Err(syn::Error::new_spanned(
                &output,
                "a call method cannot return `impl Trait`",
            ));
        }
        ReplaceSelf(self_ty).visit_type_mut(&mut output);
        NameElided::bound_to(call_lifetime()).visit_type_mut(&mut output);

        Ok(Self {
            method: sig.ident.clone(),
            this,
            inputs: types,
            output,
            lifetimes: elided.into_introduced(),
        })
    }

    fn expand(&self, self_ty: &Type, generics: &Generics) -> TokenStream {
        let call = call_lifetime();
        let mut generics = generics.clone();
        let mut params = iter::once(&call)
            .chain(&self.lifetimes)
            .map(|lifetime| GenericParam::Lifetime(LifetimeDef::new(lifetime.clone())))
            .collect::<Punctuated<GenericParam, Token![,]>>();
        params.extend(generics.params);
        generics.params = params;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#self_ty: #call));
        let (impl_generics, _, where_clause) = generics.split_for_impl();

        let Self {
            method,
            inputs,
            output,
            ..
        } = self;
        let args = (0..inputs.len())
            .map(|i| format_ident!("__arg{}", i))
            .collect::<Vec<_>>();

        match &self.this {
            None => quote!(
                impl #impl_generics ::proxy_fn::Callable<(#(#inputs,)*)> for &#call #self_ty
                #where_clause
                {
                    type Output = #output;

                    fn call(self, (#(#args,)*): (#(#inputs,)*)) -> Self::Output {
                        <#self_ty>::#method(self, #(#args),*)
                    }
                }
            ),
            Some(this) => quote!(
                impl #impl_generics ::proxy_fn::Method<#this, (#(#inputs,)*)> for &#call #self_ty
                #where_clause
                {
                    type Output = #output;

                    fn call_with(
                        self,
                        __this: #this,
                        (#(#args,)*): (#(#inputs,)*),
                    ) -> Self::Output {
                        <#self_ty>::#method(self, __this, #(#args),*)
                    }
                }
            ),
        }
    }
}
