use proc_macro2::Span;
use syn::{
    visit_mut::{self, VisitMut},
    Lifetime, ParenthesizedGenericArguments, Type, TypeBareFn, TypeReference,
};

/// Gives every elided lifetime in a type a name.
///
/// Lifetimes elided inside `fn(..)` pointers and `Fn(..)` sugar are
/// higher-ranked and are left alone.
pub struct NameElided {
    bound: Option<Lifetime>,
    introduced: Vec<Lifetime>,
}

impl NameElided {
    /// Introduces a fresh lifetime for each elision.
    pub fn fresh() -> Self {
        Self {
            bound: None,
            introduced: Vec::new(),
        }
    }

    /// Replaces each elision with `lifetime`.
    pub fn bound_to(lifetime: Lifetime) -> Self {
        Self {
            bound: Some(lifetime),
            introduced: Vec::new(),
        }
    }

    pub fn into_introduced(self) -> Vec<Lifetime> {
        self.introduced
    }

    fn next(&mut self) -> Lifetime {
        match &self.bound {
            Some(lifetime) => lifetime.clone(),
            None => {
                let lifetime = Lifetime::new(
                    &format!("'__elided{}", self.introduced.len()),
                    Span::call_site(),
                );
                self.introduced.push(lifetime.clone());
                lifetime
            }
        }
    }
}

impl VisitMut for NameElided {
    fn visit_type_reference_mut(&mut self, ty: &mut TypeReference) {
        if ty.lifetime.is_none() {
            ty.lifetime = Some(self.next());
        }
        visit_mut::visit_type_reference_mut(self, ty);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = self.next();
        }
    }

    fn visit_type_bare_fn_mut(&mut self, _: &mut TypeBareFn) {}

    fn visit_parenthesized_generic_arguments_mut(
        &mut self,
        _: &mut ParenthesizedGenericArguments,
    ) {
    }
}

/// Replaces `Self` with the concrete self type of the impl.
pub struct ReplaceSelf<'a>(pub &'a Type);

impl VisitMut for ReplaceSelf<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        match ty {
            Type::Path(path) if path.qself.is_none() && path.path.is_ident("Self") => {
                *ty = self.0.clone();
            }
            _ => visit_mut::visit_type_mut(self, ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn render(ty: &Type) -> String {
        quote!(#ty).to_string()
    }

    #[test]
    fn fresh_lifetimes_are_numbered() {
        let mut ty: Type = parse_quote!((&str, Cow<'_, [u8]>, &'static str));
        let mut elided = NameElided::fresh();
        elided.visit_type_mut(&mut ty);
        let expected: Type = parse_quote!((&'__elided0 str, Cow<'__elided1, [u8]>, &'static str));
        assert_eq!(render(&ty), render(&expected));
        assert_eq!(elided.into_introduced().len(), 2);
    }

    #[test]
    fn bound_lifetimes_are_reused() {
        let mut ty: Type = parse_quote!(&[&str]);
        let lifetime = Lifetime::new("'__call", Span::call_site());
        let mut elided = NameElided::bound_to(lifetime);
        elided.visit_type_mut(&mut ty);
        let expected: Type = parse_quote!(&'__call [&'__call str]);
        assert_eq!(render(&ty), render(&expected));
        assert!(elided.into_introduced().is_empty());
    }

    #[test]
    fn higher_ranked_elisions_are_kept() {
        let mut ty: Type = parse_quote!((fn(&str) -> usize, Box<dyn Fn(&str)>));
        let expected = ty.clone();
        NameElided::fresh().visit_type_mut(&mut ty);
        assert_eq!(render(&ty), render(&expected));
    }

    #[test]
    fn self_is_replaced() {
        let self_ty: Type = parse_quote!(Counter<T>);
        let mut ty: Type = parse_quote!(Option<(Self, Vec<Self>)>);
        ReplaceSelf(&self_ty).visit_type_mut(&mut ty);
        let expected: Type = parse_quote!(Option<(Counter<T>, Vec<Counter<T>>)>);
        assert_eq!(render(&ty), render(&expected));
    }
}
