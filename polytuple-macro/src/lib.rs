//! Procedural macros used by and exported from the `polytuple` crate.
//!
//! Users should depend on `polytuple` and use its re-export of [`tuple!`]; the variant generator
//! [`impl_variants!`] is only meaningful when invoked from within `polytuple` itself.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Span, TokenStream as TokenStream2},
    proc_macro_crate::{crate_name, FoundCrate},
    quote::{format_ident, quote},
    syn::{
        parse::Parser, punctuated::Punctuated, spanned::Spanned, Expr, Ident, LitInt, Token,
    },
};

/// The names of the variants, indexed by arity. Must agree with the invocation of
/// [`impl_variants!`] inside `polytuple`.
const VARIANTS: [&str; 8] = [
    "Unit", "Single", "Dual", "Triple", "Quad", "Penta", "Hexa", "Hepta",
];

/// Ordinal names of tuple positions, used for the named accessors.
const ORDINALS: [&str; 7] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh",
];

const TYPE_PARAMS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

/// Construct the tuple variant matching the number of given elements.
///
/// `tuple!()` is a `Unit`, `tuple!(a)` is a `Single`, `tuple!(a, b)` is a `Dual`, and so on up
/// to `Hepta` for seven elements. More than seven elements is a compile error.
#[proc_macro]
pub fn tuple(input: TokenStream) -> TokenStream {
    let elements = match Punctuated::<Expr, Token![,]>::parse_terminated.parse(input) {
        Ok(elements) => elements,
        Err(error) => return error.to_compile_error().into(),
    };

    if let Some(extra) = elements.iter().nth(ORDINALS.len()) {
        return syn::Error::new(
            extra.span(),
            format!(
                "tuples of at most {} elements are supported, found {}",
                ORDINALS.len(),
                elements.len()
            ),
        )
        .to_compile_error()
        .into();
    }

    let krate = polytuple_crate();
    let variant = Ident::new(VARIANTS[elements.len()], Span::call_site());
    let elements = elements.iter();
    (quote! { #krate::#variant::new(#(#elements),*) }).into()
}

/// The path at which the `polytuple` crate can be found from the invocation site.
///
/// Inside `polytuple` this is the crate's own name, which the crate's unit tests alias to its root,
/// so the same tokens work from within the crate, from its doctests, and from its integration tests.
fn polytuple_crate() -> TokenStream2 {
    match crate_name("polytuple") {
        Ok(FoundCrate::Name(name)) => {
            let name = Ident::new(&name, Span::call_site());
            quote!(#name)
        }
        Ok(FoundCrate::Itself) | Err(_) => quote!(polytuple),
    }
}

/// Generate every tuple variant, from arity zero up to the number of names given, along with
/// their trait implementations. The `n`th name (starting from zero) becomes the variant of arity
/// `n`.
///
/// This is an implementation detail of `polytuple`: the generated code refers to `crate::` paths
/// and will not compile anywhere else.
#[doc(hidden)]
#[proc_macro]
pub fn impl_variants(input: TokenStream) -> TokenStream {
    let names = match Punctuated::<Ident, Token![,]>::parse_terminated.parse(input) {
        Ok(names) => names,
        Err(error) => return error.to_compile_error().into(),
    };

    if let Some(extra) = names.iter().nth(VARIANTS.len()) {
        return syn::Error::new(extra.span(), "too many tuple variants")
            .to_compile_error()
            .into();
    }

    names
        .iter()
        .enumerate()
        .map(|(arity, name)| Variant { name, arity }.generate())
        .collect::<TokenStream2>()
        .into()
}

/// A single tuple variant to generate.
struct Variant<'a> {
    name: &'a Ident,
    arity: usize,
}

impl Variant<'_> {
    fn params(&self) -> Vec<Ident> {
        TYPE_PARAMS[..self.arity]
            .iter()
            .map(|param| format_ident!("{}", param))
            .collect()
    }

    fn ordinals(&self) -> Vec<Ident> {
        ORDINALS[..self.arity]
            .iter()
            .map(|ordinal| format_ident!("{}", ordinal))
            .collect()
    }

    fn indices(&self) -> Vec<syn::Index> {
        (0..self.arity).map(syn::Index::from).collect()
    }

    /// Tokens constructing this variant from the given element expressions.
    fn construct(&self, elements: &[TokenStream2]) -> TokenStream2 {
        let name = self.name;
        if self.arity == 0 {
            quote!(#name)
        } else {
            quote!(#name(#(#elements),*))
        }
    }

    fn generate(&self) -> TokenStream2 {
        let name = self.name;
        let arity = self.arity;
        let params = self.params();
        let ordinals = self.ordinals();
        let indices = self.indices();

        let struct_doc = match arity {
            0 => "The tuple of no elements. All `Unit`s are equal; see also [`UNIT`](crate::UNIT)."
                .to_owned(),
            1 => "A tuple of exactly one element.".to_owned(),
            n => format!("A tuple of exactly {} elements.", n),
        };

        let definition = if arity == 0 {
            quote! {
                #[doc = #struct_doc]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
                pub struct #name;
            }
        } else {
            quote! {
                #[doc = #struct_doc]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
                pub struct #name<#(#params),*>(#(#params),*);
            }
        };

        let (generics, ty) = if arity == 0 {
            (quote!(), quote!(#name))
        } else {
            (quote!(<#(#params),*>), quote!(#name<#(#params),*>))
        };
        let bounded = |bound: TokenStream2| {
            let predicates: Vec<TokenStream2> =
                params.iter().map(|param| quote!(#param: #bound)).collect();
            if predicates.is_empty() {
                quote!()
            } else {
                quote!(where #(#predicates,)*)
            }
        };
        let hash_bounds = bounded(quote!(::core::hash::Hash));

        let from_self: Vec<TokenStream2> = indices.iter().map(|i| quote!(self.#i)).collect();
        let from_args: Vec<TokenStream2> = ordinals.iter().map(|o| quote!(#o)).collect();

        // `self.0, self.1, ..` reads both a variant and a std tuple, so this rebuilds either.
        let rebuild_from_self = self.construct(&from_self);
        let rebuild_from_args = self.construct(&from_args);

        let new_doc = format!("Construct a new `{}` from its elements, in order.", name);
        let accessor_docs = ORDINALS[..arity]
            .iter()
            .map(|ordinal| format!("The {} element of this tuple.", ordinal));

        let inherent = quote! {
            impl #generics #ty {
                #[doc = #new_doc]
                #[allow(clippy::too_many_arguments)]
                pub const fn new(#(#ordinals: #params),*) -> Self {
                    #rebuild_from_args
                }

                #(
                    #[doc = #accessor_docs]
                    pub fn #ordinals(&self) -> &#params {
                        &self.#indices
                    }
                )*
            }
        };

        let tuple_impl = quote! {
            impl #generics ::core::hash::Hash for #ty #hash_bounds {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&<Self as crate::Tuple>::LENGTH, state);
                    #(::core::hash::Hash::hash(&self.#indices, state);)*
                }
            }

            impl #generics crate::tuple::sealed::Tuple for #ty {}

            impl #generics crate::Tuple for #ty {
                const LENGTH: usize = #arity;
                type AsNative = (#(#params,)*);

                fn type_names() -> ::std::vec::Vec<&'static str> {
                    ::std::vec![#(::core::any::type_name::<#params>()),*]
                }

                fn into_native(self) -> Self::AsNative {
                    (#(#from_self,)*)
                }
            }

            impl #generics crate::tuple::sealed::Native for (#(#params,)*) {}

            impl #generics crate::Native for (#(#params,)*) {
                type AsTuple = #ty;

                fn into_tuple(self) -> Self::AsTuple {
                    #rebuild_from_self
                }
            }

            impl #generics ::core::convert::From<(#(#params,)*)> for #ty {
                fn from(native: (#(#params,)*)) -> Self {
                    crate::Native::into_tuple(native)
                }
            }
        };

        let get_impls = (0..arity).map(|i| {
            let index = index_type(i);
            let output = &params[i];
            let field = &indices[i];
            quote! {
                impl #generics crate::index::Get<#index> for #ty {
                    type Output = #output;

                    fn get(&self) -> &#output {
                        &self.#field
                    }
                }
            }
        });

        let erased = if arity == 0 {
            quote! {
                impl ::core::convert::From<#name> for crate::ErasedTuple {
                    fn from(_: #name) -> Self {
                        crate::ErasedTuple::from_elements(::std::vec::Vec::new())
                    }
                }

                impl ::core::convert::TryFrom<crate::ErasedTuple> for #name {
                    type Error = crate::Error;

                    fn try_from(erased: crate::ErasedTuple) -> ::core::result::Result<Self, Self::Error> {
                        erased.into_elements(0).map(|_| #name)
                    }
                }
            }
        } else {
            let taken: Vec<TokenStream2> = params
                .iter()
                .map(|param| quote!(elements.next_as::<#param>()?))
                .collect();
            let rebuild_from_taken = self.construct(&taken);
            let element_bounds = bounded(quote!(crate::erased::Element));
            quote! {
                impl #generics ::core::convert::From<#ty> for crate::ErasedTuple #element_bounds {
                    fn from(tuple: #ty) -> Self {
                        crate::ErasedTuple::from_elements(::std::vec![
                            #(::std::boxed::Box::new(tuple.#indices)
                                as ::std::boxed::Box<dyn crate::erased::Element>),*
                        ])
                    }
                }

                impl #generics ::core::convert::TryFrom<crate::ErasedTuple> for #ty #element_bounds {
                    type Error = crate::Error;

                    fn try_from(erased: crate::ErasedTuple) -> ::core::result::Result<Self, Self::Error> {
                        let mut elements = erased.into_elements(#arity)?;
                        ::core::result::Result::Ok(#rebuild_from_taken)
                    }
                }
            }
        };

        let arbitrary = if arity == 0 {
            quote! {
                #[cfg(feature = "quickcheck")]
                impl ::quickcheck::Arbitrary for #name {
                    fn arbitrary(_: &mut ::quickcheck::Gen) -> Self {
                        #name
                    }
                }
            }
        } else {
            let generated: Vec<TokenStream2> = params
                .iter()
                .map(|param| quote!(<#param as ::quickcheck::Arbitrary>::arbitrary(g)))
                .collect();
            let rebuild_from_generated = self.construct(&generated);
            let arbitrary_bounds = bounded(quote!(::quickcheck::Arbitrary));
            quote! {
                #[cfg(feature = "quickcheck")]
                impl #generics ::quickcheck::Arbitrary for #ty #arbitrary_bounds {
                    fn arbitrary(g: &mut ::quickcheck::Gen) -> Self {
                        #rebuild_from_generated
                    }

                    fn shrink(&self) -> ::std::boxed::Box<dyn ::core::iter::Iterator<Item = Self>> {
                        let native = crate::Tuple::into_native(::core::clone::Clone::clone(self));
                        ::std::boxed::Box::new(
                            ::quickcheck::Arbitrary::shrink(&native).map(crate::Native::into_tuple),
                        )
                    }
                }
            }
        };

        quote! {
            #definition
            #inherent
            #tuple_impl
            #(#get_impls)*
            #erased
            #arbitrary
        }
    }
}

/// The unary type-level index for position `i`, i.e. `S<S<..Z..>>` with `i` successors.
fn index_type(i: usize) -> TokenStream2 {
    (0..i).fold(quote!(crate::index::Z), |inner, _| {
        quote!(crate::index::S<#inner>)
    })
}

/// Generate the `_0`, `_1`, ... aliases for the first `N` type-level indices.
#[doc(hidden)]
#[proc_macro]
pub fn generate_index_aliases(input: TokenStream) -> TokenStream {
    let count = match syn::parse::<LitInt>(input).and_then(|n| n.base10_parse::<usize>()) {
        Ok(count) => count,
        Err(error) => return error.to_compile_error().into(),
    };

    (0..count)
        .map(|i| {
            let alias = format_ident!("_{}", i);
            let index = index_type(i);
            let doc = format!("The type-level index of position {} (counting from zero).", i);
            quote! {
                #[doc = #doc]
                pub type #alias = #index;
            }
        })
        .collect::<TokenStream2>()
        .into()
}
