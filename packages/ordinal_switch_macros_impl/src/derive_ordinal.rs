use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::syn_helpers::{ordinal_literal, reject_generics, unit_variants};

#[must_use]
pub fn entrypoint(input: &TokenStream) -> TokenStream {
    generate(input).unwrap_or_else(syn::Error::into_compile_error)
}

fn generate(input: &TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input.clone())?;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Ordinal)] can only be applied to enums",
        ));
    };

    reject_generics(&input.generics)?;

    let name = &input.ident;
    let variants = unit_variants(data)?;
    let count = ordinal_literal(variants.len());
    let ordinals: Vec<_> = (0..variants.len()).map(ordinal_literal).collect();

    // An empty match is the only way to produce a value from an uninhabited enum.
    let ordinal_body = if variants.is_empty() {
        quote! { match self {} }
    } else {
        quote! {
            match self {
                #( Self::#variants => #ordinals, )*
            }
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::ordinal_switch::Ordinal for #name {
            const COUNT: usize = #count;
            const VARIANTS: &'static [Self] = &[ #( Self::#variants ),* ];

            #[inline]
            fn ordinal(self) -> usize {
                #ordinal_body
            }

            #[inline]
            fn switch<__Op>(
                ordinal: usize,
                op: __Op,
            ) -> ::core::option::Option<<__Op as ::ordinal_switch::OrdinalFn<Self>>::Output>
            where
                __Op: ::ordinal_switch::OrdinalFn<Self>,
            {
                match ordinal {
                    #(
                        #ordinals => ::core::option::Option::Some(
                            op.call(::ordinal_switch::Tag::<Self, #ordinals>::new()),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
