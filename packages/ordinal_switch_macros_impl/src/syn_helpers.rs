use proc_macro2::Literal;
use syn::{DataEnum, Fields, Generics, Ident};

/// Ordinals are emitted as `usize`-suffixed literals so they type-check both as `match`
/// patterns against a `usize` and as const generic arguments.
pub(crate) fn ordinal_literal(ordinal: usize) -> Literal {
    Literal::usize_suffixed(ordinal)
}

pub(crate) fn reject_generics(generics: &Generics) -> syn::Result<()> {
    if generics.params.is_empty() && generics.where_clause.is_none() {
        return Ok(());
    }

    Err(syn::Error::new_spanned(
        generics,
        "#[derive(Ordinal)] does not support generic enums",
    ))
}

/// Returns the variant identifiers in declaration order, which is also ordinal order.
pub(crate) fn unit_variants(data: &DataEnum) -> syn::Result<Vec<&Ident>> {
    data.variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "#[derive(Ordinal)] requires variants without fields",
                ));
            }

            if let Some((_, discriminant)) = &variant.discriminant {
                return Err(syn::Error::new_spanned(
                    discriminant,
                    "#[derive(Ordinal)] does not support explicit discriminants; \
                     ordinals follow declaration order",
                ));
            }

            Ok(&variant.ident)
        })
        .collect()
}
