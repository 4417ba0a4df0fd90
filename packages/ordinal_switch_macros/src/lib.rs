#![allow(
    missing_docs,
    reason = "Private API, public API is documented in `ordinal_switch` package"
)]

use proc_macro::TokenStream;

#[proc_macro_derive(Ordinal)]
pub fn __macro_derive_ordinal(item: TokenStream) -> TokenStream {
    ordinal_switch_macros_impl::derive_ordinal::entrypoint(&item.into()).into()
}
