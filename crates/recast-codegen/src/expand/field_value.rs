use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the record be declared as a field of another record.
    pub(super) fn expand_field_value_impl(&self) -> TokenStream {
        let recast = &self.recast;
        let ident = &self.record.ident;

        quote! {
            impl #recast::FieldValue for #ident {
                type Inner = Self;

                fn ty() -> #recast::Ty {
                    #recast::Ty::record::<Self>()
                }

                fn value(&self) -> #recast::Option<&Self> {
                    #recast::Option::Some(self)
                }

                fn from_inner(inner: Self) -> Self {
                    inner
                }
            }
        }
    }
}
