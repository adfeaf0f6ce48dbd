use super::Expand;
use crate::schema::{Access, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let recast = &self.recast;
        let ident = &self.record.ident;
        let name = &self.record.name;
        let fields = self.record.fields.iter().map(|field| self.expand_field(field));

        quote! {
            impl #recast::Record for #ident {
                fn shape() -> &'static #recast::Shape {
                    static SHAPE: #recast::OnceLock<#recast::Shape> = #recast::OnceLock::new();

                    SHAPE.get_or_init(|| {
                        #recast::Shape::builder::<#ident>(#name)
                            #( .field(#fields) )*
                            .build()
                    })
                }
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let recast = &self.recast;
        let record_ident = &self.record.ident;
        let field_ident = &field.ident;
        let name = &field.name;

        let map_from = field
            .attrs
            .map_from
            .as_ref()
            .map(|lit| quote!(.map_from(#lit)));

        let ignore = field.attrs.ignore.then(|| quote!(.ignore()));

        let access = field.attrs.access.map(|access| match access {
            Access::ReadOnly => quote!(.read_only()),
            Access::WriteOnly => quote!(.write_only()),
        });

        quote! {
            #recast::FieldBuilder::<#record_ident>::new(
                #name,
                |record: &#record_ident| &record.#field_ident,
                |record: &mut #record_ident| &mut record.#field_ident,
            )
            #map_from
            #ignore
            #access
        }
    }
}
