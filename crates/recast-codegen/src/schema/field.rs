use super::{Access, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, as written in the struct
    pub(crate) ident: syn::Ident,

    /// Declared name used for matching; raw identifiers lose their `r#`
    pub(crate) name: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Source field named by `#[map_from("...")]`
    pub(crate) map_from: Option<syn::LitStr>,

    /// True if the field is annotated with `#[map_ignore]`
    pub(crate) ignore: bool,

    /// Access restriction from `#[map_access(...)]`
    pub(crate) access: Option<Access>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("map_from") {
                if attrs.map_from.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[map_from] attribute",
                    ));
                } else if let Some(lit) = errs.check(parse_map_from(attr)) {
                    attrs.map_from = Some(lit);
                }
            } else if attr.path().is_ident("map_ignore") {
                if attrs.ignore {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[map_ignore] attribute",
                    ));
                } else if errs.check(attr.meta.require_path_only()).is_some() {
                    attrs.ignore = true;
                }
            } else if attr.path().is_ident("map_access") {
                if attrs.access.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[map_access] attribute",
                    ));
                } else {
                    attrs.access = errs.check(Access::from_ast(attr));
                }
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            attrs,
        })
    }
}

fn parse_map_from(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let lit: syn::LitStr = attr.parse_args().map_err(|err| {
        syn::Error::new(err.span(), "expected a source field name: #[map_from(\"name\")]")
    })?;

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(
            &lit,
            "#[map_from] source field name must not be empty",
        ));
    }

    Ok(lit)
}
