/// Restriction declared with `#[map_access(...)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// The mapper reads the field but never writes it
    ReadOnly,

    /// The mapper writes the field but never reads it
    WriteOnly,
}

impl Access {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Access> {
        let mut ret = None;

        attr.parse_nested_meta(|meta| {
            let access = if meta.path.is_ident("read_only") {
                Access::ReadOnly
            } else if meta.path.is_ident("write_only") {
                Access::WriteOnly
            } else {
                return Err(meta.error("expected `read_only` or `write_only`"));
            };

            if ret.is_some() {
                return Err(meta.error("#[map_access] takes a single mode"));
            }

            ret = Some(access);
            Ok(())
        })?;

        ret.ok_or_else(|| {
            syn::Error::new_spanned(attr, "expected `#[map_access(read_only)]` or `#[map_access(write_only)]`")
        })
    }
}
