extern crate proc_macro;

use proc_macro::TokenStream;

/// Generates the field descriptor table of a struct with named fields.
///
/// Field attributes:
///
/// - `#[map_from("source_field")]` populates the field from the named source
///   field instead of the same-named one.
/// - `#[map_ignore]` never writes the field.
/// - `#[map_access(read_only)]` / `#[map_access(write_only)]` restrict how
///   the mapper may use the field.
#[proc_macro_derive(Record, attributes(map_from, map_ignore, map_access))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match recast_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
