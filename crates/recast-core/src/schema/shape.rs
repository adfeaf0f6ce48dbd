use super::{Field, ShapeBuilder, TypeKey};

use std::any::Any;
use std::fmt;

/// The ordered field descriptor table of one record type.
pub struct Shape {
    /// Identity of the record type
    pub key: TypeKey,

    /// Short record name, used in diagnostics
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    pub(super) construct: fn() -> Box<dyn Any>,
}

impl Shape {
    /// Starts building the shape of `R`.
    pub fn builder<R: Default + 'static>(name: impl Into<String>) -> ShapeBuilder<R> {
        ShapeBuilder::new(name)
    }

    /// Looks up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Creates a default-initialized instance of the record.
    pub fn construct(&self) -> Box<dyn Any> {
        (self.construct)()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
