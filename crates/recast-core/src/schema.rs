mod access;

mod builder;
pub use builder::{FieldBuilder, ShapeBuilder};

mod field;
pub use field::Field;

mod shape;
pub use shape::Shape;

mod ty;
pub use ty::{Ty, TyClass, TypeKey, ValueKind};

mod value;
pub use value::FieldValue;

/// A record type with a static field descriptor table.
///
/// Usually implemented with `#[derive(Record)]`. A manual implementation
/// builds its [`Shape`] once with [`Shape::builder`] and hands out the same
/// reference on every call.
pub trait Record: Default + 'static {
    /// Returns the descriptor table for this record type.
    fn shape() -> &'static Shape;
}
