use super::access::Access;
use super::{Ty, ValueKind};

use std::any::Any;
use std::fmt;

/// Describes one field of a record shape.
///
/// Descriptors are produced by [`ShapeBuilder`](super::ShapeBuilder) and are
/// immutable afterwards.
pub struct Field {
    /// Position of the field in declaration order
    pub index: usize,

    /// Declared field name
    pub name: String,

    /// Value vs. reference semantics of the declared type
    pub value_kind: ValueKind,

    /// Declared type
    pub ty: Ty,

    /// True if the mapper may read the field when it is on the source side
    pub readable: bool,

    /// True if the mapper may write the field when it is on the target side
    pub writable: bool,

    /// Name of the source field this field is populated from:
    /// `#[map_from("name")]`
    pub map_from: Option<String>,

    /// True if the field is annotated with `#[map_ignore]`
    pub ignored: bool,

    pub(super) access: Box<dyn Access>,
}

impl Field {
    /// Borrows this field's value out of `record`.
    ///
    /// Returns `None` when the field holds an absent value.
    ///
    /// # Panics
    ///
    /// Panics if `record` is not an instance of the shape this field belongs
    /// to.
    pub fn read<'a>(&self, record: &'a dyn Any) -> Option<&'a dyn Any> {
        self.access.read(record)
    }

    /// Clones a value returned by [`Field::read`] on this same field.
    pub fn clone_value(&self, value: &dyn Any) -> Box<dyn Any> {
        self.access.clone_value(value)
    }

    /// Stores `value` into this field of `record`.
    ///
    /// The value is returned unchanged if its type does not match the
    /// field's declared type.
    pub fn write(&self, record: &mut dyn Any, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        self.access.write(record, value)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("value_kind", &self.value_kind)
            .field("ty", &self.ty)
            .field("readable", &self.readable)
            .field("writable", &self.writable)
            .field("map_from", &self.map_from)
            .field("ignored", &self.ignored)
            .finish_non_exhaustive()
    }
}
