use super::access::{Access, FieldAccess};
use super::{Field, FieldValue, Shape, Ty, TypeKey};

use std::any::Any;
use std::marker::PhantomData;

/// Builds the [`Shape`] of record type `R`.
///
/// ```
/// use recast_core::schema::{FieldBuilder, Shape};
///
/// #[derive(Default)]
/// struct Account {
///     login: String,
///     secret: String,
/// }
///
/// let shape = Shape::builder::<Account>("Account")
///     .field(FieldBuilder::new("login", |r: &Account| &r.login, |r: &mut Account| &mut r.login))
///     .field(
///         FieldBuilder::new("secret", |r: &Account| &r.secret, |r: &mut Account| &mut r.secret)
///             .ignore(),
///     )
///     .build();
///
/// assert_eq!(shape.fields.len(), 2);
/// assert!(shape.field("secret").unwrap().ignored);
/// ```
pub struct ShapeBuilder<R> {
    name: String,
    fields: Vec<Field>,
    _record: PhantomData<fn() -> R>,
}

/// Builds one [`Field`] of record type `R`.
pub struct FieldBuilder<R> {
    name: String,
    ty: Ty,
    readable: bool,
    writable: bool,
    map_from: Option<String>,
    ignored: bool,
    access: Box<dyn Access>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Default + 'static> ShapeBuilder<R> {
    pub(super) fn new(name: impl Into<String>) -> Self {
        ShapeBuilder {
            name: name.into(),
            fields: vec![],
            _record: PhantomData,
        }
    }

    /// Appends a field. Fields keep the order they are added in.
    pub fn field(mut self, field: FieldBuilder<R>) -> Self {
        let index = self.fields.len();
        self.fields.push(field.into_field(index));
        self
    }

    pub fn build(self) -> Shape {
        Shape {
            key: TypeKey::of::<R>(),
            name: self.name,
            fields: self.fields,
            construct: construct::<R>,
        }
    }
}

impl<R: 'static> FieldBuilder<R> {
    /// Describes a field through a pair of accessors.
    ///
    /// The field is readable and writable and carries no annotations until
    /// configured otherwise.
    pub fn new<V>(
        name: impl Into<String>,
        get: fn(&R) -> &V,
        get_mut: fn(&mut R) -> &mut V,
    ) -> Self
    where
        V: FieldValue,
        V::Inner: Clone,
    {
        FieldBuilder {
            name: name.into(),
            ty: V::ty(),
            readable: true,
            writable: true,
            map_from: None,
            ignored: false,
            access: Box::new(FieldAccess { get, get_mut }),
            _record: PhantomData,
        }
    }

    /// Populates this field from the source field called `name` instead of
    /// the source field sharing its own name.
    pub fn map_from(mut self, name: impl Into<String>) -> Self {
        self.map_from = Some(name.into());
        self
    }

    /// Never writes this field when it is on the target side.
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// The mapper reads the field but never writes it.
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// The mapper writes the field but never reads it.
    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    fn into_field(self, index: usize) -> Field {
        Field {
            index,
            name: self.name,
            value_kind: self.ty.value_kind(),
            ty: self.ty,
            readable: self.readable,
            writable: self.writable,
            map_from: self.map_from,
            ignored: self.ignored,
            access: self.access,
        }
    }
}

fn construct<R: Default + 'static>() -> Box<dyn Any> {
    Box::new(R::default())
}
