use super::{Record, Shape};

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type.
///
/// Two keys are equal iff they were created for the same type. The type name
/// is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

/// Copy-by-value vs. identity semantics of a declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Primitives and value-semantics types: numbers, `bool`, `char`,
    /// durations, date/time values, fixed-point decimals.
    Value,

    /// Everything else: strings, records, collections.
    Reference,
}

/// How the mapper treats a declared field type.
#[derive(Clone, Copy)]
pub enum TyClass {
    Value,

    /// Character strings. Reference kind, but matched like a scalar.
    String,

    /// Collection-like types. Never mapped.
    Collection,

    /// A record with its own descriptor table.
    Record(fn() -> &'static Shape),
}

/// The declared type of a field.
#[derive(Debug, Clone, Copy)]
pub struct Ty {
    /// Identity of the declared type. `Option<T>` and `Box<T>` report `T`;
    /// `nullable` tells `Option<T>` apart.
    pub key: TypeKey,

    pub class: TyClass,

    /// True if the field can hold an absent value (`None`).
    pub nullable: bool,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> TypeKey {
        TypeKey {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &TypeKey) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for TyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TyClass::Value => f.write_str("Value"),
            TyClass::String => f.write_str("String"),
            TyClass::Collection => f.write_str("Collection"),
            TyClass::Record(shape) => write!(f, "Record({})", shape().name),
        }
    }
}

impl Ty {
    pub fn value<T: 'static>() -> Ty {
        Ty::new::<T>(TyClass::Value)
    }

    pub fn string<T: 'static>() -> Ty {
        Ty::new::<T>(TyClass::String)
    }

    pub fn collection<T: 'static>() -> Ty {
        Ty::new::<T>(TyClass::Collection)
    }

    pub fn record<R: Record>() -> Ty {
        Ty::new::<R>(TyClass::Record(R::shape))
    }

    fn new<T: 'static>(class: TyClass) -> Ty {
        Ty {
            key: TypeKey::of::<T>(),
            class,
            nullable: false,
        }
    }

    /// Returns the same type, marked as able to hold an absent value.
    pub fn nullable(self) -> Ty {
        Ty {
            nullable: true,
            ..self
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self.class {
            TyClass::Value => ValueKind::Value,
            TyClass::String | TyClass::Collection | TyClass::Record(_) => ValueKind::Reference,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self.class, TyClass::String)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.class, TyClass::Collection)
    }

    pub fn is_record(&self) -> bool {
        matches!(self.class, TyClass::Record(_))
    }

    /// The descriptor table of a record type, `None` for every other class.
    pub fn shape(&self) -> Option<&'static Shape> {
        match self.class {
            TyClass::Record(shape) => Some(shape()),
            _ => None,
        }
    }
}
