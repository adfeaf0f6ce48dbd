//! Field eligibility and pairing rules.
//!
//! Every rule is a provided method on [`Validator`]; [`TypeValidator`] uses
//! them unchanged. A custom validator overrides individual rules and keeps
//! the rest.

use crate::schema::{Field, Shape, Ty, ValueKind};
use crate::{Error, Result};

pub trait Validator {
    /// Ensures both sides of a type pair are present.
    ///
    /// Shapes reached through `Record::shape` always are; this guards the
    /// resolver's own entry point.
    fn check_shapes<'a>(
        &self,
        source: Option<&'a Shape>,
        target: Option<&'a Shape>,
    ) -> Result<(&'a Shape, &'a Shape)> {
        match (source, target) {
            (Some(source), Some(target)) => Ok((source, target)),
            (None, _) => Err(Error::invalid_argument("source", "no shape was provided")),
            (_, None) => Err(Error::invalid_argument("target", "no shape was provided")),
        }
    }

    fn is_mappable_source_field(&self, field: &Field) -> bool {
        field.readable && self.is_mappable_kind(field)
    }

    fn is_mappable_target_field(&self, field: &Field) -> bool {
        field.writable && !field.ignored && self.is_mappable_kind(field)
    }

    /// Value types and strings are mappable; other reference types are
    /// unless they are collections.
    fn is_mappable_kind(&self, field: &Field) -> bool {
        match field.value_kind {
            ValueKind::Value => true,
            ValueKind::Reference => field.ty.is_string() || !field.ty.is_collection(),
        }
    }

    /// True when a value of `source` must be converted into a new `target`
    /// instance instead of being assigned.
    fn requires_recursive_conversion(&self, source: &Ty, target: &Ty) -> bool {
        source.value_kind() == ValueKind::Reference
            && target.value_kind() == ValueKind::Reference
            && !source.is_string()
            && !target.is_string()
            && source.key != target.key
    }

    /// The target field names the source field through `#[map_from]`.
    fn can_pair_by_override(&self, source: &Field, target: &Field) -> bool {
        target.map_from.as_deref() == Some(source.name.as_str())
            && !is_type_conflict(source, target)
    }

    /// The fields share a name and the target has no `#[map_from]`.
    ///
    /// An override on the target, even one naming another field, disables
    /// name matching for that field.
    fn can_pair_by_name(&self, source: &Field, target: &Field) -> bool {
        target.map_from.is_none()
            && target.name == source.name
            && !is_type_conflict(source, target)
    }
}

/// The default rule set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeValidator;

impl Validator for TypeValidator {}

impl<V: Validator + ?Sized> Validator for &V {
    fn check_shapes<'a>(
        &self,
        source: Option<&'a Shape>,
        target: Option<&'a Shape>,
    ) -> Result<(&'a Shape, &'a Shape)> {
        (**self).check_shapes(source, target)
    }

    fn is_mappable_source_field(&self, field: &Field) -> bool {
        (**self).is_mappable_source_field(field)
    }

    fn is_mappable_target_field(&self, field: &Field) -> bool {
        (**self).is_mappable_target_field(field)
    }

    fn is_mappable_kind(&self, field: &Field) -> bool {
        (**self).is_mappable_kind(field)
    }

    fn requires_recursive_conversion(&self, source: &Ty, target: &Ty) -> bool {
        (**self).requires_recursive_conversion(source, target)
    }

    fn can_pair_by_override(&self, source: &Field, target: &Field) -> bool {
        (**self).can_pair_by_override(source, target)
    }

    fn can_pair_by_name(&self, source: &Field, target: &Field) -> bool {
        (**self).can_pair_by_name(source, target)
    }
}

/// A value-type target only accepts its exact declared type, nullability
/// included. A string target only accepts the same string type. Other
/// reference mismatches are resolved by recursive conversion instead.
fn is_type_conflict(source: &Field, target: &Field) -> bool {
    match target.value_kind {
        ValueKind::Value => {
            target.ty.key != source.ty.key || target.ty.nullable != source.ty.nullable
        }
        ValueKind::Reference => {
            target.ty.is_string() && source.ty.is_string() && target.ty.key != source.ty.key
        }
    }
}
