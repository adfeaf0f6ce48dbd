use crate::schema::{Field, Shape, TypeKey};
use crate::validate::Validator;
use crate::Result;

use std::fmt;

/// One resolved (source field, target field) association.
#[derive(Clone, Copy)]
pub struct Pairing<'a> {
    pub source: &'a Field,
    pub target: &'a Field,
}

/// The ordered pairings for one (source, target) type pair.
///
/// Pairings follow source declaration order, then target declaration order
/// among the candidates of each source field. When several pairings write
/// the same target field, the last one applied wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<'a> {
    source: TypeKey,
    target: TypeKey,
    pairings: Vec<Pairing<'a>>,
}

impl<'a> Plan<'a> {
    pub fn source(&self) -> TypeKey {
        self.source
    }

    pub fn target(&self) -> TypeKey {
        self.target
    }

    pub fn pairings(&self) -> &[Pairing<'a>] {
        &self.pairings
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Iterates pairings as `(source name, target name)`.
    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairings
            .iter()
            .map(|pairing| (pairing.source.name.as_str(), pairing.target.name.as_str()))
    }
}

/// Computes the mapping plan from `source` to `target`.
///
/// Fails with an invalid argument error when either shape is absent.
/// Several target fields may pair with one source field, and several source
/// fields may pair with one target field; both are kept.
pub fn resolve<'a, V>(
    validator: &V,
    source: Option<&'a Shape>,
    target: Option<&'a Shape>,
) -> Result<Plan<'a>>
where
    V: Validator + ?Sized,
{
    let (source, target) = validator.check_shapes(source, target)?;

    let targets: Vec<&Field> = target
        .fields
        .iter()
        .filter(|field| validator.is_mappable_target_field(field))
        .collect();

    let mut pairings = vec![];

    for source_field in source
        .fields
        .iter()
        .filter(|field| validator.is_mappable_source_field(field))
    {
        for &target_field in &targets {
            if validator.can_pair_by_override(source_field, target_field)
                || validator.can_pair_by_name(source_field, target_field)
            {
                pairings.push(Pairing {
                    source: source_field,
                    target: target_field,
                });
            }
        }
    }

    Ok(Plan {
        source: source.key,
        target: target.key,
        pairings,
    })
}

impl PartialEq for Pairing<'_> {
    fn eq(&self, other: &Pairing<'_>) -> bool {
        std::ptr::eq(self.source, other.source) && std::ptr::eq(self.target, other.target)
    }
}

impl fmt::Debug for Pairing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source.name, self.target.name)
    }
}
