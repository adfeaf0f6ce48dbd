use super::Mapper;

use recast_core::{Error, Pairing, Result, Shape, Validator};

use std::any::Any;

/// Applies the `(source, target)` plan to one pair of record instances.
pub(super) fn copy<V: Validator>(
    mapper: &Mapper<V>,
    source_shape: &'static Shape,
    source: &dyn Any,
    target_shape: &'static Shape,
    target: &mut dyn Any,
) -> Result<()> {
    let plan = mapper
        .plans
        .get_or_build(&mapper.validator, source_shape, target_shape)?;

    for pairing in plan.pairings() {
        let Some(value) = pairing.source.read(source) else {
            tracing::trace!(
                source = %pairing.source.name,
                target = %pairing.target.name,
                "skipping absent value"
            );
            continue;
        };

        let value = if mapper
            .validator
            .requires_recursive_conversion(&pairing.source.ty, &pairing.target.ty)
        {
            convert(mapper, pairing, value)?
        } else {
            pairing.source.clone_value(value)
        };

        if pairing.target.write(target, value).is_err() {
            panic!(
                "cannot assign `{}.{}` ({}) to `{}.{}` ({})",
                source_shape.name,
                pairing.source.name,
                pairing.source.ty.key,
                target_shape.name,
                pairing.target.name,
                pairing.target.ty.key,
            );
        }
    }

    Ok(())
}

/// Maps a nested record value into a fresh instance of the target field's
/// record type.
fn convert<V: Validator>(
    mapper: &Mapper<V>,
    pairing: &Pairing<'static>,
    value: &dyn Any,
) -> Result<Box<dyn Any>> {
    let (source_shape, target_shape) = mapper
        .validator
        .check_shapes(pairing.source.ty.shape(), pairing.target.ty.shape())
        .map_err(|err| {
            err.context(Error::invalid_argument(
                pairing.target.name.as_str(),
                format!("cannot convert from `{}`", pairing.source.name),
            ))
        })?;

    tracing::trace!(
        source = %source_shape.name,
        target = %target_shape.name,
        field = %pairing.target.name,
        "converting nested record"
    );

    let mut nested = target_shape.construct();
    copy(mapper, source_shape, value, target_shape, &mut *nested)?;
    Ok(nested)
}
