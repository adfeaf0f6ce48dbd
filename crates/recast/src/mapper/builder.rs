use super::Mapper;

use recast_core::{Record, Result, Shape, TypeValidator, Validator};

/// Configures a [`Mapper`] before first use.
///
/// Registered type pairs are resolved by [`Builder::build`], so resolution
/// cost is paid up front instead of on the first `map` call.
pub struct Builder<V = TypeValidator> {
    validator: V,

    /// Type pairs to resolve eagerly, in registration order
    pairs: Vec<(&'static Shape, &'static Shape)>,
}

impl Default for Builder {
    fn default() -> Builder {
        Builder {
            validator: TypeValidator,
            pairs: vec![],
        }
    }
}

impl<V: Validator> Builder<V> {
    /// Replaces the rule set used to resolve plans.
    pub fn validator<W: Validator>(self, validator: W) -> Builder<W> {
        Builder {
            validator,
            pairs: self.pairs,
        }
    }

    pub fn register<S: Record, T: Record>(&mut self) -> &mut Self {
        self.pairs.push((S::shape(), T::shape()));
        self
    }

    /// Creates a mapper with every registered pair already resolved.
    ///
    /// The builder keeps its configuration and can build further mappers.
    pub fn build(&mut self) -> Result<Mapper<V>>
    where
        V: Clone,
    {
        let mapper = Mapper::with_validator(self.validator.clone());

        for &(source, target) in &self.pairs {
            mapper.plans.get_or_build(&mapper.validator, source, target)?;
        }

        Ok(mapper)
    }
}
