mod builder;
pub use builder::Builder;

mod cache;
use cache::PlanCache;

mod copy;

use recast_core::schema::TypeKey;
use recast_core::{Error, Plan, Record, Result, TypeValidator, Validator};

use std::sync::Arc;

/// Maps records of one type onto records of another.
///
/// A mapper owns the plans it resolves. The first mapping between two types
/// resolves their plan; later mappings between the same types reuse it.
/// `Mapper` is `Send + Sync` whenever its validator is, and may be shared
/// across threads.
pub struct Mapper<V = TypeValidator> {
    validator: V,
    plans: PlanCache,
}

impl Mapper {
    /// Creates a mapper using the default rule set.
    pub fn new() -> Mapper {
        Mapper::with_validator(TypeValidator)
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<V: Validator> Mapper<V> {
    pub fn with_validator(validator: V) -> Mapper<V> {
        Mapper {
            validator,
            plans: PlanCache::default(),
        }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Creates a `T` populated from the matching fields of `source`.
    ///
    /// Fails with a null argument error when `source` is `None`. Target
    /// fields with no pairing keep their default value.
    ///
    /// # Panics
    ///
    /// Panics if a pairing accepted by the validator cannot be assigned, for
    /// example a `String` target field paired with an `i32` source field of
    /// the same name.
    pub fn map<'a, S, T>(&self, source: impl Into<Option<&'a S>>) -> Result<T>
    where
        S: Record,
        T: Record,
    {
        let Some(source) = source.into() else {
            return Err(Error::null_argument("source"));
        };

        let mut target = T::default();
        self.map_into(source, &mut target)?;
        Ok(target)
    }

    /// Populates an existing `target` from the matching fields of `source`.
    ///
    /// Only paired fields are written; every other field of `target` keeps
    /// its current value.
    pub fn map_into<S, T>(&self, source: &S, target: &mut T) -> Result<()>
    where
        S: Record,
        T: Record,
    {
        copy::copy(self, S::shape(), source, T::shape(), target)
    }

    /// Returns the plan for mapping `S` onto `T`, resolving it if needed.
    pub fn plan<S, T>(&self) -> Result<Arc<Plan<'static>>>
    where
        S: Record,
        T: Record,
    {
        self.plans.get_or_build(&self.validator, S::shape(), T::shape())
    }

    /// Number of resolved plans held by this mapper.
    pub fn cached_plans(&self) -> usize {
        self.plans.len()
    }

    /// The `(source, target)` type pairs with a resolved plan, in the order
    /// they were first resolved.
    pub fn cached_pairs(&self) -> Vec<(TypeKey, TypeKey)> {
        self.plans.keys()
    }
}

impl Default for Mapper {
    fn default() -> Mapper {
        Mapper::new()
    }
}
