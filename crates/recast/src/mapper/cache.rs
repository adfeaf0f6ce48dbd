use recast_core::schema::TypeKey;
use recast_core::{plan, Plan, Result, Shape, Validator};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Resolved plans keyed by `(source, target)` type.
///
/// Lookup and resolution of a missing pair both happen under one lock, so a
/// pair resolves at most once per cache even with concurrent callers. The
/// lock is released before any field is copied; nested conversions take it
/// again for their own pair.
#[derive(Default)]
pub(super) struct PlanCache {
    plans: Mutex<IndexMap<(TypeKey, TypeKey), Arc<Plan<'static>>>>,
}

impl PlanCache {
    pub(super) fn get_or_build<V>(
        &self,
        validator: &V,
        source: &'static Shape,
        target: &'static Shape,
    ) -> Result<Arc<Plan<'static>>>
    where
        V: Validator + ?Sized,
    {
        let key = (source.key, target.key);
        let mut plans = self.lock();

        if let Some(plan) = plans.get(&key) {
            tracing::trace!(source = %source.name, target = %target.name, "plan cache hit");
            return Ok(plan.clone());
        }

        let plan = Arc::new(plan::resolve(validator, Some(source), Some(target))?);

        tracing::debug!(
            source = %source.name,
            target = %target.name,
            pairings = plan.len(),
            "resolved mapping plan"
        );

        plans.insert(key, plan.clone());
        Ok(plan)
    }

    pub(super) fn len(&self) -> usize {
        self.lock().len()
    }

    pub(super) fn keys(&self) -> Vec<(TypeKey, TypeKey)> {
        self.lock().keys().copied().collect()
    }

    // Resolution never leaves the map half-updated, so a poisoned lock is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, IndexMap<(TypeKey, TypeKey), Arc<Plan<'static>>>> {
        self.plans.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
