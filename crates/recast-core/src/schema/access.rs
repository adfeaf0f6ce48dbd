use super::FieldValue;

use std::any::{type_name, Any};

/// Type-erased read/write access to one field of one record type.
pub(crate) trait Access: Send + Sync {
    /// Borrows the field's value out of `record`.
    fn read<'a>(&self, record: &'a dyn Any) -> Option<&'a dyn Any>;

    /// Clones a value previously returned by [`Access::read`].
    fn clone_value(&self, value: &dyn Any) -> Box<dyn Any>;

    /// Stores `value` into the field. The value is handed back when it is not
    /// of the field's inner type.
    fn write(&self, record: &mut dyn Any, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}

pub(crate) struct FieldAccess<R, V> {
    pub(crate) get: fn(&R) -> &V,
    pub(crate) get_mut: fn(&mut R) -> &mut V,
}

impl<R, V> Access for FieldAccess<R, V>
where
    R: 'static,
    V: FieldValue,
    V::Inner: Clone,
{
    fn read<'a>(&self, record: &'a dyn Any) -> Option<&'a dyn Any> {
        let Some(record) = record.downcast_ref::<R>() else {
            record_mismatch::<R>()
        };

        (self.get)(record).value().map(|value| value as &dyn Any)
    }

    fn clone_value(&self, value: &dyn Any) -> Box<dyn Any> {
        match value.downcast_ref::<V::Inner>() {
            Some(value) => Box::new(value.clone()),
            None => panic!(
                "field value is not a `{}`; values must come from the same field",
                type_name::<V::Inner>()
            ),
        }
    }

    fn write(&self, record: &mut dyn Any, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        let Some(record) = record.downcast_mut::<R>() else {
            record_mismatch::<R>()
        };

        let value = value.downcast::<V::Inner>()?;
        *(self.get_mut)(record) = V::from_inner(*value);
        Ok(())
    }
}

#[cold]
fn record_mismatch<R>() -> ! {
    panic!(
        "record is not a `{}`; a field descriptor was used with another shape's record",
        type_name::<R>()
    )
}
