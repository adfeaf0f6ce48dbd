use super::Ty;

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::time::Duration;

/// A type that can be declared as a record field.
///
/// `Inner` is the value the mapper moves around. It is the type itself for
/// scalars, strings, collections and records. `Option<T>` and `Box<T>` are
/// transparent wrappers around `T::Inner`; an `Option` holding `None` is an
/// absent value and is never copied.
pub trait FieldValue: 'static {
    type Inner: 'static;

    /// The declared type reported in field descriptors.
    fn ty() -> Ty;

    /// Borrows the current value, `None` when the field holds no value.
    fn value(&self) -> Option<&Self::Inner>;

    /// Wraps a value so it can be stored in a field of this type.
    fn from_inner(inner: Self::Inner) -> Self;
}

macro_rules! impl_field_value {
    ( $ctor:ident => $( $t:ty ),+ $(,)? ) => {
        $(
            impl FieldValue for $t {
                type Inner = Self;

                fn ty() -> Ty {
                    Ty::$ctor::<Self>()
                }

                fn value(&self) -> Option<&Self> {
                    Some(self)
                }

                fn from_inner(inner: Self) -> Self {
                    inner
                }
            }
        )+
    };
}

impl_field_value!(value =>
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    Duration,
);

impl_field_value!(string => String, Cow<'static, str>);

#[cfg(feature = "chrono")]
impl_field_value!(value =>
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
);

#[cfg(feature = "jiff")]
impl_field_value!(value =>
    jiff::Timestamp,
    jiff::Zoned,
    jiff::SignedDuration,
    jiff::Span,
    jiff::civil::Date,
    jiff::civil::Time,
    jiff::civil::DateTime,
);

#[cfg(feature = "rust_decimal")]
impl_field_value!(value => rust_decimal::Decimal);

#[cfg(feature = "bigdecimal")]
impl_field_value!(value => bigdecimal::BigDecimal);

#[cfg(feature = "uuid")]
impl_field_value!(value => uuid::Uuid);

macro_rules! impl_collection {
    ( $( [ $($params:tt)* ] $t:ty ),+ $(,)? ) => {
        $(
            impl<$($params)*> FieldValue for $t {
                type Inner = Self;

                fn ty() -> Ty {
                    Ty::collection::<Self>()
                }

                fn value(&self) -> Option<&Self> {
                    Some(self)
                }

                fn from_inner(inner: Self) -> Self {
                    inner
                }
            }
        )+
    };
}

impl_collection!(
    [T: 'static] Vec<T>,
    [T: 'static] VecDeque<T>,
    [T: 'static] LinkedList<T>,
    [T: 'static] BTreeSet<T>,
    [T: 'static, S: 'static] HashSet<T, S>,
    [K: 'static, V: 'static] BTreeMap<K, V>,
    [K: 'static, V: 'static, S: 'static] HashMap<K, V, S>,
    [T: 'static, const N: usize] [T; N],
);

#[cfg(feature = "indexmap")]
impl_collection!(
    [T: 'static, S: 'static] indexmap::IndexSet<T, S>,
    [K: 'static, V: 'static, S: 'static] indexmap::IndexMap<K, V, S>,
);

impl<T: FieldValue> FieldValue for Option<T> {
    type Inner = T::Inner;

    fn ty() -> Ty {
        T::ty().nullable()
    }

    fn value(&self) -> Option<&T::Inner> {
        self.as_ref().and_then(FieldValue::value)
    }

    fn from_inner(inner: T::Inner) -> Self {
        Some(T::from_inner(inner))
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    type Inner = T::Inner;

    fn ty() -> Ty {
        T::ty()
    }

    fn value(&self) -> Option<&T::Inner> {
        (**self).value()
    }

    fn from_inner(inner: T::Inner) -> Self {
        Box::new(T::from_inner(inner))
    }
}
