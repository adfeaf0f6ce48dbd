mod error;
pub use error::Error;

pub mod plan;
pub use plan::{Pairing, Plan};

pub mod schema;
pub use schema::{Field, FieldValue, Record, Shape};

pub mod validate;
pub use validate::{TypeValidator, Validator};

/// A Result type alias that uses Recast's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
