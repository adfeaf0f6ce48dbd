//! Copies values between records whose fields line up by name.
//!
//! ```
//! use recast::{Mapper, Record};
//!
//! #[derive(Debug, Default, Record)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! #[derive(Debug, Default, Record)]
//! struct UserDto {
//!     name: String,
//!     #[map_from("name")]
//!     display_name: String,
//!     age: u32,
//! }
//!
//! let user = User { name: "ada".to_string(), age: 36 };
//! let dto = Mapper::new().map::<User, UserDto>(&user).unwrap();
//!
//! assert_eq!(dto.name, "ada");
//! assert_eq!(dto.display_name, "ada");
//! assert_eq!(dto.age, 36);
//! ```

pub mod mapper;
pub use mapper::Mapper;

pub use recast_core::{
    plan, schema, validate, Error, Field, FieldValue, Pairing, Plan, Record, Result, Shape,
    TypeValidator, Validator,
};

pub use recast_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use recast_core::schema::{FieldBuilder, FieldValue, Record, Shape, Ty};
    pub use std::{option::Option, sync::OnceLock};
}
