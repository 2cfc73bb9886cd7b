//! atlas-core: shape descriptors and the JSON cast engine.
//!
//! Untrusted JSON is checked against a [`Shape`] before anything binds it
//! to typed records. The pieces, in dependency order:
//!
//! - [`Shape`] -- closed descriptor of an expected JSON shape
//! - [`TypeRegistry`] -- immutable name-to-shape table, validated on construction
//! - [`transform()`] -- recursive validate-and-rekey pass, run in either
//!   [`Direction`]; [`cast()`] and [`uncast()`] are the two common entry points
//! - [`schema`] -- JSON Schema export of a registry
//!
//! The engine is a pure function over `serde_json::Value`. It performs no
//! I/O and keeps no state between calls.

pub mod error;
pub mod registry;
pub mod schema;
pub mod shape;
pub mod transform;

pub use error::{CastError, RegistryError};
pub use registry::TypeRegistry;
pub use shape::{Additional, Field, ObjectShape, Primitive, Shape};
pub use transform::{cast, transform, uncast, Direction};
