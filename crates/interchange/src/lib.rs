//! atlas-interchange: the Country record family on both sides of the wire.
//!
//! [`types`] holds the typed records, [`shapes`] the fixed type registry
//! that describes their JSON form, and [`convert`] the facade that moves
//! JSON text through the cast engine into records and back.
//!
//! Every record produced here has passed shape validation first; serde
//! binding only runs on values the registry has already accepted.

pub mod convert;
pub mod shapes;
pub mod types;

pub use convert::{
    decode, decode_one, decode_value, encode, encode_one, encode_value, parse, ConvertError,
};
pub use shapes::{countries_shape, country_keys, country_shape, country_types};
pub use types::*;
