//! Conversion facade: JSON text to validated records and back.
//!
//! Decoding parses, casts against the country registry, then binds with
//! serde. Encoding goes the other way and always re-validates, so a record
//! assembled by hand cannot leave the process in a shape the registry would
//! refuse on the way in.

use atlas_core::{cast, uncast, CastError};
use serde_json::Value;

use crate::shapes::{countries_shape, country_shape, country_types};
use crate::types::Country;

/// Errors from [`decode`] and [`encode`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input was not JSON at all.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error(transparent)]
    Cast(#[from] CastError),

    /// A value passed shape validation but does not fit the typed record.
    #[error("cannot bind value to a country record: {0}")]
    Bind(#[source] serde_json::Error),
}

impl ConvertError {
    /// The shape violation behind this error, if there is one.
    pub fn cast_error(&self) -> Option<&CastError> {
        match self {
            ConvertError::Cast(err) => Some(err),
            _ => None,
        }
    }
}

/// Decode a JSON array of countries.
pub fn decode(raw: &str) -> Result<Vec<Country>, ConvertError> {
    let validated = decode_value(&parse(raw)?)?;
    serde_json::from_value(validated).map_err(ConvertError::Bind)
}

/// Decode a single JSON country object.
pub fn decode_one(raw: &str) -> Result<Country, ConvertError> {
    let validated = cast(country_types(), &parse(raw)?, &country_shape())?;
    serde_json::from_value(validated).map_err(ConvertError::Bind)
}

/// Validate an already-parsed array of countries in the decode direction.
pub fn decode_value(value: &Value) -> Result<Value, ConvertError> {
    Ok(cast(country_types(), value, &countries_shape())?)
}

/// Encode countries as pretty JSON with two-space indentation.
pub fn encode(countries: &[Country]) -> Result<String, ConvertError> {
    let value = serde_json::to_value(countries).map_err(ConvertError::Bind)?;
    pretty(&encode_value(&value)?)
}

/// Encode one country as a pretty JSON object.
pub fn encode_one(country: &Country) -> Result<String, ConvertError> {
    let value = serde_json::to_value(country).map_err(ConvertError::Bind)?;
    pretty(&uncast(country_types(), &value, &country_shape())?)
}

/// Validate an in-memory array of countries in the encode direction.
pub fn encode_value(value: &Value) -> Result<Value, ConvertError> {
    Ok(uncast(country_types(), value, &countries_shape())?)
}

/// Parse JSON text without validating it.
pub fn parse(raw: &str) -> Result<Value, ConvertError> {
    serde_json::from_str(raw).map_err(ConvertError::Parse)
}

fn pretty(value: &Value) -> Result<String, ConvertError> {
    serde_json::to_string_pretty(value).map_err(ConvertError::Bind)
}
