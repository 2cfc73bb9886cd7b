//! Typed structs for the restcountries v2 record family.
//!
//! Field order matches the registry declarations in [`crate::shapes`], so a
//! serialized record already lists its keys in wire order.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One country as returned by the `/capital`, `/name` and `/alpha` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub top_level_domain: Vec<String>,
    pub alpha2_code: String,
    pub alpha3_code: String,
    pub calling_codes: Vec<String>,
    pub alt_spellings: Vec<String>,
    pub subregion: String,
    pub region: String,
    /// Any JSON number. Kept as written so integers re-encode without a
    /// fractional part.
    pub population: Number,
    pub demonym: String,
    pub timezones: Vec<String>,
    pub native_name: String,
    pub numeric_code: String,
    pub flags: Flags,
    pub currencies: Vec<Currency>,
    pub languages: Vec<Language>,
    pub translations: Translations,
    /// URL of the flag image. Same target as `flags.svg` in current API data.
    pub flag: String,
    pub independent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    /// Latitude then longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latlng: Option<Vec<f64>>,
    /// Square kilometres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gini: Option<f64>,
    /// Alpha-3 codes of neighbouring countries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_blocs: Option<Vec<RegionalBloc>>,
    /// International Olympic Committee code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cioc: Option<String>,
}

impl Country {
    /// Case-insensitive match against either alpha code.
    pub fn has_code(&self, code: &str) -> bool {
        self.alpha2_code.eq_ignore_ascii_case(code) || self.alpha3_code.eq_ignore_ascii_case(code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flags {
    pub svg: String,
    pub png: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    #[serde(rename = "iso639_1")]
    pub iso639_1: String,
    #[serde(rename = "iso639_2")]
    pub iso639_2: String,
    pub name: String,
    #[serde(rename = "nativeName")]
    pub native_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBloc {
    pub acronym: String,
    pub name: String,
    pub other_names: Vec<String>,
}

/// Country name in eleven fixed languages, keyed by language code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translations {
    pub br: String,
    pub pt: String,
    pub nl: String,
    pub hr: String,
    pub fa: String,
    pub de: String,
    pub es: String,
    pub fr: String,
    pub ja: String,
    pub it: String,
    pub hu: String,
}
