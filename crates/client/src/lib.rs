//! atlas-client: where country records come from and how searches over
//! them behave.
//!
//! A [`CountrySource`] answers the three lookups (by capital, by name, by
//! alpha code). [`HttpCountrySource`] asks the restcountries API,
//! [`StaticCountrySource`] answers from an in-memory data set. The
//! view-models in [`search`] hold the state of one search screen each.

pub mod config;
pub mod http;
pub mod search;
pub mod source;
pub mod static_source;

pub use config::{ClientConfig, ConfigError};
pub use http::HttpCountrySource;
pub use search::{CapitalSearch, CountryView, NameSearch, SearchState};
pub use source::{ClientError, CountrySource};
pub use static_source::StaticCountrySource;
