//! In-memory country data set.

use atlas_interchange::{decode, Country};

use crate::source::{require_term, ClientError, CountrySource};

/// [`CountrySource`] over a fixed list of records.
///
/// Capital and name searches match case-insensitive substrings; code lookup
/// is an exact case-insensitive match on either alpha code. Results keep the
/// data set's order.
#[derive(Debug, Clone, Default)]
pub struct StaticCountrySource {
    countries: Vec<Country>,
}

impl StaticCountrySource {
    pub fn new(countries: Vec<Country>) -> StaticCountrySource {
        StaticCountrySource { countries }
    }

    /// Data set from a JSON array of countries. The text is decoded through
    /// the usual shape validation.
    pub fn from_json(raw: &str) -> Result<StaticCountrySource, ClientError> {
        Ok(StaticCountrySource::new(decode(raw)?))
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    fn matching<F>(&self, term: &str, field: F) -> Result<Vec<Country>, ClientError>
    where
        F: Fn(&Country) -> Option<&str>,
    {
        let term = require_term(term)?;
        let needle = term.to_lowercase();
        let found: Vec<Country> = self
            .countries
            .iter()
            .filter(|c| field(c).is_some_and(|v| v.to_lowercase().contains(&needle)))
            .cloned()
            .collect();
        if found.is_empty() {
            Err(ClientError::NotFound(term.to_string()))
        } else {
            Ok(found)
        }
    }
}

impl CountrySource for StaticCountrySource {
    fn by_capital(&self, term: &str) -> Result<Vec<Country>, ClientError> {
        self.matching(term, |c| c.capital.as_deref())
    }

    fn by_name(&self, term: &str) -> Result<Vec<Country>, ClientError> {
        self.matching(term, |c| Some(c.name.as_str()))
    }

    fn by_code(&self, code: &str) -> Result<Country, ClientError> {
        let code = require_term(code)?;
        self.countries
            .iter()
            .find(|c| c.has_code(code))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(code.to_string()))
    }
}
