//! restcountries v2 over HTTP.

use std::time::Duration;

use atlas_interchange::{country_keys, decode, decode_one, Country};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::source::{require_term, ClientError, CountrySource};

/// [`CountrySource`] backed by the restcountries v2 API.
///
/// Every request asks only for the fields the country registry declares, so
/// fields added to the API later never trip the unknown-key check.
pub struct HttpCountrySource {
    agent: ureq::Agent,
    base_url: Url,
}

impl HttpCountrySource {
    pub fn new(config: &ClientConfig) -> HttpCountrySource {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        HttpCountrySource::with_agent(agent, config.base_url.clone())
    }

    /// Use a preconfigured agent. `base_url` is not checked here; one that
    /// cannot carry a path fails every lookup with
    /// [`ClientError::InvalidBaseUrl`].
    pub fn with_agent(agent: ureq::Agent, base_url: Url) -> HttpCountrySource {
        HttpCountrySource { agent, base_url }
    }

    /// `{base}/{resource}/{term}?fields=...`, with `term` percent-encoded as
    /// a single path segment.
    pub fn endpoint(&self, resource: &str, term: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(resource)
            .push(term);
        url.query_pairs_mut()
            .append_pair("fields", &country_keys().join(","));
        Ok(url)
    }

    fn fetch(&self, resource: &str, term: &str) -> Result<String, ClientError> {
        let term = require_term(term)?;
        let url = self.endpoint(resource, term)?;
        debug!(%url, "requesting countries");

        match self.agent.get(url.as_str()).call() {
            Ok(response) => response
                .into_body()
                .read_to_string()
                .map_err(|e| transport_error(&url, e)),
            Err(ureq::Error::StatusCode(404)) => Err(ClientError::NotFound(term.to_string())),
            Err(ureq::Error::StatusCode(status)) => Err(ClientError::Status {
                status,
                url: url.to_string(),
            }),
            Err(e) => Err(transport_error(&url, e)),
        }
    }
}

impl CountrySource for HttpCountrySource {
    fn by_capital(&self, term: &str) -> Result<Vec<Country>, ClientError> {
        let countries = decode(&self.fetch("capital", term)?)?;
        debug!(term, count = countries.len(), "capital search answered");
        Ok(countries)
    }

    fn by_name(&self, term: &str) -> Result<Vec<Country>, ClientError> {
        let countries = decode(&self.fetch("name", term)?)?;
        debug!(term, count = countries.len(), "name search answered");
        Ok(countries)
    }

    fn by_code(&self, code: &str) -> Result<Country, ClientError> {
        Ok(decode_one(&self.fetch("alpha", code)?)?)
    }
}

fn transport_error(url: &Url, err: ureq::Error) -> ClientError {
    ClientError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}
