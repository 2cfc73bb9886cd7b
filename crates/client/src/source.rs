//! The data-access seam.

use atlas_interchange::{ConvertError, Country};

/// Anything that can answer the three country lookups.
///
/// Implementations return records that already passed shape validation.
pub trait CountrySource {
    /// Countries whose capital matches `term`.
    fn by_capital(&self, term: &str) -> Result<Vec<Country>, ClientError>;

    /// Countries whose name matches `term`.
    fn by_name(&self, term: &str) -> Result<Vec<Country>, ClientError>;

    /// The country with alpha-2 or alpha-3 code `code`.
    fn by_code(&self, code: &str) -> Result<Country, ClientError>;
}

/// All errors a [`CountrySource`] can return.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The term was empty or only whitespace; no request was made.
    #[error("search term is empty")]
    EmptyTerm,

    #[error("no country matches \"{0}\"")]
    NotFound(String),

    /// The API answered with a non-success status other than 404.
    #[error("country API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The base URL cannot have endpoint segments appended; no request was
    /// made.
    #[error("base URL {0} cannot carry an endpoint path")]
    InvalidBaseUrl(String),

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The response body was not valid country data.
    #[error("invalid country data: {0}")]
    Convert(#[from] ConvertError),
}

/// Trimmed `term`, or [`ClientError::EmptyTerm`] when nothing is left.
pub(crate) fn require_term(term: &str) -> Result<&str, ClientError> {
    let term = term.trim();
    if term.is_empty() {
        Err(ClientError::EmptyTerm)
    } else {
        Ok(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_terms_are_rejected() {
        assert!(matches!(require_term(""), Err(ClientError::EmptyTerm)));
        assert!(matches!(require_term(" \t"), Err(ClientError::EmptyTerm)));
        assert_eq!(require_term("  lima ").unwrap(), "lima");
    }

    #[test]
    fn messages() {
        assert_eq!(
            ClientError::NotFound("atlantis".into()).to_string(),
            "no country matches \"atlantis\""
        );
        assert_eq!(
            ClientError::Status {
                status: 503,
                url: "https://restcountries.com/v2/name/chile".into()
            }
            .to_string(),
            "country API returned HTTP 503 for https://restcountries.com/v2/name/chile"
        );
    }
}
