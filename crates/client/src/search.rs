//! Search screen state.
//!
//! Each view-model holds what one screen shows: the last term, the last
//! result set and whether the last search failed. A new search replaces
//! the previous results wholesale; nothing is merged.

use atlas_interchange::Country;
use tracing::{debug, warn};

use crate::config::DEFAULT_SUGGESTION_LIMIT;
use crate::source::{ClientError, CountrySource};

/// State shared by the capital and name searches.
#[derive(Debug, Default)]
pub struct SearchState {
    pub term: String,
    pub countries: Vec<Country>,
    /// Why the last search failed; `None` after a successful one.
    pub error: Option<ClientError>,
}

impl SearchState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn apply(&mut self, term: &str, result: Result<Vec<Country>, ClientError>) {
        self.error = None;
        self.term = term.to_string();
        match result {
            Ok(countries) => {
                debug!(term, count = countries.len(), "search succeeded");
                self.countries = countries;
            }
            Err(err) => {
                warn!(term, error = %err, "search failed");
                self.countries.clear();
                self.error = Some(err);
            }
        }
    }
}

/// Search by capital city.
#[derive(Debug, Default)]
pub struct CapitalSearch {
    pub state: SearchState,
}

impl CapitalSearch {
    pub fn new() -> CapitalSearch {
        CapitalSearch::default()
    }

    pub fn search(&mut self, source: &dyn CountrySource, term: &str) {
        self.state.apply(term, source.by_capital(term));
    }
}

/// Search by country name, with a short suggestion list while typing.
#[derive(Debug)]
pub struct NameSearch {
    pub state: SearchState,
    pub show_suggestions: bool,
    pub suggestions: Vec<Country>,
    suggestion_limit: usize,
}

impl Default for NameSearch {
    fn default() -> NameSearch {
        NameSearch::new(DEFAULT_SUGGESTION_LIMIT)
    }
}

impl NameSearch {
    pub fn new(suggestion_limit: usize) -> NameSearch {
        NameSearch {
            state: SearchState::default(),
            show_suggestions: false,
            suggestions: Vec::new(),
            suggestion_limit,
        }
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    pub fn search(&mut self, source: &dyn CountrySource, term: &str) {
        self.state.apply(term, source.by_name(term));
    }

    /// Refresh the suggestion list for a partially typed term.
    ///
    /// Clears any previous error but never sets one: a failed lookup just
    /// leaves the list empty.
    pub fn suggest(&mut self, source: &dyn CountrySource, term: &str) {
        self.state.error = None;
        self.state.term = term.to_string();
        self.show_suggestions = true;
        self.suggestions = match source.by_name(term) {
            Ok(mut countries) => {
                countries.truncate(self.suggestion_limit);
                countries
            }
            Err(err) => {
                debug!(term, error = %err, "no suggestions");
                Vec::new()
            }
        };
    }

    /// Run a full search for a suggestion the user picked.
    pub fn pick_suggestion(&mut self, source: &dyn CountrySource, term: &str) {
        self.show_suggestions = false;
        self.search(source, term);
    }
}

/// Detail view of one country, looked up by alpha code.
#[derive(Debug, Default)]
pub struct CountryView {
    pub code: String,
    pub country: Option<Country>,
    pub error: Option<ClientError>,
}

impl CountryView {
    pub fn new() -> CountryView {
        CountryView::default()
    }

    pub fn load(&mut self, source: &dyn CountrySource, code: &str) {
        self.code = code.to_string();
        match source.by_code(code) {
            Ok(country) => {
                debug!(code, country = %country.name, "country loaded");
                self.country = Some(country);
                self.error = None;
            }
            Err(err) => {
                warn!(code, error = %err, "country lookup failed");
                self.country = None;
                self.error = Some(err);
            }
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_source::StaticCountrySource;

    const ATLAS: &str = include_str!("../../../fixtures/countries/atlas.json");

    fn source() -> StaticCountrySource {
        StaticCountrySource::from_json(ATLAS).unwrap()
    }

    // ──────────────────────────────────────────────
    // Capital and name search
    // ──────────────────────────────────────────────

    #[test]
    fn capital_search_replaces_results() {
        let source = source();
        let mut view = CapitalSearch::new();
        view.search(&source, "lima");
        assert_eq!(view.state.term, "lima");
        assert_eq!(view.state.countries.len(), 1);
        assert!(!view.state.has_error());

        view.search(&source, "buenos");
        assert_eq!(view.state.countries[0].name, "Argentina");
        assert_eq!(view.state.countries.len(), 1);
    }

    #[test]
    fn failed_search_sets_error_and_empties_results() {
        let source = source();
        let mut view = CapitalSearch::new();
        view.search(&source, "santiago");
        view.search(&source, "atlantis");
        assert!(view.state.has_error());
        assert!(view.state.countries.is_empty());
        assert_eq!(view.state.term, "atlantis");

        view.search(&source, "lima");
        assert!(!view.state.has_error());
    }

    #[test]
    fn name_search_uses_name_lookup() {
        let mut view = NameSearch::default();
        view.search(&source(), "peru");
        assert_eq!(view.state.countries[0].capital.as_deref(), Some("Lima"));
    }

    // ──────────────────────────────────────────────
    // Suggestions
    // ──────────────────────────────────────────────

    #[test]
    fn suggestions_are_capped_at_limit() {
        let mut view = NameSearch::new(1);
        view.suggest(&source(), "ar");
        assert!(view.show_suggestions);
        assert_eq!(view.suggestions.len(), 1);
        assert_eq!(view.suggestions[0].name, "Argentina");
        assert!(view.state.countries.is_empty());
    }

    #[test]
    fn failed_suggestion_leaves_error_flag_clear() {
        let source = source();
        let mut view = NameSearch::default();
        view.search(&source, "atlantis");
        assert!(view.state.has_error());

        view.suggest(&source, "atlantis");
        assert!(!view.state.has_error());
        assert!(view.suggestions.is_empty());
        assert!(view.show_suggestions);
    }

    #[test]
    fn picking_a_suggestion_hides_the_list_and_searches() {
        let source = source();
        let mut view = NameSearch::default();
        view.suggest(&source, "chi");
        view.pick_suggestion(&source, "Chile");
        assert!(!view.show_suggestions);
        assert_eq!(view.state.term, "Chile");
        assert_eq!(view.state.countries[0].alpha3_code, "CHL");
    }

    #[test]
    fn default_limit_is_five() {
        assert_eq!(NameSearch::default().suggestion_limit(), 5);
    }

    // ──────────────────────────────────────────────
    // Country view
    // ──────────────────────────────────────────────

    #[test]
    fn country_view_holds_country_or_error() {
        let source = source();
        let mut view = CountryView::new();
        view.load(&source, "CHL");
        assert_eq!(view.country.as_ref().map(|c| c.name.as_str()), Some("Chile"));
        assert!(!view.has_error());

        view.load(&source, "XX");
        assert!(view.country.is_none());
        assert!(matches!(view.error, Some(ClientError::NotFound(_))));
    }
}
