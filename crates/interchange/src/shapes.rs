//! The country type registry.
//!
//! Six record types, declared in wire order. Every object rejects keys it
//! does not declare, and the only optional fields are the seven trailing
//! ones on `Country`.

use std::sync::OnceLock;

use atlas_core::{Field, Shape, TypeRegistry};

pub const COUNTRY: &str = "Country";
pub const CURRENCY: &str = "Currency";
pub const FLAGS: &str = "Flags";
pub const LANGUAGE: &str = "Language";
pub const REGIONAL_BLOC: &str = "RegionalBloc";
pub const TRANSLATIONS: &str = "Translations";

const TRANSLATION_LANGUAGES: [&str; 11] =
    ["br", "pt", "nl", "hr", "fa", "de", "es", "fr", "ja", "it", "hu"];

/// The process-wide registry, built on first use.
pub fn country_types() -> &'static TypeRegistry {
    static TYPES: OnceLock<TypeRegistry> = OnceLock::new();
    TYPES.get_or_init(|| {
        TypeRegistry::new(definitions()).expect("country type table references only its own types")
    })
}

/// A single country, as returned by the by-code endpoint.
pub fn country_shape() -> Shape {
    Shape::reference(COUNTRY)
}

/// A list of countries, as returned by the search endpoints.
pub fn countries_shape() -> Shape {
    Shape::array(country_shape())
}

/// Wire keys declared on `Country`, in declaration order.
pub fn country_keys() -> Vec<&'static str> {
    match country_types().get(COUNTRY) {
        Some(Shape::ObjectOf(obj)) => obj.fields().iter().map(|f| f.external.as_str()).collect(),
        _ => Vec::new(),
    }
}

fn definitions() -> Vec<(&'static str, Shape)> {
    vec![
        (COUNTRY, country()),
        (
            CURRENCY,
            Shape::object(vec![
                Field::new("code", Shape::string()),
                Field::new("name", Shape::string()),
                Field::new("symbol", Shape::string()),
            ]),
        ),
        (
            FLAGS,
            Shape::object(vec![
                Field::new("svg", Shape::string()),
                Field::new("png", Shape::string()),
            ]),
        ),
        (
            LANGUAGE,
            Shape::object(vec![
                Field::new("iso639_1", Shape::string()),
                Field::new("iso639_2", Shape::string()),
                Field::new("name", Shape::string()),
                Field::new("nativeName", Shape::string()),
            ]),
        ),
        (
            REGIONAL_BLOC,
            Shape::object(vec![
                Field::new("acronym", Shape::string()),
                Field::new("name", Shape::string()),
                Field::new("otherNames", strings()),
            ]),
        ),
        (
            TRANSLATIONS,
            Shape::object(
                TRANSLATION_LANGUAGES
                    .iter()
                    .map(|lang| Field::new(*lang, Shape::string()))
                    .collect(),
            ),
        ),
    ]
}

fn country() -> Shape {
    Shape::object(vec![
        Field::new("name", Shape::string()),
        Field::new("topLevelDomain", strings()),
        Field::new("alpha2Code", Shape::string()),
        Field::new("alpha3Code", Shape::string()),
        Field::new("callingCodes", strings()),
        Field::new("altSpellings", strings()),
        Field::new("subregion", Shape::string()),
        Field::new("region", Shape::string()),
        Field::new("population", Shape::number()),
        Field::new("demonym", Shape::string()),
        Field::new("timezones", strings()),
        Field::new("nativeName", Shape::string()),
        Field::new("numericCode", Shape::string()),
        Field::new("flags", Shape::reference(FLAGS)),
        Field::new("currencies", Shape::array(Shape::reference(CURRENCY))),
        Field::new("languages", Shape::array(Shape::reference(LANGUAGE))),
        Field::new("translations", Shape::reference(TRANSLATIONS)),
        Field::new("flag", Shape::string()),
        Field::new("independent", Shape::boolean()),
        Field::new("capital", Shape::optional(Shape::string())),
        Field::new("latlng", Shape::optional(Shape::array(Shape::number()))),
        Field::new("area", Shape::optional(Shape::number())),
        Field::new("gini", Shape::optional(Shape::number())),
        Field::new("borders", Shape::optional(strings())),
        Field::new(
            "regionalBlocs",
            Shape::optional(Shape::array(Shape::reference(REGIONAL_BLOC))),
        ),
        Field::new("cioc", Shape::optional(Shape::string())),
    ])
}

fn strings() -> Shape {
    Shape::array(Shape::string())
}
