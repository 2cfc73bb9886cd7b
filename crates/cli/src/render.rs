//! Plain-text rendering of search results and country details.

use atlas_interchange::Country;
use serde_json::Number;

const HEADERS: [&str; 5] = ["#", "Name", "Capital", "Code", "Population"];

/// One row per country, columns padded to the widest cell.
pub(crate) fn countries_table(countries: &[Country]) -> String {
    let rows: Vec<[String; 5]> = countries
        .iter()
        .enumerate()
        .map(|(i, c)| {
            [
                (i + 1).to_string(),
                c.name.clone(),
                c.capital.clone().unwrap_or_else(|| "-".to_string()),
                c.alpha3_code.clone(),
                format_population(&c.population),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, &width))| {
            let pad = width - cell.chars().count();
            // Numbers right-aligned, text left-aligned.
            if col == 0 || col == 4 {
                format!("{}{}", " ".repeat(pad), cell)
            } else {
                format!("{}{}", cell, " ".repeat(pad))
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Short list of `Name (CODE)` lines for the suggestion box.
pub(crate) fn suggestion_list(term: &str, suggestions: &[Country]) -> String {
    if suggestions.is_empty() {
        return format!("no suggestions for \"{}\"\n", term);
    }
    let mut out = format!("suggestions for \"{}\":\n", term);
    for c in suggestions {
        out.push_str(&format!("  {} ({})\n", c.name, c.alpha3_code));
    }
    out
}

/// Labelled detail view of a single country.
pub(crate) fn country_details(c: &Country) -> String {
    let mut lines: Vec<(&str, String)> = vec![
        ("Name", c.name.clone()),
        ("Native name", c.native_name.clone()),
        ("Capital", c.capital.clone().unwrap_or_else(|| "-".to_string())),
        ("Codes", format!("{} / {}", c.alpha2_code, c.alpha3_code)),
        ("Region", format!("{} ({})", c.region, c.subregion)),
        ("Population", format_population(&c.population)),
    ];
    if let Some(area) = c.area {
        lines.push(("Area", format!("{} km²", area)));
    }
    lines.push((
        "Currencies",
        join_or_dash(c.currencies.iter().map(|cur| format!("{} ({})", cur.name, cur.code))),
    ));
    lines.push((
        "Languages",
        join_or_dash(c.languages.iter().map(|l| l.name.clone())),
    ));
    if let Some(borders) = &c.borders {
        lines.push(("Borders", join_or_dash(borders.iter().cloned())));
    }
    lines.push((
        "Calling codes",
        join_or_dash(c.calling_codes.iter().map(|cc| format!("+{}", cc))),
    ));
    lines.push(("Flag", c.flags.svg.clone()));

    let t = &c.translations;
    let translations = [
        ("br", &t.br),
        ("pt", &t.pt),
        ("nl", &t.nl),
        ("hr", &t.hr),
        ("fa", &t.fa),
        ("de", &t.de),
        ("es", &t.es),
        ("fr", &t.fr),
        ("ja", &t.ja),
        ("it", &t.it),
        ("hu", &t.hu),
    ];
    lines.push((
        "Translations",
        translations
            .iter()
            .map(|(lang, name)| format!("{}: {}", lang, name))
            .collect::<Vec<_>>()
            .join(", "),
    ));

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in lines {
        out.push_str(&format!("{:<width$}  {}\n", label, value, width = label_width));
    }
    out
}

fn join_or_dash(items: impl Iterator<Item = String>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Whole non-negative counts get thousands separators; anything else is
/// printed as the number was written.
fn format_population(n: &Number) -> String {
    if let Some(whole) = n.as_u64() {
        return group_thousands(whole);
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            group_thousands(f as u64)
        }
        _ => n.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS: &str = include_str!("../../../fixtures/countries/atlas.json");

    fn countries() -> Vec<Country> {
        atlas_interchange::decode(ATLAS).unwrap()
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(19_116_209), "19,116,209");
    }

    #[test]
    fn population_formatting() {
        assert_eq!(format_population(&Number::from(19_116_209u64)), "19,116,209");
        let float = |f: f64| Number::from_f64(f).unwrap();
        assert_eq!(format_population(&float(19_000_000.0)), "19,000,000");
        assert_eq!(format_population(&float(12.5)), "12.5");
        assert_eq!(format_population(&Number::from(-1i64)), "-1");
    }

    #[test]
    fn table_has_header_and_one_row_per_country() {
        let table = countries_table(&countries());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("#  Name"));
        assert!(lines[1].contains("Chile"));
        assert!(lines[1].contains("19,116,209"));
        assert!(lines[4].contains("Antarctica"));
        assert!(lines[4].contains(" - "));
    }

    #[test]
    fn details_skip_absent_borders_and_dash_empty_currencies() {
        let antarctica = countries().pop().unwrap();
        let text = country_details(&antarctica);
        assert!(!text.contains("Borders"));
        assert!(text.contains("Currencies     -"), "{text}");
    }

    #[test]
    fn details_list_translations() {
        let countries = countries();
        let text = country_details(&countries[0]);
        assert!(text.contains("Capital        Santiago"), "{text}");
        assert!(text.contains("ja: チリ"));
    }

    #[test]
    fn empty_suggestions_message() {
        assert_eq!(suggestion_list("zz", &[]), "no suggestions for \"zz\"\n");
    }
}
