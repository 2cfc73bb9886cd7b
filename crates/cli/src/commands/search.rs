use std::process;

use atlas_client::{CapitalSearch, CountryView, NameSearch, SearchState};
use atlas_interchange::{encode, encode_one, Country};

use crate::render;
use crate::{report_error, Context, OutputFormat};

pub(crate) fn cmd_capital(ctx: &Context, term: &str) {
    let config = ctx.client_config();
    let source = ctx.country_source(&config);

    let mut view = CapitalSearch::new();
    view.search(source.as_ref(), term);
    finish_search(&view.state, ctx);
}

pub(crate) fn cmd_name(ctx: &Context, term: &str, suggest: bool) {
    let config = ctx.client_config();
    let source = ctx.country_source(&config);

    let mut view = NameSearch::new(config.suggestion_limit);
    if suggest {
        view.suggest(source.as_ref(), term);
        if !ctx.quiet {
            match ctx.output {
                OutputFormat::Text => print!("{}", render::suggestion_list(term, &view.suggestions)),
                OutputFormat::Json => print_records(&view.suggestions, ctx),
            }
        }
        return;
    }

    view.search(source.as_ref(), term);
    finish_search(&view.state, ctx);
}

pub(crate) fn cmd_code(ctx: &Context, code: &str) {
    let config = ctx.client_config();
    let source = ctx.country_source(&config);

    let mut view = CountryView::new();
    view.load(source.as_ref(), code);

    let country = match (&view.country, &view.error) {
        (Some(country), _) => country,
        (None, Some(err)) => {
            report_error(&format!("error: {}", err), ctx.output, ctx.quiet);
            process::exit(1);
        }
        (None, None) => {
            report_error(
                &format!("error: no country loaded for \"{}\"", code),
                ctx.output,
                ctx.quiet,
            );
            process::exit(1);
        }
    };

    if ctx.quiet {
        return;
    }
    match ctx.output {
        OutputFormat::Text => print!("{}", render::country_details(country)),
        OutputFormat::Json => match encode_one(country) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                report_error(&format!("error: {}", e), ctx.output, ctx.quiet);
                process::exit(1);
            }
        },
    }
}

/// Print the result set, or report the error and exit 1.
fn finish_search(state: &SearchState, ctx: &Context) {
    if let Some(err) = &state.error {
        report_error(&format!("error: {}", err), ctx.output, ctx.quiet);
        process::exit(1);
    }
    if ctx.quiet {
        return;
    }
    match ctx.output {
        OutputFormat::Text => print!("{}", render::countries_table(&state.countries)),
        OutputFormat::Json => print_records(&state.countries, ctx),
    }
}

fn print_records(countries: &[Country], ctx: &Context) {
    match encode(countries) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            report_error(&format!("error: {}", e), ctx.output, ctx.quiet);
            process::exit(1);
        }
    }
}
