use std::path::Path;
use std::process;

use atlas_interchange::{decode, encode, encode_value, parse, ConvertError};

use crate::{read_file, report_error, OutputFormat};

/// Validate and bind a country file, then print its canonical encoding.
pub(crate) fn cmd_decode(file: &Path, output: OutputFormat, quiet: bool) {
    let raw = read_file(file, output, quiet);
    let text = match decode(&raw).and_then(|countries| encode(&countries)) {
        Ok(text) => text,
        Err(e) => fail(file, &e, output, quiet),
    };
    tracing::debug!(path = %file.display(), "decoded country file");
    if !quiet {
        println!("{}", text);
    }
}

/// Re-encode a country file without binding it to typed records.
pub(crate) fn cmd_encode(file: &Path, output: OutputFormat, quiet: bool) {
    let raw = read_file(file, output, quiet);
    let encoded = parse(&raw)
        .and_then(|value| encode_value(&value))
        .and_then(|value| serde_json::to_string_pretty(&value).map_err(ConvertError::Bind));
    let text = match encoded {
        Ok(text) => text,
        Err(e) => fail(file, &e, output, quiet),
    };
    if !quiet {
        println!("{}", text);
    }
}

fn fail(file: &Path, err: &ConvertError, output: OutputFormat, quiet: bool) -> ! {
    let msg = match err {
        ConvertError::Parse(e) => format!("error parsing JSON in '{}': {}", file.display(), e),
        other => format!("error: {}: {}", file.display(), other),
    };
    report_error(&msg, output, quiet);
    process::exit(1);
}
