use std::process;

use atlas_core::schema::{to_json_schema, type_schema};
use atlas_interchange::{countries_shape, country_types};

use crate::{report_error, OutputFormat};

/// Print the schema of a country list, or of one registered type.
pub(crate) fn cmd_schema(type_name: Option<&str>, output: OutputFormat, quiet: bool) {
    let registry = country_types();
    let schema = match type_name {
        None => to_json_schema(registry, &countries_shape()),
        Some(name) => match type_schema(registry, name) {
            Some(schema) => schema,
            None => {
                let known: Vec<&str> = registry.names().collect();
                let msg = format!(
                    "error: unknown type '{}' (known types: {})",
                    name,
                    known.join(", ")
                );
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        },
    };

    if !quiet {
        println!(
            "{}",
            serde_json::to_string_pretty(&schema).unwrap_or_default()
        );
    }
}
