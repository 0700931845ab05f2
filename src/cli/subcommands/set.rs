use clap::ArgMatches;

use super::{resolve_entry, store_err};
use crate::cli::{assign, print};
use crate::database::Catalog;

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path = matches.value_of("path").expect("path is required");
    let entry = resolve_entry(catalog, path)?;

    let raws = matches
        .values_of("assignments")
        .expect("at least one assignment is required");

    for raw in raws {
        let a = assign::parse(raw)?;
        match catalog
            .metadata_set(&entry, &a.key, &a.value)
            .map_err(store_err)?
        {
            Some(old) => print::verbose(&format!("{}: '{}' -> '{}'", a.key, old, a.value)),
            None => print::verbose(&format!("{}: set to '{}'", a.key, a.value)),
        }
    }

    Ok(())
}
