use clap::ArgMatches;

use super::{resolve_entry, store_err};
use crate::cli::{print, typo};
use crate::database::Catalog;

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path = matches.value_of("path").expect("path is required");
    let entry = resolve_entry(catalog, path)?;

    if matches.is_present("all") {
        let removed = catalog.metadata_clear(&entry).map_err(store_err)?;
        print::verbose(&format!("removed {} key(s) from '{}'", removed, path));
        return Ok(());
    }

    let keys = matches
        .values_of("keys")
        .expect("keys are required without --all");

    for k in keys {
        if !catalog.metadata_remove(&entry, k).map_err(store_err)? {
            let known = catalog.metadata(&entry).map_err(store_err)?;
            let hint = typo::suggest(k, known.iter().map(|(key, _)| key.as_str()));
            return Err(match hint {
                Some(s) => format!("no key '{}' on '{}'; did you mean '{}'?", k, path, s),
                None => format!("no key '{}' on '{}'", k, path),
            });
        }
        print::verbose(&format!("removed '{}' from '{}'", k, path));
    }

    Ok(())
}
