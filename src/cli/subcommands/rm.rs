use clap::ArgMatches;

use super::{resolve_entry, store_err};
use crate::database::Catalog;

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path = matches.value_of("path").expect("path is required");
    let entry = resolve_entry(catalog, path)?;
    let display = catalog.entry_path(&entry).map_err(store_err)?;

    if !catalog.delete_entry(&entry).map_err(store_err)? {
        return Err(format!(
            "'{}' was not removed (the root directory cannot be deleted)",
            display
        ));
    }

    println!("removed {}", display);
    Ok(())
}
