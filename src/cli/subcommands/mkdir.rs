use clap::ArgMatches;

use super::store_err;
use crate::cli::print;
use crate::database::Catalog;

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path = matches.value_of("path").expect("path is required");

    let dir = catalog.upsert_directory(path).map_err(store_err)?;
    print::verbose(&format!("directory '{}' has id {}", dir.path, dir.id));
    println!("{}", dir.path);
    Ok(())
}
