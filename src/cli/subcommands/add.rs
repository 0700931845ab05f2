use clap::ArgMatches;

use super::store_err;
use crate::cli::print;
use crate::database::{Catalog, Entry};
use crate::format::hex;

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path = matches.value_of("path").expect("path is required");
    let digest = matches.value_of("hash").expect("hash is required");

    let hash = hex::decode(digest).ok_or_else(|| {
        format!(
            "'{}' is not a hex digest (an even number of hex digits is required)",
            digest
        )
    })?;

    let file = catalog.upsert_file_at_path(path, &hash).map_err(store_err)?;

    let twins = catalog.find_files_by_hash(&hash).map_err(store_err)?;
    if twins.len() > 1 {
        print::verbose(&format!(
            "{} other file(s) share this hash",
            twins.len() - 1
        ));
    }

    println!(
        "{}",
        catalog.entry_path(&Entry::File(file)).map_err(store_err)?
    );
    Ok(())
}
