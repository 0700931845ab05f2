use clap::ArgMatches;
use colored::Colorize;
use serde::Serialize;

use super::store_err;
use crate::cli::print;
use crate::database::{Catalog, Entry};
use crate::format::hex;

#[derive(Serialize)]
struct DupeGroup {
    hash: String,
    paths: Vec<String>,
}

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let groups = catalog.duplicate_files().map_err(store_err)?;

    let mut report = Vec::with_capacity(groups.len());
    for (h, files) in groups {
        let mut paths = Vec::with_capacity(files.len());
        for f in files {
            paths.push(catalog.entry_path(&Entry::File(f)).map_err(store_err)?);
        }
        report.push(DupeGroup {
            hash: hex::encode(&h),
            paths,
        });
    }

    if matches.is_present("json") {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    if report.is_empty() {
        print::verbose("no duplicate hashes in the catalog");
        return Ok(());
    }

    for group in report {
        println!("{}", group.hash.yellow().bold());
        for p in group.paths {
            println!("  {}", p);
        }
    }
    Ok(())
}
