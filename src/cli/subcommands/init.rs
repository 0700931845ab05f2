use clap::ArgMatches;
use std::path::Path;

use crate::database::{DeleteMode, SqliteCatalog};
use crate::filesystem::fs;

pub fn run(_matches: &ArgMatches) -> Result<(), String> {
    if Path::new(fs::DB_NAME).exists() {
        return Err(format!("{} already exists in this directory", fs::DB_NAME));
    }

    SqliteCatalog::open(fs::DB_NAME, DeleteMode::Cascade).map_err(|e| e.to_string())?;
    println!("initialized empty catalog in {}", fs::DB_NAME);
    Ok(())
}
