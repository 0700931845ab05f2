use crate::database::{Catalog, CatalogError, Entry};

pub mod add;
pub mod dupes;
pub mod get;
pub mod init;
pub mod ls;
pub mod mkdir;
pub mod remove;
pub mod rm;
pub mod set;

/// Resolves a CLI path argument to the entry it names.
fn resolve_entry<C: Catalog>(catalog: &C, path: &str) -> Result<Entry, String> {
    catalog
        .entry_by_path(path)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("'{}' is not in the catalog", path))
}

fn store_err(e: CatalogError) -> String {
    e.to_string()
}
