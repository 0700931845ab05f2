mod catalog;
mod error;
mod models;
pub mod path;
mod schema;
mod sqlite;

pub use self::catalog::{Catalog, DeleteMode, Entry};
pub use self::error::CatalogError;
pub use self::models::{Directory, File};
pub use self::sqlite::SqliteCatalog;
