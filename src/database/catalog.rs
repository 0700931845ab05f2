use super::error::CatalogError;
use super::models::{Directory, File};

/// Something the catalog tracks: either a directory row or a file row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Directory(Directory),
    File(File),
}

/// What happens to dependents when an entry is deleted.
///
/// `Cascade` relies on the schema's `ON DELETE CASCADE` and is the default;
/// `Restrict` refuses the deletion while dependents exist, which is what the
/// pre-cascade schema revision did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeleteMode {
    Cascade,
    Restrict,
}

/// The catalog store contract. The CLI is written against this trait, not
/// against the sqlite implementation.
///
/// Every write executes as one atomic transaction; constraint violations
/// surface as [`CatalogError`] variants and are never swallowed.
pub trait Catalog {
    /// Returns the directory at `path`, inserting it (and any missing
    /// ancestors) first if necessary.
    fn upsert_directory(&self, path: &str) -> Result<Directory, CatalogError>;

    /// Inserts a file under `directory_id`, or refreshes its hash if the
    /// same directory already holds `filename`.
    ///
    /// Filenames are unique across the whole catalog, not per directory;
    /// a second file with the same name anywhere fails with
    /// `UniqueViolation`. A dangling `directory_id` fails with
    /// `ForeignKeyViolation`.
    fn upsert_file(&self, directory_id: i32, filename: &str, hash: &[u8])
        -> Result<File, CatalogError>;

    /// Splits `path` into parent directory and filename, upserts the whole
    /// directory chain, then the file.
    fn upsert_file_at_path(&self, path: &str, hash: &[u8]) -> Result<File, CatalogError>;

    fn directory(&self, id: i32) -> Result<Directory, CatalogError>;
    fn file(&self, id: i32) -> Result<File, CatalogError>;
    fn directory_by_path(&self, path: &str) -> Result<Option<Directory>, CatalogError>;
    fn entry_by_path(&self, path: &str) -> Result<Option<Entry>, CatalogError>;

    /// The full logical path of an entry (a file's path is its directory's
    /// path joined with its filename).
    fn entry_path(&self, entry: &Entry) -> Result<String, CatalogError>;

    fn directories(&self) -> Result<Vec<Directory>, CatalogError>;
    fn directory_files(&self, directory_id: i32) -> Result<Vec<File>, CatalogError>;

    /// All files whose content hash equals `hash`. This is the lookup the
    /// hash index exists for; duplicate hashes are expected, not an error.
    fn find_files_by_hash(&self, hash: &[u8]) -> Result<Vec<File>, CatalogError>;

    /// Groups of two or more files sharing one content hash.
    fn duplicate_files(&self) -> Result<Vec<(Vec<u8>, Vec<File>)>, CatalogError>;

    fn metadata(&self, entry: &Entry) -> Result<Vec<(String, String)>, CatalogError>;
    fn metadata_get(&self, entry: &Entry, key: &str) -> Result<Option<String>, CatalogError>;

    /// Inserts or replaces the value for `key`; returns the previous value.
    fn metadata_set(&self, entry: &Entry, key: &str, value: &str)
        -> Result<Option<String>, CatalogError>;

    /// Removes one key; `false` if the entry had no such key.
    fn metadata_remove(&self, entry: &Entry, key: &str) -> Result<bool, CatalogError>;

    /// Removes every key from an entry; returns how many were removed.
    fn metadata_clear(&self, entry: &Entry) -> Result<usize, CatalogError>;

    /// Deletes a directory. `false` when the id no longer exists or the
    /// target is the root directory, which is never deleted.
    fn delete_directory(&self, directory_id: i32) -> Result<bool, CatalogError>;

    /// Deletes a file. `false` when the id no longer exists.
    fn delete_file(&self, file_id: i32) -> Result<bool, CatalogError>;

    fn set_directory_metadata(
        &self,
        directory_id: i32,
        key: &str,
        value: &str,
    ) -> Result<Option<String>, CatalogError> {
        let dir = self
            .directory(directory_id)
            .map_err(CatalogError::into_foreign_key)?;
        self.metadata_set(&Entry::Directory(dir), key, value)
    }

    fn set_file_metadata(
        &self,
        file_id: i32,
        key: &str,
        value: &str,
    ) -> Result<Option<String>, CatalogError> {
        let file = self.file(file_id).map_err(CatalogError::into_foreign_key)?;
        self.metadata_set(&Entry::File(file), key, value)
    }

    fn delete_entry(&self, entry: &Entry) -> Result<bool, CatalogError> {
        match entry {
            Entry::Directory(d) => self.delete_directory(d.id),
            Entry::File(f) => self.delete_file(f.id),
        }
    }
}
