use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel::{delete, insert_into, insert_or_ignore_into, update};

use super::catalog::{Catalog, DeleteMode, Entry};
use super::error::CatalogError;
use super::models::*;

embed_migrations!();

/// The catalog store over a single sqlite database file (or `:memory:`).
///
/// Opening runs the embedded migrations and switches foreign key enforcement
/// on, so cascades and constraint checks hold for everything issued through
/// this connection.
pub struct SqliteCatalog {
    conn: SqliteConnection,
    delete_mode: DeleteMode,
}

impl SqliteCatalog {
    pub fn open(db_path: &str, delete_mode: DeleteMode) -> Result<Self, CatalogError> {
        let conn = SqliteConnection::establish(db_path).map_err(|e| {
            CatalogError::Application(format!("failed to open database '{}': {}", db_path, e))
        })?;

        embedded_migrations::run(&conn).map_err(|e| {
            CatalogError::Application(format!("failed to run migrations: {}", e))
        })?;

        // Per-connection, and deliberately after the migrations: the second
        // revision rebuilds tables, which the checker would reject.
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(CatalogError::from)?;

        Ok(SqliteCatalog { conn, delete_mode })
    }

    fn directory_by_path_tx(&self, target: &str) -> Result<Option<Directory>, CatalogError> {
        use super::schema::Directories::dsl::*;

        Ok(Directories
            .filter(path.eq(target))
            .first::<Directory>(&self.conn)
            .optional()?)
    }

    fn file_by_path_tx(&self, target: &str) -> Result<Option<File>, CatalogError> {
        use super::schema::{Directories, Files};

        let parent = match super::path::parent_dir(target) {
            Some(p) => p,
            None => return Ok(None),
        };
        let fname = super::path::filename(target);
        if fname.is_empty() {
            return Ok(None);
        }

        let dir = match Directories::table
            .filter(Directories::path.eq(parent))
            .first::<Directory>(&self.conn)
            .optional()?
        {
            Some(d) => d,
            None => return Ok(None),
        };

        Ok(Files::table
            .filter(Files::directory_id.eq(dir.id))
            .filter(Files::filename.eq(fname))
            .first::<File>(&self.conn)
            .optional()?)
    }

    fn upsert_directory_tx(&self, target: &str) -> Result<Directory, CatalogError> {
        use super::schema::Directories::dsl::*;

        if let Some(d) = self.directory_by_path_tx(target)? {
            return Ok(d);
        }

        // Materialize the whole ancestor chain; parent_dir stops at the
        // seeded root.
        let mut chain = vec![target.to_owned()];
        let mut cur = target.to_owned();
        while let Some(parent) = super::path::parent_dir(&cur).map(str::to_owned) {
            chain.push(parent.clone());
            cur = parent;
        }

        for p in chain.iter().rev() {
            // No link in the chain may shadow a cataloged file.
            if self.file_by_path_tx(p)?.is_some() {
                return Err(CatalogError::UniqueViolation(format!(
                    "a file already exists at '{}'",
                    p
                )));
            }
            insert_or_ignore_into(Directories)
                .values(&NewDirectory { path: p })
                .execute(&self.conn)?;
        }

        Directories
            .filter(path.eq(target))
            .first::<Directory>(&self.conn)
            .optional()?
            .ok_or_else(|| {
                CatalogError::Application(format!("directory '{}' vanished mid-insert", target))
            })
    }

    fn upsert_file_tx(&self, dir_id: i32, fname: &str, h: &[u8]) -> Result<File, CatalogError> {
        use super::schema::Files::dsl::*;

        if fname.is_empty() || fname.contains('/') {
            return Err(CatalogError::Application(format!(
                "'{}' is not a valid filename",
                fname
            )));
        }
        if h.is_empty() {
            return Err(CatalogError::Application(format!(
                "refusing to catalog '{}' with an empty hash",
                fname
            )));
        }

        let dir = self.directory(dir_id).map_err(CatalogError::into_foreign_key)?;

        if let Some(f) = Files
            .filter(filename.eq(fname))
            .first::<File>(&self.conn)
            .optional()?
        {
            if f.directory_id == dir.id {
                update(Files.find(f.id)).set(hash.eq(h)).execute(&self.conn)?;
                return Ok(Files.find(f.id).first::<File>(&self.conn)?);
            }
            // Filenames are globally unique as declared by the schema.
            return Err(CatalogError::UniqueViolation(format!(
                "filename '{}' is already cataloged under another directory",
                fname
            )));
        }

        let full = super::path::join(&dir.path, fname);
        if self.directory_by_path_tx(&full)?.is_some() {
            return Err(CatalogError::UniqueViolation(format!(
                "a directory already exists at '{}'",
                full
            )));
        }

        insert_into(Files)
            .values(&NewFile {
                directory_id: dir_id,
                filename: fname,
                hash: h,
            })
            .execute(&self.conn)?;

        Ok(Files.filter(filename.eq(fname)).first::<File>(&self.conn)?)
    }

    /// Ids of every directory strictly below `dir_path`. Matched by exact
    /// prefix in Rust; a SQL `LIKE` would treat `%` and `_` in paths as
    /// wildcards.
    fn subtree_ids_tx(&self, dir_path: &str) -> Result<Vec<i32>, CatalogError> {
        use super::schema::Directories::dsl::*;

        let prefix = format!("{}/", dir_path);
        Ok(Directories
            .load::<Directory>(&self.conn)?
            .into_iter()
            .filter(|d| d.path.starts_with(&prefix))
            .map(|d| d.id)
            .collect())
    }
}

impl Catalog for SqliteCatalog {
    fn upsert_directory(&self, p: &str) -> Result<Directory, CatalogError> {
        let target = super::path::normalize(p);
        self.conn
            .immediate_transaction(|| self.upsert_directory_tx(&target))
    }

    fn upsert_file(
        &self,
        directory_id: i32,
        filename: &str,
        hash: &[u8],
    ) -> Result<File, CatalogError> {
        self.conn
            .immediate_transaction(|| self.upsert_file_tx(directory_id, filename, hash))
    }

    fn upsert_file_at_path(&self, p: &str, h: &[u8]) -> Result<File, CatalogError> {
        let target = super::path::normalize(p);
        self.conn.immediate_transaction(|| {
            let parent = super::path::parent_dir(&target).ok_or_else(|| {
                CatalogError::Application(format!("'{}' does not name a file", target))
            })?;
            let fname = super::path::filename(&target);

            let dir = self.upsert_directory_tx(parent)?;
            self.upsert_file_tx(dir.id, fname, h)
        })
    }

    fn directory(&self, dir_id: i32) -> Result<Directory, CatalogError> {
        use super::schema::Directories::dsl::*;

        Directories
            .find(dir_id)
            .first::<Directory>(&self.conn)
            .optional()?
            .ok_or_else(|| CatalogError::NotFound(format!("no directory with id {}", dir_id)))
    }

    fn file(&self, file_id: i32) -> Result<File, CatalogError> {
        use super::schema::Files::dsl::*;

        Files
            .find(file_id)
            .first::<File>(&self.conn)
            .optional()?
            .ok_or_else(|| CatalogError::NotFound(format!("no file with id {}", file_id)))
    }

    fn directory_by_path(&self, p: &str) -> Result<Option<Directory>, CatalogError> {
        let target = super::path::normalize(p);
        self.directory_by_path_tx(&target)
    }

    fn entry_by_path(&self, p: &str) -> Result<Option<Entry>, CatalogError> {
        let target = super::path::normalize(p);

        if let Some(d) = self.directory_by_path_tx(&target)? {
            return Ok(Some(Entry::Directory(d)));
        }
        Ok(self.file_by_path_tx(&target)?.map(Entry::File))
    }

    fn entry_path(&self, entry: &Entry) -> Result<String, CatalogError> {
        match entry {
            Entry::Directory(d) => Ok(d.path.clone()),
            Entry::File(f) => {
                let dir = self.directory(f.directory_id)?;
                Ok(super::path::join(&dir.path, &f.filename))
            }
        }
    }

    fn directories(&self) -> Result<Vec<Directory>, CatalogError> {
        use super::schema::Directories::dsl::*;

        Ok(Directories
            .order(path.asc())
            .load::<Directory>(&self.conn)?)
    }

    fn directory_files(&self, dir_id: i32) -> Result<Vec<File>, CatalogError> {
        use super::schema::Files::dsl::*;

        Ok(Files
            .filter(directory_id.eq(dir_id))
            .order(filename.asc())
            .load::<File>(&self.conn)?)
    }

    fn find_files_by_hash(&self, h: &[u8]) -> Result<Vec<File>, CatalogError> {
        use super::schema::Files::dsl::*;

        Ok(Files
            .filter(hash.eq(h))
            .order(id.asc())
            .load::<File>(&self.conn)?)
    }

    fn duplicate_files(&self) -> Result<Vec<(Vec<u8>, Vec<File>)>, CatalogError> {
        use super::schema::Files::dsl::*;

        let all = Files
            .order((hash.asc(), id.asc()))
            .load::<File>(&self.conn)?;

        let mut groups: Vec<(Vec<u8>, Vec<File>)> = Vec::new();
        for f in all {
            let start_new = groups.last().map(|(h, _)| *h != f.hash).unwrap_or(true);
            if start_new {
                groups.push((f.hash.clone(), Vec::new()));
            }
            if let Some((_, members)) = groups.last_mut() {
                members.push(f);
            }
        }

        groups.retain(|(_, members)| members.len() > 1);
        Ok(groups)
    }

    fn metadata(&self, entry: &Entry) -> Result<Vec<(String, String)>, CatalogError> {
        match entry {
            Entry::File(f) => {
                use super::schema::FileMetadata::dsl::*;

                Ok(FileMetadata
                    .filter(file_id.eq(f.id))
                    .order(key.asc())
                    .select((key, value))
                    .load::<(String, String)>(&self.conn)?)
            }
            Entry::Directory(d) => {
                use super::schema::DirectoryMetadata::dsl::*;

                Ok(DirectoryMetadata
                    .filter(directory_id.eq(d.id))
                    .order(key.asc())
                    .select((key, value))
                    .load::<(String, String)>(&self.conn)?)
            }
        }
    }

    fn metadata_get(&self, entry: &Entry, k: &str) -> Result<Option<String>, CatalogError> {
        match entry {
            Entry::File(f) => {
                use super::schema::FileMetadata::dsl::*;

                Ok(FileMetadata
                    .filter(file_id.eq(f.id))
                    .filter(key.eq(k))
                    .select(value)
                    .first::<String>(&self.conn)
                    .optional()?)
            }
            Entry::Directory(d) => {
                use super::schema::DirectoryMetadata::dsl::*;

                Ok(DirectoryMetadata
                    .filter(directory_id.eq(d.id))
                    .filter(key.eq(k))
                    .select(value)
                    .first::<String>(&self.conn)
                    .optional()?)
            }
        }
    }

    fn metadata_set(
        &self,
        entry: &Entry,
        k: &str,
        v: &str,
    ) -> Result<Option<String>, CatalogError> {
        self.conn.immediate_transaction(|| {
            let previous = self.metadata_get(entry, k)?;

            match entry {
                Entry::File(f) => {
                    use super::schema::FileMetadata::dsl::*;

                    if previous.is_some() {
                        update(FileMetadata.filter(file_id.eq(f.id)).filter(key.eq(k)))
                            .set(value.eq(v))
                            .execute(&self.conn)?;
                    } else {
                        insert_into(FileMetadata)
                            .values(&NewFileKeyValuePair {
                                file_id: f.id,
                                key: k,
                                value: v,
                            })
                            .execute(&self.conn)?;
                    }
                }
                Entry::Directory(d) => {
                    use super::schema::DirectoryMetadata::dsl::*;

                    if previous.is_some() {
                        update(
                            DirectoryMetadata
                                .filter(directory_id.eq(d.id))
                                .filter(key.eq(k)),
                        )
                        .set(value.eq(v))
                        .execute(&self.conn)?;
                    } else {
                        insert_into(DirectoryMetadata)
                            .values(&NewDirectoryKeyValuePair {
                                directory_id: d.id,
                                key: k,
                                value: v,
                            })
                            .execute(&self.conn)?;
                    }
                }
            }

            Ok(previous)
        })
    }

    fn metadata_remove(&self, entry: &Entry, k: &str) -> Result<bool, CatalogError> {
        Ok(match entry {
            Entry::File(f) => {
                use super::schema::FileMetadata::dsl::*;

                delete(FileMetadata.filter(file_id.eq(f.id)).filter(key.eq(k)))
                    .execute(&self.conn)?
            }
            Entry::Directory(d) => {
                use super::schema::DirectoryMetadata::dsl::*;

                delete(
                    DirectoryMetadata
                        .filter(directory_id.eq(d.id))
                        .filter(key.eq(k)),
                )
                .execute(&self.conn)?
            }
        } > 0)
    }

    fn metadata_clear(&self, entry: &Entry) -> Result<usize, CatalogError> {
        Ok(match entry {
            Entry::File(f) => {
                use super::schema::FileMetadata::dsl::*;

                delete(FileMetadata.filter(file_id.eq(f.id))).execute(&self.conn)?
            }
            Entry::Directory(d) => {
                use super::schema::DirectoryMetadata::dsl::*;

                delete(DirectoryMetadata.filter(directory_id.eq(d.id))).execute(&self.conn)?
            }
        })
    }

    fn delete_directory(&self, dir_id: i32) -> Result<bool, CatalogError> {
        use super::schema::{Directories, DirectoryMetadata, Files};

        self.conn.immediate_transaction(|| {
            let dir = match Directories::table
                .find(dir_id)
                .first::<Directory>(&self.conn)
                .optional()?
            {
                Some(d) => d,
                None => return Ok(false),
            };

            // The seeded root is permanent.
            if dir.path == "/" {
                return Ok(false);
            }

            let descendants = self.subtree_ids_tx(&dir.path)?;

            match self.delete_mode {
                DeleteMode::Restrict => {
                    let files: i64 = Files::table
                        .filter(Files::directory_id.eq(dir.id))
                        .count()
                        .get_result(&self.conn)?;
                    let meta: i64 = DirectoryMetadata::table
                        .filter(DirectoryMetadata::directory_id.eq(dir.id))
                        .count()
                        .get_result(&self.conn)?;

                    if files > 0 || meta > 0 || !descendants.is_empty() {
                        return Err(CatalogError::ForeignKeyViolation(format!(
                            "directory '{}' still has {} files, {} metadata entries and {} subdirectories",
                            dir.path, files, meta, descendants.len()
                        )));
                    }
                }
                DeleteMode::Cascade => {
                    // Subdirectories are related by path prefix, not by a
                    // foreign key, so they go explicitly; their files and
                    // metadata follow through the schema cascade.
                    if !descendants.is_empty() {
                        delete(Directories::table.filter(Directories::id.eq_any(&descendants)))
                            .execute(&self.conn)?;
                    }
                }
            }

            Ok(delete(Directories::table.find(dir_id)).execute(&self.conn)? > 0)
        })
    }

    fn delete_file(&self, file_id: i32) -> Result<bool, CatalogError> {
        use super::schema::{FileMetadata, Files};

        self.conn.immediate_transaction(|| {
            if Files::table
                .find(file_id)
                .first::<File>(&self.conn)
                .optional()?
                .is_none()
            {
                return Ok(false);
            }

            if let DeleteMode::Restrict = self.delete_mode {
                let meta: i64 = FileMetadata::table
                    .filter(FileMetadata::file_id.eq(file_id))
                    .count()
                    .get_result(&self.conn)?;
                if meta > 0 {
                    return Err(CatalogError::ForeignKeyViolation(format!(
                        "file {} still has {} metadata entries",
                        file_id, meta
                    )));
                }
            }

            Ok(delete(Files::table.find(file_id)).execute(&self.conn)? > 0)
        })
    }
}

#[cfg(test)]
fn open_test_catalog(mode: DeleteMode) -> SqliteCatalog {
    SqliteCatalog::open(":memory:", mode).expect("in-memory catalog should open")
}

#[test]
fn fresh_store_contains_only_the_root() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let dirs = cat.directories().unwrap();
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].path, "/");
    assert!(cat.directory_files(dirs[0].id).unwrap().is_empty());
}

#[test]
fn upsert_directory_creates_ancestors_and_is_idempotent() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let dir = cat.upsert_directory("/music/flac/albums").unwrap();
    let paths: Vec<String> = cat.directories().unwrap().into_iter().map(|d| d.path).collect();
    assert_eq!(paths, vec!["/", "/music", "/music/flac", "/music/flac/albums"]);

    let again = cat.upsert_directory("/music/flac/albums/").unwrap();
    assert_eq!(again.id, dir.id);
    assert_eq!(cat.directories().unwrap().len(), 4);
}

#[test]
fn upserted_file_is_found_by_hash() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let file = cat.upsert_file_at_path("/docs/report.txt", &[0xab; 32]).unwrap();
    let found = cat.find_files_by_hash(&[0xab; 32]).unwrap();
    assert_eq!(found, vec![file.clone()]);

    assert_eq!(
        cat.entry_path(&Entry::File(file)).unwrap(),
        "/docs/report.txt"
    );
}

#[test]
fn duplicate_filenames_are_rejected_across_directories() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    cat.upsert_file_at_path("/a/readme.txt", &[1; 32]).unwrap();
    let err = cat.upsert_file_at_path("/b/readme.txt", &[2; 32]).unwrap_err();
    assert!(matches!(err, CatalogError::UniqueViolation(_)));
}

#[test]
fn duplicate_hashes_are_allowed_and_reported() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let first = cat.upsert_file_at_path("/a/one.bin", &[7; 32]).unwrap();
    let second = cat.upsert_file_at_path("/a/two.bin", &[7; 32]).unwrap();
    cat.upsert_file_at_path("/a/unrelated.bin", &[8; 32]).unwrap();

    let found = cat.find_files_by_hash(&[7; 32]).unwrap();
    assert_eq!(found, vec![first.clone(), second.clone()]);

    let groups = cat.duplicate_files().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, vec![7u8; 32]);
    assert_eq!(groups[0].1, vec![first, second]);
}

#[test]
fn reupserting_a_file_refreshes_its_hash() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let first = cat.upsert_file_at_path("/a/data.bin", &[1; 32]).unwrap();
    let second = cat.upsert_file_at_path("/a/data.bin", &[2; 32]).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.hash, vec![2u8; 32]);
    assert!(cat.find_files_by_hash(&[1; 32]).unwrap().is_empty());
}

#[test]
fn metadata_set_replaces_the_previous_value() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let dir = cat.upsert_directory("/photos").unwrap();
    let entry = Entry::Directory(dir.clone());

    assert_eq!(cat.metadata_set(&entry, "owner", "alice").unwrap(), None);
    assert_eq!(
        cat.metadata_set(&entry, "owner", "bob").unwrap(),
        Some("alice".to_owned())
    );

    assert_eq!(
        cat.metadata(&entry).unwrap(),
        vec![("owner".to_owned(), "bob".to_owned())]
    );

    assert_eq!(
        cat.set_directory_metadata(dir.id, "label", "holiday").unwrap(),
        None
    );
    assert_eq!(cat.metadata(&entry).unwrap().len(), 2);
}

#[test]
fn metadata_for_a_missing_owner_is_a_foreign_key_violation() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let err = cat.set_file_metadata(9999, "k", "v").unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));

    let err = cat.set_directory_metadata(9999, "k", "v").unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));
}

#[test]
fn cascade_delete_removes_files_and_their_metadata() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let dir = cat.upsert_directory("/proj").unwrap();
    let file = cat.upsert_file(dir.id, "main.c", &[3; 32]).unwrap();
    cat.metadata_set(&Entry::File(file.clone()), "lang", "c").unwrap();
    cat.upsert_directory("/proj/src").unwrap();

    assert!(cat.delete_directory(dir.id).unwrap());

    assert!(matches!(cat.file(file.id), Err(CatalogError::NotFound(_))));
    assert!(cat.directory_by_path("/proj/src").unwrap().is_none());
    assert!(cat.metadata(&Entry::File(file)).unwrap().is_empty());
}

#[test]
fn restrict_mode_refuses_to_delete_while_dependents_exist() {
    let cat = open_test_catalog(DeleteMode::Restrict);

    let dir = cat.upsert_directory("/proj").unwrap();
    let file = cat.upsert_file(dir.id, "main.c", &[3; 32]).unwrap();
    cat.metadata_set(&Entry::File(file.clone()), "lang", "c").unwrap();

    let err = cat.delete_directory(dir.id).unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));

    let err = cat.delete_file(file.id).unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));

    assert!(cat.metadata_remove(&Entry::File(file.clone()), "lang").unwrap());
    assert!(cat.delete_file(file.id).unwrap());
    assert!(cat.delete_directory(dir.id).unwrap());
}

#[test]
fn the_root_directory_is_never_deleted() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let root = cat.directory_by_path("/").unwrap().unwrap();
    assert!(!cat.delete_directory(root.id).unwrap());
    assert_eq!(cat.directories().unwrap().len(), 1);
}

#[test]
fn a_path_resolves_to_at_most_one_entry() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    cat.upsert_directory("/etc").unwrap();
    cat.upsert_file_at_path("/etc/fstab", &[4; 32]).unwrap();

    assert!(matches!(
        cat.entry_by_path("/etc").unwrap(),
        Some(Entry::Directory(_))
    ));
    assert!(matches!(
        cat.entry_by_path("/etc/fstab").unwrap(),
        Some(Entry::File(_))
    ));
    assert!(cat.entry_by_path("/missing").unwrap().is_none());

    // A file cannot shadow an existing directory, nor the reverse.
    let err = cat.upsert_file_at_path("/etc", &[5; 32]).unwrap_err();
    assert!(matches!(err, CatalogError::UniqueViolation(_)));
    let err = cat.upsert_directory("/etc/fstab").unwrap_err();
    assert!(matches!(err, CatalogError::UniqueViolation(_)));
}

#[test]
fn deleting_missing_ids_reports_false() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    assert!(!cat.delete_directory(424242).unwrap());
    assert!(!cat.delete_file(424242).unwrap());
}

#[test]
fn wildcard_characters_in_paths_do_not_widen_a_cascade_delete() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    cat.upsert_directory("/abc/sub").unwrap();
    let target = cat.upsert_directory("/a_c").unwrap();

    assert!(cat.delete_directory(target.id).unwrap());
    assert!(cat.directory_by_path("/abc/sub").unwrap().is_some());

    cat.upsert_directory("/x%y/deep").unwrap();
    cat.upsert_directory("/xzy").unwrap();
    let target = cat.directory_by_path("/x%y").unwrap().unwrap();

    assert!(cat.delete_directory(target.id).unwrap());
    assert!(cat.directory_by_path("/x%y/deep").unwrap().is_none());
    assert!(cat.directory_by_path("/xzy").unwrap().is_some());
}

#[test]
fn wildcard_characters_in_paths_do_not_count_as_dependents() {
    let cat = open_test_catalog(DeleteMode::Restrict);

    cat.upsert_directory("/abc/sub").unwrap();
    let target = cat.upsert_directory("/a_c").unwrap();

    // `/abc/sub` is not under `/a_c`; the empty directory deletes cleanly.
    assert!(cat.delete_directory(target.id).unwrap());
    assert!(cat.directory_by_path("/abc/sub").unwrap().is_some());
}

#[test]
fn a_directory_cannot_shadow_an_ancestor_file() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    cat.upsert_file_at_path("/a/b", &[6; 32]).unwrap();

    let err = cat.upsert_directory("/a/b/c").unwrap_err();
    assert!(matches!(err, CatalogError::UniqueViolation(_)));

    assert!(matches!(
        cat.entry_by_path("/a/b").unwrap(),
        Some(Entry::File(_))
    ));
    assert!(cat.directory_by_path("/a/b").unwrap().is_none());
    assert!(cat.directory_by_path("/a/b/c").unwrap().is_none());
}

#[test]
fn an_empty_hash_is_rejected_by_the_store() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    let err = cat.upsert_file_at_path("/a/empty.bin", &[]).unwrap_err();
    assert!(matches!(err, CatalogError::Application(_)));
    assert!(cat.entry_by_path("/a/empty.bin").unwrap().is_none());
}

#[test]
fn a_dangling_directory_id_outranks_a_filename_collision() {
    let cat = open_test_catalog(DeleteMode::Cascade);

    cat.upsert_file_at_path("/a/readme.txt", &[1; 32]).unwrap();

    let err = cat.upsert_file(9999, "readme.txt", &[2; 32]).unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));

    let err = cat.upsert_file(9999, "fresh.txt", &[2; 32]).unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));
}
