use std::env;
use std::io;
use std::path::PathBuf;

pub const DB_NAME: &str = ".cardex.db";
pub const CONFIG_NAME: &str = ".cardex.toml";
pub const DB_ENV_VAR: &str = "CARDEX_DB";

/// Walks up from the current directory looking for a catalog database, the
/// way version control tools find their repository root.
pub fn find_database() -> io::Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;

    for dir in cwd.ancestors() {
        let candidate = dir.join(DB_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Resolution order: explicit flag, then the environment, then discovery.
pub fn resolve_database(flag: Option<&str>) -> io::Result<Option<PathBuf>> {
    if let Some(p) = flag {
        return Ok(Some(PathBuf::from(p)));
    }
    if let Some(p) = env::var_os(DB_ENV_VAR) {
        return Ok(Some(PathBuf::from(p)));
    }
    find_database()
}
