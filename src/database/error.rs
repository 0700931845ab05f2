use std::error::Error;
use std::fmt;

/// Everything the catalog can fail with. Constraint violations get their own
/// variants so callers can react to them without string-matching.
#[derive(Debug)]
pub enum CatalogError {
    UniqueViolation(String),
    ForeignKeyViolation(String),
    NotFound(String),
    Database(diesel::result::Error),
    Application(String),
}

impl CatalogError {
    /// Turns a lookup miss into the violation it represents when the id was
    /// given as an owner reference (e.g. attaching metadata to a file that
    /// does not exist).
    pub(crate) fn into_foreign_key(self) -> CatalogError {
        match self {
            CatalogError::NotFound(m) => CatalogError::ForeignKeyViolation(m),
            other => other,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::UniqueViolation(m) => write!(f, "unique constraint violated: {}", m),
            CatalogError::ForeignKeyViolation(m) => write!(f, "foreign key violated: {}", m),
            CatalogError::NotFound(m) => write!(f, "not found: {}", m),
            CatalogError::Database(e) => write!(f, "database error: {}", e),
            CatalogError::Application(m) => write!(f, "{}", m),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for CatalogError {
    fn from(e: diesel::result::Error) -> CatalogError {
        use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

        match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                CatalogError::UniqueViolation(info.message().to_owned())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                CatalogError::ForeignKeyViolation(info.message().to_owned())
            }
            // The sqlite backend does not tag foreign key failures with a kind.
            DieselError::DatabaseError(kind, info) => {
                if info.message().contains("FOREIGN KEY constraint failed") {
                    CatalogError::ForeignKeyViolation(info.message().to_owned())
                } else {
                    CatalogError::Database(DieselError::DatabaseError(kind, info))
                }
            }
            other => CatalogError::Database(other),
        }
    }
}
