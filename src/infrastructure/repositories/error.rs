use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports the columns of the violated index in the message
// ("UNIQUE constraint failed: slugs.slug, slugs.locale") rather than the
// slugs_slug_locale_key index name, so the mapping keys off the columns.
const SLUGS_UNIQUE_COLUMNS: &str = "slugs.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation if db_err.message().contains(SLUGS_UNIQUE_COLUMNS) => {
                DomainError::Conflict("slug already exists for this locale".into())
            }
            ErrorKind::UniqueViolation => {
                DomainError::Conflict("unique constraint violated".into())
            }
            ErrorKind::CheckViolation => {
                DomainError::Validation("check constraint violated".into())
            }
            ErrorKind::NotNullViolation => {
                DomainError::Validation("required column missing".into())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
