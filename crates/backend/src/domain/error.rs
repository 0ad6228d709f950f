use thiserror::Error;

/// Errors surfaced by the domain services. Handlers translate these into
/// status codes; nothing else crosses the HTTP boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Subcategory code already exists")]
    DuplicateCode,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl DomainError {
    /// A create that loses the race to the unique index shows up as a
    /// constraint violation rather than a duplicate found by the probe;
    /// fold it into the same user-visible error.
    pub fn from_insert_error(err: sea_orm::DbErr) -> Self {
        let text = err.to_string();
        if text.contains("UNIQUE constraint failed") {
            DomainError::DuplicateCode
        } else {
            DomainError::Db(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_duplicate_code() {
        let err = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: c002_subcategory.code".to_string(),
        );
        assert!(matches!(
            DomainError::from_insert_error(err),
            DomainError::DuplicateCode
        ));
    }

    #[test]
    fn other_db_errors_pass_through() {
        let err = sea_orm::DbErr::Custom("disk I/O error".to_string());
        assert!(matches!(
            DomainError::from_insert_error(err),
            DomainError::Db(_)
        ));
    }
}
