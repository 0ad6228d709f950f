use super::repository;
use crate::domain::error::DomainError;
use chrono::Utc;
use contracts::domain::c002_subcategory::aggregate::{
    Subcategory, SubcategoryDraft, SubcategoryId,
};
use uuid::Uuid;

/// Create a new subcategory from a validated form draft.
///
/// `created_by` comes from the session claims, `created_at` is assigned
/// here at write time. The code uniqueness check is a separate read; the
/// unique index on `code` backstops it (see `DomainError::from_insert_error`).
pub async fn create(draft: SubcategoryDraft, created_by: &str) -> Result<Uuid, DomainError> {
    let draft = draft.trimmed();
    draft
        .validate()
        .map_err(|e| DomainError::Validation(e.message().to_string()))?;

    if repository::find_by_code(&draft.code).await?.is_some() {
        return Err(DomainError::DuplicateCode);
    }

    let aggregate = Subcategory {
        id: SubcategoryId::new_v4(),
        parent_category_id: draft.parent_category_id.clone(),
        name: draft.name.clone(),
        code: draft.code.clone(),
        description: draft.description_or_none(),
        created_by: created_by.to_string(),
        created_at: Utc::now(),
    };

    repository::insert(&aggregate)
        .await
        .map_err(DomainError::from_insert_error)
}

/// List all subcategories, optionally filtered by exact code match
pub async fn list(code: Option<&str>) -> anyhow::Result<Vec<Subcategory>> {
    match code {
        Some(code) => Ok(repository::find_by_code(code)
            .await?
            .into_iter()
            .collect()),
        None => Ok(repository::list_all().await?),
    }
}
