use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a subcategory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubcategoryId(pub Uuid);

impl SubcategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SubcategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SubcategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Subcategory record. Created exactly once by the maintenance form and
/// never updated or deleted by this flow. `code` is unique across all
/// subcategories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,

    #[serde(rename = "parentCategoryId")]
    pub parent_category_id: String,

    pub name: String,
    pub code: String,
    pub description: Option<String>,

    /// Identity of the creator, assigned by the server from the session.
    #[serde(rename = "createdBy")]
    pub created_by: String,

    /// Assigned by the persistence layer at write time.
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Subcategory {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// What the form collects. The parent id is a raw string: the placeholder
/// option carries an empty value, so "nothing selected" is the empty
/// string rather than a sentinel label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SubcategoryDraft {
    #[serde(rename = "parentCategoryId")]
    pub parent_category_id: String,
    pub name: String,
    pub code: String,
    pub description: String,
}

/// First failing check wins; checks run in form order: category, name, code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    CategoryNotSelected,
    NameEmpty,
    CodeEmpty,
}

impl DraftError {
    pub fn message(&self) -> &'static str {
        match self {
            DraftError::CategoryNotSelected => "Please select a parent category",
            DraftError::NameEmpty => "Please enter subcategory name",
            DraftError::CodeEmpty => "Please enter subcategory code",
        }
    }
}

impl SubcategoryDraft {
    /// Copy with name/code/description trimmed. Applied before validation
    /// and before submission so stored values never carry stray whitespace.
    pub fn trimmed(&self) -> Self {
        Self {
            parent_category_id: self.parent_category_id.clone(),
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    /// Client-side validation. Description is optional and never checked.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.parent_category_id.is_empty() {
            return Err(DraftError::CategoryNotSelected);
        }
        if self.name.trim().is_empty() {
            return Err(DraftError::NameEmpty);
        }
        if self.code.trim().is_empty() {
            return Err(DraftError::CodeEmpty);
        }
        Ok(())
    }

    pub fn description_or_none(&self) -> Option<String> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
