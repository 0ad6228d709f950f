use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::c002_subcategory;
use crate::domain::error::DomainError;
use contracts::domain::c002_subcategory::aggregate::{Subcategory, SubcategoryDraft};
use contracts::system::auth::TokenClaims;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact-match filter used by the client-side uniqueness probe
    pub code: Option<String>,
}

/// GET /api/subcategory?code=...
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Subcategory>>, StatusCode> {
    match c002_subcategory::service::list(query.code.as_deref()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list subcategories: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/subcategory
///
/// Runs behind `require_auth`; the creator identity is taken from the
/// validated claims, never from the request body.
pub async fn create(
    Extension(claims): Extension<TokenClaims>,
    Json(draft): Json<SubcategoryDraft>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<serde_json::Value>)> {
    match c002_subcategory::service::create(draft, &claims.sub).await {
        Ok(id) => Ok((StatusCode::CREATED, Json(json!({ "id": id.to_string() })))),
        Err(DomainError::DuplicateCode) => Err((
            StatusCode::CONFLICT,
            Json(json!({ "error": DomainError::DuplicateCode.to_string() })),
        )),
        Err(DomainError::Validation(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))))
        }
        Err(DomainError::Db(e)) => {
            tracing::error!("Failed to create subcategory: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            ))
        }
    }
}
