use axum::Json;

use crate::domain::c001_category;

/// GET /api/category
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::c001_category::aggregate::Category>>, axum::http::StatusCode>
{
    match c001_category::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list categories: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/category/testdata
pub async fn insert_test_data() -> axum::http::StatusCode {
    match c001_category::service::insert_test_data().await {
        Ok(_) => axum::http::StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to seed categories: {e}");
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
