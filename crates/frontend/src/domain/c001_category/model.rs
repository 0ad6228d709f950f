use contracts::domain::c001_category::aggregate::Category;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Loads the parent category list from the backend, sorted server-side.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/category"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Seeds the demo categories; skips names that already exist.
pub async fn insert_test_data() -> Result<(), String> {
    let response = Request::post(&api_url("/api/category/testdata"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned {}", response.status()));
    }
    Ok(())
}
