use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use contracts::domain::c002_subcategory::aggregate::{
    Subcategory, SubcategoryDraft, SubcategoryId,
};
use contracts::domain::common::AggregateId;

use crate::domain::c002_subcategory::flow::SubcategoryGateway;
use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Deserialize)]
struct CreatedBody {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Gateway talking to the backend over HTTP.
#[derive(Clone, Copy, Default)]
pub struct HttpSubcategoryGateway;

#[async_trait(?Send)]
impl SubcategoryGateway for HttpSubcategoryGateway {
    async fn find_by_code(&self, code: &str) -> Result<Option<Subcategory>, String> {
        let response = Request::get(&api_url("/api/subcategory"))
            .query([("code", code)])
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("Server returned {}", response.status()));
        }

        let matches: Vec<Subcategory> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(matches.into_iter().next())
    }

    async fn create(&self, draft: &SubcategoryDraft) -> Result<SubcategoryId, String> {
        let token = storage::get_access_token().unwrap_or_default();

        let response = Request::post(&api_url("/api/subcategory"))
            .header("Authorization", &format!("Bearer {}", token))
            .json(draft)
            .map_err(|e| format!("Failed to encode request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if response.ok() {
            let body: CreatedBody = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))?;
            return SubcategoryId::from_string(&body.id);
        }

        // Error bodies carry a user-facing message; pass it through so the
        // flow can recognize a duplicate answered by the unique index.
        match response.json::<ErrorBody>().await {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("Server returned {}", response.status())),
        }
    }
}

/// Loads all subcategories (no code filter) for the list page.
pub async fn fetch_subcategories() -> Result<Vec<Subcategory>, String> {
    let response = Request::get(&api_url("/api/subcategory"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
