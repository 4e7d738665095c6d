//! Keyword search route.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;

use bazaar_core::item::ItemList;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};

/// Creates the search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search_items))
}

/// Query string for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to match against item names. Absent means match all.
    #[serde(default)]
    pub keyword: String,
}

/// GET /search?keyword=...
async fn search_items(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<ItemList>> {
    let Query(params) = params.map_err(|e| ApiError::validation(e.body_text()))?;
    let items = state.item_service().search(&params.keyword).await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rstest::rstest;

    use crate::test_support::{JPEG_BYTES, TestApp};

    async fn seeded() -> TestApp {
        let app = TestApp::spawn().await;
        app.post_item("blue shirt", "fashion", JPEG_BYTES).await;
        app.post_item("t-shirt", "fashion", JPEG_BYTES).await;
        app.post_item("jacket", "fashion", JPEG_BYTES).await;
        app
    }

    fn names(json: &serde_json::Value) -> Vec<String> {
        json["items"]
            .as_array()
            .expect("items array")
            .iter()
            .map(|item| item["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_search_matches_substring() {
        let app = seeded().await;

        let response = app.get("/search?keyword=shirt").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(names(&response.json()), ["blue shirt", "t-shirt"]);
    }

    #[rstest]
    #[case::empty_keyword("/search?keyword=")]
    #[case::no_keyword("/search")]
    #[tokio::test]
    async fn test_search_without_keyword_returns_all(#[case] uri: &str) {
        let app = seeded().await;

        let response = app.get(uri).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(names(&response.json()).len(), 3);
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty_list() {
        let app = seeded().await;

        let response = app.get("/search?keyword=laptop").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json(), serde_json::json!({ "items": [] }));
    }
}
