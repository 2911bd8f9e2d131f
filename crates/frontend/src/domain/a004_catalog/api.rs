use contracts::domain::a004_catalog::aggregate::CatalogEntry;
use uuid::Uuid;

use crate::shared::api::client;
use crate::shared::api::{ApiError, PageData};

pub async fn fetch_page(page: usize, page_size: usize) -> Result<PageData<CatalogEntry>, ApiError> {
    let path = format!("/api/catalog/?page={}&page_size={}", page, page_size);
    client::get_page(&path, page_size, page).await
}

/// Ask the backend to submit a draft entry to its marketplace.
pub async fn submit_entry(id: Uuid) -> Result<(), ApiError> {
    client::post_value(&format!("/api/catalog/{}/submit/", id), &serde_json::json!({}))
        .await
        .map(|_| ())
}
