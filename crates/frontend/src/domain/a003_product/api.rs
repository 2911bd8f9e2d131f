use contracts::domain::a003_product::aggregate::{Product, ProductDto, ProductListItem};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api::client;
use crate::shared::api::{ApiError, PageData};

#[derive(Serialize)]
struct ProductListQuery<'a> {
    page: usize,
    page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

/// Fetch one page of products, optionally filtered by search text.
pub async fn fetch_page(
    search: &str,
    page: usize,
    page_size: usize,
) -> Result<PageData<ProductListItem>, ApiError> {
    let query = ProductListQuery {
        page,
        page_size,
        search: Some(search.trim()).filter(|s| !s.is_empty()),
    };
    let query_string = serde_qs::to_string(&query).unwrap_or_default();
    client::get_page(&format!("/api/products/?{}", query_string), page_size, page).await
}

pub async fn fetch_by_id(id: &str) -> Result<Product, ApiError> {
    client::get_json(&format!("/api/products/{}/", id)).await
}

/// Create or update, depending on whether the DTO carries an id.
pub async fn save(dto: &ProductDto) -> Result<Product, ApiError> {
    match dto.id {
        Some(id) => client::put_json(&format!("/api/products/{}/", id), dto).await,
        None => client::post_json("/api/products/", dto).await,
    }
}

pub async fn delete(id: Uuid) -> Result<(), ApiError> {
    client::delete(&format!("/api/products/{}/", id)).await
}

/// Upload one validated image, returning the stored file URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("FormData tidak tersedia".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("Gagal menyiapkan file".to_string()))?;

    let result = client::post_form("/api/products/images/", &form).await?;
    Ok(result["url"].as_str().unwrap_or_default().to_string())
}
