use contracts::domain::a005_export_analysis::aggregate::ExportAnalysis;

use crate::shared::api::client;
use crate::shared::api::ApiError;

/// Latest analysis of a product. 404 means no analysis has been run yet.
pub async fn fetch_for_product(product_id: &str) -> Result<Option<ExportAnalysis>, ApiError> {
    let path = format!("/api/products/{}/analysis/", product_id);
    match client::get_json::<ExportAnalysis>(&path).await {
        Ok(analysis) => Ok(Some(analysis)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Queue a fresh analysis run for a product.
pub async fn request_analysis(product_id: &str) -> Result<ExportAnalysis, ApiError> {
    let path = format!("/api/products/{}/analysis/", product_id);
    client::post_json(&path, &serde_json::json!({})).await
}
