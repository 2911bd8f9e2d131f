use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Produk UMKM yang didaftarkan untuk ekspor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Product {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    /// Kategori produk (nilai dari `shared::vocab::PRODUCT_CATEGORIES`).
    pub category: String,
    pub price_idr: f64,
    pub min_order_qty: u32,
    pub unit_weight_kg: f64,
    /// Relative URLs of uploaded product images.
    pub images: Vec<String>,
    pub enrichment: Option<ProductEnrichment>,
    pub costing: Option<ExportCosting>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Backend-computed enrichment fields. The frontend never edits these,
/// it only renders whatever the server attached.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductEnrichment {
    pub hs_code: Option<String>,
    pub sku: Option<String>,
    pub b2b_description: Option<String>,
    pub enriched_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Harga ekspor per incoterm. Computed server-side, opaque here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportCosting {
    pub exw_usd: Option<f64>,
    pub fob_usd: Option<f64>,
    pub cif_usd: Option<f64>,
}

/// DTO for create/update of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_idr: f64,
    pub min_order_qty: u32,
    pub unit_weight_kg: f64,
    pub images: Vec<String>,
}

impl ProductDto {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price_idr: product.price_idr,
            min_order_qty: product.min_order_qty,
            unit_weight_kg: product.unit_weight_kg,
            images: product.images.clone(),
        }
    }
}

/// Flat row for the product list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price_idr: f64,
    pub min_order_qty: u32,
    pub hs_code: Option<String>,
    pub updated_at: Option<String>,
}
