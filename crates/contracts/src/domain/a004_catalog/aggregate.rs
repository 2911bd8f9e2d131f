use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Draft,
    Submitted,
    Live,
    Rejected,
}

impl ListingStatus {
    /// Label for display in list views.
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Draft => "Draf",
            ListingStatus::Submitted => "Diajukan",
            ListingStatus::Live => "Tayang",
            ListingStatus::Rejected => "Ditolak",
        }
    }
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Draft
    }
}

/// Entri katalog marketplace: satu produk yang ditayangkan pada satu
/// katalog tujuan (Alibaba, Tradekey, katalog kurasi internal, dll).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub product_ref: Uuid,
    pub product_name: String,
    pub marketplace: String,
    pub listing_status: ListingStatus,
    pub listed_at: Option<chrono::DateTime<chrono::Utc>>,
}
