use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hasil analisis kesiapan ekspor satu produk.
///
/// `recommendations` is the raw AI-generated text exactly as the backend
/// stored it. Structure (numbered items, "Masalah:"/"Solusi:" sections,
/// "Minggu N" plan markers) is only loosely guaranteed; the frontend
/// parses it best-effort for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportAnalysis {
    pub id: Uuid,
    pub product_ref: Uuid,
    /// Skor kesiapan 0-100.
    pub readiness_score: u8,
    pub recommendations: String,
    /// Per-aspect score breakdown, computed server-side. Opaque here.
    pub breakdown: Option<serde_json::Value>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
