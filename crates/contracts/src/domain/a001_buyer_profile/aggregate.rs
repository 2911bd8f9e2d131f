use serde::{Deserialize, Serialize};

/// Profil pembeli internasional (international buyer).
///
/// `business_types` and `target_categories` are stored as flat string
/// arrays on the wire. Values either come from the closed vocabularies in
/// `shared::vocab` or are free-text entries typed by the user; the
/// frontend splits them apart for editing and merges them back on save.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuyerProfile {
    pub id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    pub country: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub business_types: Vec<String>,
    pub target_categories: Vec<String>,
    /// Perkiraan volume pembelian tahunan dalam USD.
    pub annual_volume_usd: Option<f64>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for create/update of a buyer profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuyerProfileDto {
    pub id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    pub country: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub business_types: Vec<String>,
    pub target_categories: Vec<String>,
    pub annual_volume_usd: Option<f64>,
}

impl BuyerProfileDto {
    pub fn from_profile(profile: &BuyerProfile) -> Self {
        Self {
            id: profile.id.clone(),
            company_name: profile.company_name.clone(),
            contact_name: profile.contact_name.clone(),
            country: profile.country.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            website: profile.website.clone(),
            business_types: profile.business_types.clone(),
            target_categories: profile.target_categories.clone(),
            annual_volume_usd: profile.annual_volume_usd,
        }
    }
}
