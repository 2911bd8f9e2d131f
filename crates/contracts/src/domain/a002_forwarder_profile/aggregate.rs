use serde::{Deserialize, Serialize};

/// Profil freight forwarder.
///
/// `service_types` mixes vocabulary values and free-text entries the same
/// way `BuyerProfile::business_types` does. `coverage_routes` is always
/// free text ("Surabaya - Rotterdam").
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForwarderProfile {
    pub id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_types: Vec<String>,
    pub coverage_routes: Vec<String>,
    /// Nomor lisensi usaha jasa pengurusan transportasi (SIUJPT).
    pub license_number: Option<String>,
    pub year_established: Option<u32>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForwarderProfileDto {
    pub id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_types: Vec<String>,
    pub coverage_routes: Vec<String>,
    pub license_number: Option<String>,
    pub year_established: Option<u32>,
}

impl ForwarderProfileDto {
    pub fn from_profile(profile: &ForwarderProfile) -> Self {
        Self {
            id: profile.id.clone(),
            company_name: profile.company_name.clone(),
            contact_name: profile.contact_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            service_types: profile.service_types.clone(),
            coverage_routes: profile.coverage_routes.clone(),
            license_number: profile.license_number.clone(),
            year_established: profile.year_established,
        }
    }
}
