use contracts::domain::a001_buyer_profile::aggregate::{BuyerProfile, BuyerProfileDto};

use crate::shared::api::client;
use crate::shared::api::ApiError;

/// Fetch the profile of the signed-in buyer. The endpoint returns 404
/// while the account has no profile yet; that is the "belum ada profil"
/// state, not an error.
pub async fn fetch_my_profile() -> Result<Option<BuyerProfile>, ApiError> {
    match client::get_json::<BuyerProfile>("/api/buyers/profile/").await {
        Ok(profile) => Ok(Some(profile)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn save(dto: &BuyerProfileDto) -> Result<BuyerProfile, ApiError> {
    if dto.id.is_some() {
        client::put_json("/api/buyers/profile/", dto).await
    } else {
        client::post_json("/api/buyers/profile/", dto).await
    }
}
