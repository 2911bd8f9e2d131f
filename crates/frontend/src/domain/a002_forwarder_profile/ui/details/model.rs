use contracts::domain::a002_forwarder_profile::aggregate::{ForwarderProfile, ForwarderProfileDto};

use crate::shared::api::client;
use crate::shared::api::ApiError;

/// 404 means the account has no profile yet.
pub async fn fetch_my_profile() -> Result<Option<ForwarderProfile>, ApiError> {
    match client::get_json::<ForwarderProfile>("/api/forwarders/profile/").await {
        Ok(profile) => Ok(Some(profile)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn save(dto: &ForwarderProfileDto) -> Result<ForwarderProfile, ApiError> {
    if dto.id.is_some() {
        client::put_json("/api/forwarders/profile/", dto).await
    } else {
        client::post_json("/api/forwarders/profile/", dto).await
    }
}
