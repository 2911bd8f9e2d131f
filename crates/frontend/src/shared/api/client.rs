//! Thin HTTP client over `gloo-net`.
//!
//! Every call goes through [`read_response`], which applies the error
//! taxonomy and envelope classification in one place. Domain service
//! modules build typed wrappers on top of these helpers.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::envelope::{classify, Envelope, RequestFailed};
use super::pagination::{normalize_page, PageData};
use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Backend said `success: false`.
    #[error("{0}")]
    RequestFailed(#[from] RequestFailed),
    /// 404. Profile pages treat this as "no profile yet", not an error.
    #[error("Data tidak ditemukan")]
    NotFound,
    #[error("HTTP {status}")]
    Http { status: u16 },
    #[error("Gagal menghubungi server: {0}")]
    Network(String),
    #[error("Format respons tidak dikenali: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

fn auth_header() -> Option<String> {
    storage::get_token().map(|token| format!("Bearer {}", token))
}

async fn read_response(response: Response) -> Result<Value, ApiError> {
    if response.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    let raw: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    match classify(raw) {
        Envelope::Success(data) => Ok(data),
        Envelope::Failure { message } => Err(RequestFailed { message }.into()),
        Envelope::Paginated(value) | Envelope::Bare(value) => Ok(value),
    }
}

/// GET returning the unwrapped payload as raw JSON.
pub async fn get_value(path: &str) -> Result<Value, ApiError> {
    let mut builder = Request::get(&api_url(path));
    if let Some(header) = auth_header() {
        builder = builder.header("Authorization", &header);
    }
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

/// GET returning a typed payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let value = get_value(path).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a paginated list, normalized to [`PageData`].
pub async fn get_page<T: DeserializeOwned>(
    path: &str,
    page_size: usize,
    page: usize,
) -> Result<PageData<T>, ApiError> {
    let value = get_value(path).await?;
    Ok(normalize_page(&value, page_size, page))
}

/// POST a JSON body, returning the unwrapped payload.
pub async fn post_value<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let mut builder = Request::post(&api_url(path));
    if let Some(header) = auth_header() {
        builder = builder.header("Authorization", &header);
    }
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

/// POST a JSON body, returning a typed payload.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let value = post_value(path, body).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a browser `FormData` body (multipart file uploads).
pub async fn post_form(path: &str, form: &web_sys::FormData) -> Result<Value, ApiError> {
    let mut builder = Request::post(&api_url(path));
    if let Some(header) = auth_header() {
        builder = builder.header("Authorization", &header);
    }
    let response = builder
        .body(wasm_bindgen::JsValue::from(form.clone()))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

/// PUT a JSON body, returning the unwrapped payload.
pub async fn put_value<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let mut builder = Request::put(&api_url(path));
    if let Some(header) = auth_header() {
        builder = builder.header("Authorization", &header);
    }
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

/// PUT a JSON body, returning a typed payload.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let value = put_value(path, body).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// DELETE, ignoring any response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let mut builder = Request::delete(&api_url(path));
    if let Some(header) = auth_header() {
        builder = builder.header("Authorization", &header);
    }
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    Ok(())
}
