//! Response envelope classification.
//!
//! The backend is not consistent about how it wraps payloads: some
//! endpoints return `{"success": true, "data": ...}`, paginated endpoints
//! return `{"results": [...], "count": N, ...}`, and a few return the
//! entity or array bare. Classification happens once, here, so the rest of
//! the frontend matches on a closed enum instead of probing keys.

use serde_json::Value;
use thiserror::Error;

/// Explicit backend failure (`{"success": false, ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailed {
    pub message: String,
}

/// Recognized envelope shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"success": true, "data": ...}`: payload already extracted.
    Success(Value),
    /// `{"success": false, ...}`: message extracted, generic fallback
    /// when neither `message` nor `detail` is a string.
    Failure { message: String },
    /// `{"results": [...], "count": N, ...}`: kept whole so the
    /// pagination normalizer can read `next`/`previous`/`total_pages`.
    Paginated(Value),
    /// Bare array, bare entity, or anything unrecognized. Callers own
    /// defensive field access.
    Bare(Value),
}

const GENERIC_FAILURE: &str = "Terjadi kesalahan pada server";

/// Classify a decoded response body. Total: never panics, unknown shapes
/// fall through to [`Envelope::Bare`].
pub fn classify(raw: Value) -> Envelope {
    if let Value::Object(map) = &raw {
        match map.get("success").and_then(Value::as_bool) {
            Some(true) => {
                if let Some(data) = map.get("data") {
                    return Envelope::Success(data.clone());
                }
            }
            Some(false) => {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("detail").and_then(Value::as_str))
                    .unwrap_or(GENERIC_FAILURE)
                    .to_string();
                return Envelope::Failure { message };
            }
            None => {}
        }
        let is_paginated = map.get("results").map(Value::is_array).unwrap_or(false)
            && map.get("count").map(Value::is_number).unwrap_or(false);
        if is_paginated {
            return Envelope::Paginated(raw);
        }
    }
    Envelope::Bare(raw)
}

/// Extract the logical payload, turning an explicit failure into an error.
pub fn unwrap_payload(raw: Value) -> Result<Value, RequestFailed> {
    match classify(raw) {
        Envelope::Success(data) => Ok(data),
        Envelope::Failure { message } => Err(RequestFailed { message }),
        Envelope::Paginated(value) | Envelope::Bare(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_yields_data() {
        let raw = json!({"success": true, "data": {"id": 7, "name": "Keripik"}});
        assert_eq!(
            classify(raw),
            Envelope::Success(json!({"id": 7, "name": "Keripik"}))
        );
    }

    #[test]
    fn success_envelope_around_page_keeps_page_intact() {
        let raw = json!({"success": true, "data": {"results": [], "count": 0}});
        assert_eq!(
            unwrap_payload(raw).unwrap(),
            json!({"results": [], "count": 0})
        );
    }

    #[test]
    fn failure_envelope_extracts_message() {
        let raw = json!({"success": false, "message": "Produk tidak valid"});
        let err = unwrap_payload(raw).unwrap_err();
        assert_eq!(err.message, "Produk tidak valid");
    }

    #[test]
    fn failure_envelope_falls_back_to_detail_then_generic() {
        let raw = json!({"success": false, "detail": "Sesi kedaluwarsa"});
        assert_eq!(unwrap_payload(raw).unwrap_err().message, "Sesi kedaluwarsa");

        let raw = json!({"success": false});
        assert_eq!(unwrap_payload(raw).unwrap_err().message, GENERIC_FAILURE);
    }

    #[test]
    fn paginated_shape_passes_through_whole() {
        let raw = json!({"results": [1, 2], "count": 2, "next": null, "previous": null});
        assert_eq!(classify(raw.clone()), Envelope::Paginated(raw));
    }

    #[test]
    fn results_without_count_is_not_paginated() {
        let raw = json!({"results": [1, 2]});
        assert_eq!(classify(raw.clone()), Envelope::Bare(raw));
    }

    #[test]
    fn bare_array_and_entity_pass_through() {
        let arr = json!([1, 2, 3]);
        assert_eq!(classify(arr.clone()), Envelope::Bare(arr));

        let entity = json!({"id": 1, "name": "Batik"});
        assert_eq!(classify(entity.clone()), Envelope::Bare(entity));
    }

    #[test]
    fn classification_is_total_over_odd_inputs() {
        for raw in [
            Value::Null,
            json!(42),
            json!("teks"),
            json!(true),
            json!({"success": "yes"}),
            json!({"data": []}),
            json!({"results": "bukan array", "count": 3}),
            json!([[[{"deep": [null]}]]]),
        ] {
            // must not panic, and non-failure shapes unwrap to themselves
            let _ = unwrap_payload(raw);
        }
    }
}
