//! Normalization of paginated list responses.
//!
//! Accepts the three list shapes the backend is known to produce and
//! flattens them into one structure the list pages can render directly.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A normalized page of results. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub page: usize,
}

impl<T> PageData<T> {
    /// Empty page. List views render this as an empty state, never an error.
    pub fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 1,
            has_next: false,
            has_previous: false,
            page,
        }
    }
}

/// Normalize an unwrapped list payload.
///
/// Recognized shapes:
/// - `{"results": [...], "count": N, "next": url|null, "previous": url|null}`
/// - `{"data": {"results": [...], "count": N}}`
/// - bare array (single page)
///
/// An explicit `total_pages` from the backend wins over the computed
/// `ceil(count / page_size)`. Unrecognized input yields an empty page.
/// Rows that fail to deserialize are dropped one by one rather than
/// failing the whole page.
pub fn normalize_page<T: DeserializeOwned>(
    unwrapped: &Value,
    page_size: usize,
    requested_page: usize,
) -> PageData<T> {
    let page = requested_page.max(1);

    let container = match unwrapped {
        Value::Object(map) => {
            if map.get("results").map(Value::is_array).unwrap_or(false) {
                Some(unwrapped)
            } else {
                map.get("data")
                    .filter(|d| d.get("results").map(Value::is_array).unwrap_or(false))
            }
        }
        Value::Array(_) => Some(unwrapped),
        _ => None,
    };
    let Some(container) = container else {
        return PageData::empty(page);
    };

    if let Value::Array(items) = container {
        let items = deserialize_items(items);
        let total_count = items.len();
        return PageData {
            items,
            total_count,
            total_pages: 1,
            has_next: false,
            has_previous: page > 1,
            page,
        };
    }

    let results = container
        .get("results")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let total_count = container
        .get("count")
        .and_then(Value::as_u64)
        .unwrap_or(results.len() as u64) as usize;

    let total_pages = match container.get("total_pages").and_then(Value::as_u64) {
        Some(explicit) => (explicit as usize).max(1),
        None => {
            let size = page_size.max(1);
            total_count.div_ceil(size).max(1)
        }
    };

    let has_next = match container.get("next") {
        Some(next) => !next.is_null(),
        None => page < total_pages,
    };
    let has_previous = match container.get("previous") {
        Some(previous) => !previous.is_null(),
        None => page > 1,
    };

    PageData {
        items: deserialize_items(&results),
        total_count,
        total_pages,
        has_next,
        has_previous,
        page,
    }
}

fn deserialize_items<T: DeserializeOwned>(values: &[Value]) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| serde_json::from_value(value.clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn django_page_normalizes() {
        let raw = json!({"results": [1, 2, 3], "count": 25, "next": "url", "previous": null});
        let page: PageData<i64> = normalize_page(&raw, 3, 1);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 9);
        assert!(page.has_next);
        assert!(!page.has_previous);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn nested_data_page_normalizes() {
        let raw = json!({"data": {"results": ["a", "b"], "count": 12}});
        let page: PageData<String> = normalize_page(&raw, 2, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 6);
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn explicit_total_pages_wins() {
        let raw = json!({"results": [1], "count": 100, "total_pages": 4});
        let page: PageData<i64> = normalize_page(&raw, 10, 1);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn bare_array_is_a_single_page() {
        let raw = json!([5, 6, 7]);
        let page: PageData<i64> = normalize_page(&raw, 50, 1);
        assert_eq!(page.items, vec![5, 6, 7]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn empty_page_envelope_has_one_page() {
        let raw = json!({"results": [], "count": 0});
        let page: PageData<i64> = normalize_page(&raw, 20, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn unrecognized_input_yields_empty_page() {
        for raw in [json!(null), json!("x"), json!({"items": []}), json!(3.5)] {
            let page: PageData<i64> = normalize_page(&raw, 10, 2);
            assert!(page.items.is_empty());
            assert_eq!(page.total_pages, 1);
            assert!(!page.has_next);
        }
    }

    #[test]
    fn malformed_rows_are_dropped_individually() {
        let raw = json!({"results": [1, "bukan angka", 3], "count": 3});
        let page: PageData<i64> = normalize_page(&raw, 10, 1);
        assert_eq!(page.items, vec![1, 3]);
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = json!({"results": [9, 8], "count": 2, "next": null, "previous": null});
        let first: PageData<i64> = normalize_page(&raw, 10, 1);
        let second: PageData<i64> = normalize_page(&raw, 10, 1);
        assert_eq!(first, second);
    }
}
