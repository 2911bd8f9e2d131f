use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub search: String,

    pub sort_field: String,
    pub sort_ascending: bool,

    pub is_loaded: bool,

    // server pagination (1-based)
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            is_loaded: false,
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
