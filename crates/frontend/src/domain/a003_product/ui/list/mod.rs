mod state;

use contracts::domain::a003_product::aggregate::ProductListItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a003_product::api;
use crate::shared::api::race::FetchCoordinator;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use state::create_state;

impl Sortable for ProductListItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "price_idr" => self
                .price_idr
                .partial_cmp(&other.price_idr)
                .unwrap_or(std::cmp::Ordering::Equal),
            "min_order_qty" => self.min_order_qty.cmp(&other.min_order_qty),
            "updated_at" => self
                .updated_at
                .as_deref()
                .unwrap_or("")
                .cmp(other.updated_at.as_deref().unwrap_or("")),
            _ => self.name.cmp(&other.name),
        }
    }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let state = create_state();
    let items: RwSignal<Vec<ProductListItem>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    // a ticket per dispatch; stale responses are discarded on arrival
    let coordinator = StoredValue::new(FetchCoordinator::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let (page, page_size, search) =
            state.with_untracked(|s| (s.page, s.page_size, s.search.clone()));
        let ticket = coordinator.with_value(|c| c.begin());

        spawn_local(async move {
            let result = api::fetch_page(&search, page, page_size).await;
            if !coordinator.with_value(|c| c.is_current(ticket)) {
                return;
            }
            match result {
                Ok(data) => {
                    items.set(data.items);
                    state.update(|s| {
                        s.total_count = data.total_count;
                        s.total_pages = data.total_pages;
                        s.is_loaded = true;
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Gagal memuat produk: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let apply_search = move |query: String| {
        state.update(|s| {
            s.search = query;
            s.page = 1;
        });
        load_data();
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            let (field, ascending) =
                state.with_untracked(|s| (s.sort_field.clone(), s.sort_ascending));
            items.update(|list| sort_list(list, &field, ascending));
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
        load_data();
    };

    let delete_product = move |item: ProductListItem| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Hapus produk \"{}\"?", item.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(item.id).await {
                Ok(()) => load_data(),
                Err(e) => set_error.set(Some(format!("Gagal menghapus: {}", e))),
            }
        });
    };

    let search_value = Signal::derive(move || state.get().search);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Produk"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <A href="/produk/baru" attr:class="button-link">
                        {icon("plus")}
                        " Produk baru"
                    </A>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Memuat..." } else { " Muat ulang" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel__left">
                        {icon("filter")}
                        <SearchInput
                            value=search_value
                            on_change=Callback::new(apply_search)
                            placeholder="Nama produk atau kategori..."
                        />
                    </div>
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=Signal::derive(move || state.get().total_pages)
                        total_count=Signal::derive(move || state.get().total_count)
                        page_size=Signal::derive(move || state.get().page_size)
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("name")>
                                        "Nama"
                                        {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "name", state.with(|s| s.sort_ascending))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("category")>
                                        "Kategori"
                                        {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "category", state.with(|s| s.sort_ascending))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("price_idr")>
                                        "Harga (Rp)"
                                        {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "price_idr", state.with(|s| s.sort_ascending))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"MOQ"</TableHeaderCell>
                                <TableHeaderCell>"Kode HS"</TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("updated_at")>
                                        "Diperbarui"
                                        {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "updated_at", state.with(|s| s.sort_ascending))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|item| item.id
                                children=move |item| {
                                    let edit_href = format!("/produk/{}", item.id);
                                    let analysis_href = format!("/produk/{}/analisis", item.id);
                                    let updated = item
                                        .updated_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "-".to_string());
                                    let item_for_delete = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <A href=edit_href>{item.name.clone()}</A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.category.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{:.0}", item.price_idr)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.min_order_qty}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.hs_code.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{updated}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <A href=analysis_href attr:title="Analisis ekspor">
                                                    {icon("chart")}
                                                </A>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_product(item_for_delete.clone())
                                                    attr:title="Hapus"
                                                >
                                                    {icon("x")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || {
                        (state.get().is_loaded && items.get().is_empty())
                            .then(|| view! {
                                <p class="empty-state">"Belum ada produk. Tambahkan produk pertama Anda."</p>
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
