mod state;

use contracts::domain::a004_catalog::aggregate::{CatalogEntry, ListingStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a004_catalog::api;
use crate::shared::api::race::FetchCoordinator;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use state::create_state;

impl Searchable for CatalogEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        let query = filter.to_lowercase();
        self.product_name.to_lowercase().contains(&query)
            || self.marketplace.to_lowercase().contains(&query)
    }
}

fn status_badge(status: ListingStatus) -> AnyView {
    let class = match status {
        ListingStatus::Draft => "badge badge--neutral",
        ListingStatus::Submitted => "badge badge--warning",
        ListingStatus::Live => "badge badge--success",
        ListingStatus::Rejected => "badge badge--error",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

#[component]
pub fn CatalogListPage() -> impl IntoView {
    let state = create_state();
    let all_entries: RwSignal<Vec<CatalogEntry>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let coordinator = StoredValue::new(FetchCoordinator::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let (page, page_size) = state.with_untracked(|s| (s.page, s.page_size));
        let ticket = coordinator.with_value(|c| c.begin());

        spawn_local(async move {
            let result = api::fetch_page(page, page_size).await;
            if !coordinator.with_value(|c| c.is_current(ticket)) {
                return;
            }
            match result {
                Ok(data) => {
                    all_entries.set(data.items);
                    state.update(|s| {
                        s.total_count = data.total_count;
                        s.total_pages = data.total_pages;
                        s.is_loaded = true;
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Gagal memuat katalog: {}", e)));
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

    // search filters the loaded page client-side
    let visible_entries = Signal::derive(move || {
        let query = state.with(|s| s.search.clone());
        filter_list(all_entries.get(), &query)
    });

    let apply_search = move |query: String| {
        state.update(|s| s.search = query);
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

    let submit_entry = move |entry: CatalogEntry| {
        spawn_local(async move {
            match api::submit_entry(entry.id).await {
                Ok(()) => load_data(),
                Err(e) => set_error.set(Some(format!("Gagal mengajukan: {}", e))),
            }
        });
    };

    let search_value = Signal::derive(move || state.get().search);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Katalog"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
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
                            placeholder="Produk atau marketplace..."
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
                                <TableHeaderCell>"Produk"</TableHeaderCell>
                                <TableHeaderCell>"Marketplace"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Tayang sejak"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_entries.get()
                                key=|entry| entry.id
                                children=move |entry| {
                                    let product_href = format!("/produk/{}", entry.product_ref);
                                    let listed = entry
                                        .listed_at
                                        .map(|ts| format_date(&ts.to_rfc3339()))
                                        .unwrap_or_else(|| "-".to_string());
                                    let is_draft = entry.listing_status == ListingStatus::Draft;
                                    let entry_for_submit = entry.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <A href=product_href>{entry.product_name.clone()}</A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{entry.marketplace.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(entry.listing_status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{listed}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {is_draft.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| submit_entry(entry_for_submit.clone())
                                                        attr:title="Ajukan ke marketplace"
                                                    >
                                                        {icon("upload")}
                                                    </Button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || {
                        (state.get().is_loaded && visible_entries.get().is_empty())
                            .then(|| view! {
                                <p class="empty-state">"Belum ada entri katalog."</p>
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
