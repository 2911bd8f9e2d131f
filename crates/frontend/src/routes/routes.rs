use crate::domain::a001_buyer_profile::ui::details::BuyerProfilePage;
use crate::domain::a002_forwarder_profile::ui::details::ForwarderProfilePage;
use crate::domain::a003_product::ui::details::ProductDetailsPage;
use crate::domain::a003_product::ui::list::ProductListPage;
use crate::domain::a004_catalog::ui::list::CatalogListPage;
use crate::domain::a005_export_analysis::ui::details::ExportAnalysisPage;
use crate::layout::shell::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Router>
                <Routes fallback=|| view! { <p class="empty-state">"Halaman tidak ditemukan."</p> }>
                    <ParentRoute path=path!("/") view=Shell>
                        <Route path=path!("") view=ProductListPage />
                        <Route path=path!("produk") view=ProductListPage />
                        <Route path=path!("produk/baru") view=ProductDetailsPage />
                        <Route path=path!("produk/:id") view=ProductDetailsPage />
                        <Route path=path!("produk/:id/analisis") view=ExportAnalysisPage />
                        <Route path=path!("katalog") view=CatalogListPage />
                        <Route path=path!("profil/pembeli") view=BuyerProfilePage />
                        <Route path=path!("profil/forwarder") view=ForwarderProfilePage />
                    </ParentRoute>
                </Routes>
            </Router>
        </Show>
    }
}
