use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

/// Left navigation. Entries depend on the role of the signed-in user:
/// UMKM sellers manage products and catalogs, buyers and forwarders
/// manage their own profile.
#[component]
pub fn Navbar() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let is_buyer = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.is_buyer())
            .unwrap_or(false)
    };
    let is_forwarder = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.is_forwarder())
            .unwrap_or(false)
    };
    let is_seller = move || !is_buyer() && !is_forwarder();

    view! {
        <nav class="navbar">
            <Show when=is_seller>
                <A href="/produk" attr:class="navbar__link">
                    {icon("products")}
                    <span>"Produk"</span>
                </A>
                <A href="/katalog" attr:class="navbar__link">
                    {icon("catalog")}
                    <span>"Katalog"</span>
                </A>
            </Show>
            <Show when=is_buyer>
                <A href="/profil/pembeli" attr:class="navbar__link">
                    {icon("profile")}
                    <span>"Profil Pembeli"</span>
                </A>
            </Show>
            <Show when=is_forwarder>
                <A href="/profil/forwarder" attr:class="navbar__link">
                    {icon("ship")}
                    <span>"Profil Forwarder"</span>
                </A>
            </Show>
        </nav>
    }
}
