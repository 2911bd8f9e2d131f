use crate::layout::navbar::Navbar;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use thaw::*;

/// Application frame: top header, left navigation, routed content.
#[component]
pub fn Shell() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.email))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="shell">
            <header class="shell__header">
                <span class="shell__brand">"EksporLink"</span>
                <div class="shell__header-right">
                    <span class="shell__user">{user_label}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                        "Keluar"
                    </Button>
                </div>
            </header>
            <div class="shell__body">
                <aside class="shell__sidebar">
                    <Navbar />
                </aside>
                <main class="shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
