use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a buyer account
#[component]
pub fn RequireBuyer(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user_info
                    .map(|u| u.is_buyer())
                    .unwrap_or(false)
            }
            fallback=|| view! { <div class="empty-state">"Halaman ini khusus akun pembeli."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires a forwarder account
#[component]
pub fn RequireForwarder(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user_info
                    .map(|u| u.is_forwarder())
                    .unwrap_or(false)
            }
            fallback=|| view! { <div class="empty-state">"Halaman ini khusus akun forwarder."</div> }
        >
            {children()}
        </Show>
    }
}
