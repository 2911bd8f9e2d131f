use leptos::prelude::*;

/// Progress bar for profile completion. Creation forms block submission
/// until the percentage reaches 100.
#[component]
pub fn CompletionBar(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    view! {
        <div class="completion-bar">
            <div class="completion-bar__track">
                <div
                    class="completion-bar__fill"
                    class=("completion-bar__fill--done", move || percent.get() >= 100)
                    style:width=move || format!("{}%", percent.get().min(100))
                ></div>
            </div>
            <span class="completion-bar__label">
                {move || format!("Kelengkapan profil: {}%", percent.get())}
            </span>
        </div>
    }
}
