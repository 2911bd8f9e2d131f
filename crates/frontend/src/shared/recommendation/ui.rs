use leptos::prelude::*;

use super::parser::{parse, RecommendationItem};
use crate::shared::icons::icon;

/// Renders a raw recommendation blob as cards: week markers as flat info
/// cards, findings as expandable accordions.
#[component]
pub fn RecommendationList(#[prop(into)] text: String) -> impl IntoView {
    let items = parse(&text);

    view! {
        <div class="recommendation-list">
            {if items.is_empty() {
                view! { <p class="empty-state">"Belum ada rekomendasi."</p> }.into_any()
            } else {
                items
                    .into_iter()
                    .map(|item| view! { <RecommendationCard item=item /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn RecommendationCard(item: RecommendationItem) -> impl IntoView {
    if item.is_week_marker {
        return view! {
            <div class="recommendation-card recommendation-card--week">
                <span class="recommendation-card__title">{item.title}</span>
                {item
                    .details
                    .into_iter()
                    .map(|line| view! { <p class="recommendation-card__line">{line}</p> })
                    .collect_view()}
            </div>
        }
        .into_any();
    }

    let expanded = RwSignal::new(false);
    let title = if item.title.is_empty() {
        "Catatan".to_string()
    } else {
        item.title
    };

    view! {
        <div class="recommendation-card">
            <button
                class="recommendation-card__header"
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                <span class="recommendation-card__title">{title}</span>
                {move || icon(if expanded.get() { "chevron-up" } else { "chevron-down" })}
            </button>
            <div
                class="recommendation-card__body"
                style:display=move || if expanded.get() { "block" } else { "none" }
            >
                {item.problem.map(|problem| {
                    view! {
                        <div class="recommendation-card__section">
                            <span class="recommendation-card__label">"Masalah"</span>
                            <p>{problem}</p>
                        </div>
                    }
                })}
                {(!item.solutions.is_empty()).then(|| {
                    view! {
                        <div class="recommendation-card__section">
                            <span class="recommendation-card__label">"Langkah perbaikan"</span>
                            <ul>
                                {item
                                    .solutions
                                    .into_iter()
                                    .map(|step| view! { <li>{step}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
                {item
                    .details
                    .into_iter()
                    .map(|line| view! { <p class="recommendation-card__line">{line}</p> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
