use contracts::domain::a005_export_analysis::aggregate::ExportAnalysis;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a005_export_analysis::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::recommendation::ui::RecommendationList;

#[component]
pub fn ExportAnalysisPage() -> impl IntoView {
    let params = use_params_map();
    let analysis: RwSignal<Option<ExportAnalysis>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (no_analysis, set_no_analysis) = signal(false);
    let (requesting, set_requesting) = signal(false);

    let product_id = Signal::derive(move || params.with(|p| p.get("id")).unwrap_or_default());

    let load_data = move || {
        let id = product_id.get_untracked();
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_for_product(&id).await {
                Ok(Some(data)) => {
                    analysis.set(Some(data));
                    set_no_analysis.set(false);
                }
                Ok(None) => {
                    analysis.set(None);
                    set_no_analysis.set(true);
                }
                Err(e) => {
                    set_error.set(Some(format!("Gagal memuat analisis: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        // reload when the product id in the route changes
        let _ = product_id.get();
        load_data();
    });

    let request_analysis = move |_| {
        let id = product_id.get_untracked();
        if id.is_empty() {
            return;
        }
        set_requesting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::request_analysis(&id).await {
                Ok(data) => {
                    analysis.set(Some(data));
                    set_no_analysis.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Gagal meminta analisis: {}", e)));
                }
            }
            set_requesting.set(false);
        });
    };

    let score_class = |score: u8| {
        if score >= 80 {
            "score-badge score-badge--high"
        } else if score >= 50 {
            "score-badge score-badge--medium"
        } else {
            "score-badge score-badge--low"
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Analisis Kesiapan Ekspor"</h1>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || loading.get().then(|| view! { <p class="page__loading">"Memuat..."</p> })}

                {move || {
                    no_analysis.get().then(|| view! {
                        <div class="empty-state empty-state--cta">
                            <p>"Produk ini belum pernah dianalisis."</p>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=request_analysis
                                disabled=Signal::derive(move || requesting.get())
                            >
                                {icon("chart")}
                                {move || if requesting.get() { " Menganalisis..." } else { " Mulai analisis" }}
                            </Button>
                        </div>
                    })
                }}

                {move || {
                    analysis.get().map(|data| {
                        let created = data
                            .created_at
                            .map(|ts| format_datetime(&ts.to_rfc3339()))
                            .unwrap_or_else(|| "-".to_string());
                        let breakdown_rows = data
                            .breakdown
                            .as_ref()
                            .and_then(|b| b.as_object())
                            .map(|map| {
                                map.iter()
                                    .map(|(aspect, value)| {
                                        let display = match value.as_f64() {
                                            Some(number) => format!("{:.0}", number),
                                            None => value.to_string(),
                                        };
                                        (aspect.clone(), display)
                                    })
                                    .collect::<Vec<_>>()
                            })
                            .unwrap_or_default();

                        view! {
                            <div class="analysis">
                                <div class="analysis__summary">
                                    <span class=score_class(data.readiness_score)>
                                        {format!("{}", data.readiness_score)}
                                    </span>
                                    <div class="analysis__meta">
                                        <span>"Skor kesiapan ekspor"</span>
                                        <span class="analysis__date">{format!("Dianalisis: {}", created)}</span>
                                    </div>
                                </div>

                                {(!breakdown_rows.is_empty()).then(|| view! {
                                    <div class="info-card">
                                        <h3 class="info-card__title">"Rincian per aspek"</h3>
                                        <dl>
                                            {breakdown_rows
                                                .into_iter()
                                                .map(|(aspect, score)| {
                                                    view! {
                                                        <dt>{aspect}</dt>
                                                        <dd>{score}</dd>
                                                    }
                                                })
                                                .collect_view()}
                                        </dl>
                                    </div>
                                })}

                                <h3 class="analysis__section-title">"Rekomendasi"</h3>
                                <RecommendationList text=data.recommendations />
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
