use contracts::shared::vocab::PRODUCT_CATEGORIES;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;
use thaw::*;

use super::view_model::ProductDetailsViewModel;
use crate::shared::components::completion_bar::CompletionBar;
use crate::shared::icons::icon;

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let vm = ProductDetailsViewModel::new();

    let form = vm.form;
    let enrichment = vm.enrichment;
    let costing = vm.costing;
    let error = vm.error;
    let success_message = vm.success_message;
    let loading = vm.loading;
    let uploading = vm.uploading;
    let file_checks = vm.file_checks;

    {
        let vm_load = vm.clone();
        Effect::new(move |_| {
            let id = params.with(|p| p.get("id"));
            vm_load.load_if_needed(id);
        });
    }

    let completion = {
        let vm_completion = vm.clone();
        Signal::derive(move || vm_completion.completion())
    };
    let is_create = move || form.get().id.is_none();

    let navigate = use_navigate();
    let on_save = {
        let vm_save = vm.clone();
        move |_| {
            let navigate = navigate.clone();
            vm_save.save_command(Rc::new(move |_| {
                navigate("/produk", Default::default());
            }));
        }
    };

    let on_files_picked = {
        let vm_files = vm.clone();
        move |ev: leptos::ev::Event| {
            use wasm_bindgen::JsCast;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let mut files = Vec::new();
            for index in 0..list.length() {
                if let Some(file) = list.item(index) {
                    files.push(file);
                }
            }
            input.set_value("");
            vm_files.upload_images(files);
        }
    };

    let vm_remove = vm.clone();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">
                    {move || if is_create() { "Produk baru" } else { "Ubah produk" }}
                </h1>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || success_message.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                {move || loading.get().then(|| view! { <p class="page__loading">"Memuat..."</p> })}

                <div class="form">
                        <Show when=is_create>
                            <CompletionBar percent=completion />
                        </Show>

                        <div class="form__group">
                            <Label>"Nama produk"</Label>
                            <input
                                class="form__input"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>

                        <div class="form__group">
                            <Label>"Deskripsi"</Label>
                            <textarea
                                class="form__textarea"
                                rows="4"
                                prop:value=move || form.get().description
                                on:input=move |ev| {
                                    form.update(|f| f.description = event_target_value(&ev))
                                }
                            ></textarea>
                        </div>

                        <div class="form__group">
                            <Label>"Kategori"</Label>
                            <select
                                class="form__select"
                                prop:value=move || form.get().category
                                on:change=move |ev| {
                                    form.update(|f| f.category = event_target_value(&ev))
                                }
                            >
                                <option value="">"-- pilih kategori --"</option>
                                {PRODUCT_CATEGORIES
                                    .iter()
                                    .map(|&category| {
                                        view! {
                                            <option
                                                value=category
                                                selected=move || form.get().category == category
                                            >
                                                {category}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form__row">
                            <div class="form__group">
                                <Label>"Harga satuan (Rp)"</Label>
                                <input
                                    class="form__input"
                                    type="number"
                                    min="0"
                                    prop:value=move || form.get().price_idr.to_string()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                        form.update(|f| f.price_idr = value);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <Label>"Minimum order (unit)"</Label>
                                <input
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || form.get().min_order_qty.to_string()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev).parse().unwrap_or(0);
                                        form.update(|f| f.min_order_qty = value);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <Label>"Berat per unit (kg)"</Label>
                                <input
                                    class="form__input"
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    prop:value=move || form.get().unit_weight_kg.to_string()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                        form.update(|f| f.unit_weight_kg = value);
                                    }
                                />
                            </div>
                        </div>

                        <div class="form__group">
                            <Label>"Foto produk"</Label>
                            <label class="upload-button">
                                {icon("upload")}
                                {move || if uploading.get() { " Mengunggah..." } else { " Pilih foto (maks. 10 MB)" }}
                                <input
                                    type="file"
                                    multiple=true
                                    accept="image/jpeg,image/png,image/webp"
                                    style="display: none;"
                                    on:change=on_files_picked
                                />
                            </label>
                            {move || {
                                file_checks
                                    .get()
                                    .into_iter()
                                    .filter(|check| !check.accepted)
                                    .map(|check| {
                                        view! {
                                            <div class="alert alert--warning">
                                                {format!(
                                                    "{}: {}",
                                                    check.name,
                                                    check.reason.unwrap_or_default(),
                                                )}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                            <ul class="image-list">
                                <For
                                    each=move || form.get().images
                                    key=|url| url.clone()
                                    children=move |url| {
                                        let vm_remove = vm_remove.clone();
                                        let url_for_remove = url.clone();
                                        view! {
                                            <li class="image-list__item">
                                                <span>{url.clone()}</span>
                                                <button
                                                    class="image-list__remove"
                                                    title="Hapus foto"
                                                    on:click=move |_| {
                                                        vm_remove.remove_image(url_for_remove.clone())
                                                    }
                                                >
                                                    {icon("x")}
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>

                        {move || {
                            enrichment
                                .get()
                                .map(|data| {
                                    view! {
                                        <div class="info-card">
                                            <h3 class="info-card__title">"Pengayaan otomatis"</h3>
                                            <dl>
                                                <dt>"Kode HS"</dt>
                                                <dd>{data.hs_code.unwrap_or_else(|| "-".to_string())}</dd>
                                                <dt>"SKU"</dt>
                                                <dd>{data.sku.unwrap_or_else(|| "-".to_string())}</dd>
                                                <dt>"Deskripsi B2B"</dt>
                                                <dd>{data.b2b_description.unwrap_or_else(|| "-".to_string())}</dd>
                                            </dl>
                                        </div>
                                    }
                                })
                        }}

                        {move || {
                            costing
                                .get()
                                .map(|data| {
                                    let price = |value: Option<f64>| {
                                        value
                                            .map(|v| format!("USD {:.2}", v))
                                            .unwrap_or_else(|| "-".to_string())
                                    };
                                    view! {
                                        <div class="info-card">
                                            <h3 class="info-card__title">"Estimasi harga ekspor"</h3>
                                            <dl>
                                                <dt>"EXW"</dt>
                                                <dd>{price(data.exw_usd)}</dd>
                                                <dt>"FOB"</dt>
                                                <dd>{price(data.fob_usd)}</dd>
                                                <dt>"CIF"</dt>
                                                <dd>{price(data.cif_usd)}</dd>
                                            </dl>
                                        </div>
                                    }
                                })
                        }}

                        <div class="form__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=on_save
                                disabled=Signal::derive(move || uploading.get())
                            >
                                "Simpan"
                            </Button>
                        </div>
                </div>
            </div>
        </div>
    }
}
