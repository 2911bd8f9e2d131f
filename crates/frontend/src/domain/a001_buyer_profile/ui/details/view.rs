use contracts::shared::vocab::{BUSINESS_TYPES, PRODUCT_CATEGORIES};
use leptos::prelude::*;
use thaw::*;

use super::view_model::{BuyerProfileViewModel, STEP_COMPANY, STEP_SOURCING};
use crate::shared::components::completion_bar::CompletionBar;
use crate::shared::components::field_selection_editor::FieldSelectionEditor;
use crate::system::auth::guard::RequireBuyer;

#[component]
pub fn BuyerProfilePage() -> impl IntoView {
    view! {
        <RequireBuyer>
            <BuyerProfileForm />
        </RequireBuyer>
    }
}

#[component]
fn BuyerProfileForm() -> impl IntoView {
    let vm = BuyerProfileViewModel::new();

    let form = vm.form;
    let business_types = vm.business_types;
    let target_categories = vm.target_categories;
    let step = vm.step;
    let error = vm.error;
    let success_message = vm.success_message;
    let loading = vm.loading;
    let no_profile_yet = vm.no_profile_yet;

    {
        let vm_load = vm.clone();
        Effect::new(move |_| {
            vm_load.load();
        });
    }

    let completion = {
        let vm_completion = vm.clone();
        Signal::derive(move || vm_completion.completion())
    };

    let vm_save = vm.clone();
    let on_save = move |_| vm_save.save_command();
    let vm_next = vm.clone();
    let on_next = move |_| vm_next.next_step();
    let vm_prev = vm.clone();
    let on_previous = move |_| vm_prev.previous_step();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Profil Pembeli"</h1>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || success_message.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}
                {move || loading.get().then(|| view! { <p class="page__loading">"Memuat..."</p> })}

                {move || {
                    no_profile_yet
                        .get()
                        .then(|| view! {
                            <div class="alert alert--info">
                                "Anda belum memiliki profil pembeli. Lengkapi formulir di bawah agar "
                                "UMKM dapat menemukan Anda."
                            </div>
                        })
                }}

                <CompletionBar percent=completion />

                <div class="wizard__steps">
                    <span
                        class="wizard__step"
                        class=("wizard__step--active", move || step.get() == STEP_COMPANY)
                    >
                        "1. Data perusahaan"
                    </span>
                    <span
                        class="wizard__step"
                        class=("wizard__step--active", move || step.get() == STEP_SOURCING)
                    >
                        "2. Preferensi sourcing"
                    </span>
                </div>

                <div
                    class="form"
                    style:display=move || if step.get() == STEP_COMPANY { "block" } else { "none" }
                >
                    <div class="form__group">
                        <Label>"Nama perusahaan"</Label>
                        <input
                            class="form__input"
                            prop:value=move || form.get().company_name
                            on:input=move |ev| {
                                form.update(|f| f.company_name = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Nama kontak"</Label>
                            <input
                                class="form__input"
                                prop:value=move || form.get().contact_name
                                on:input=move |ev| {
                                    form.update(|f| f.contact_name = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Negara"</Label>
                            <input
                                class="form__input"
                                prop:value=move || form.get().country
                                on:input=move |ev| {
                                    form.update(|f| f.country = event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Email"</Label>
                            <input
                                class="form__input"
                                type="email"
                                prop:value=move || form.get().email.unwrap_or_default()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        f.email = (!value.trim().is_empty()).then_some(value)
                                    });
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Telepon"</Label>
                            <input
                                class="form__input"
                                prop:value=move || form.get().phone.unwrap_or_default()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        f.phone = (!value.trim().is_empty()).then_some(value)
                                    });
                                }
                            />
                        </div>
                    </div>
                    <div class="form__group">
                        <Label>"Situs web"</Label>
                        <input
                            class="form__input"
                            prop:value=move || form.get().website.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.website = (!value.trim().is_empty()).then_some(value)
                                });
                            }
                        />
                    </div>
                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=on_next>
                            "Berikutnya"
                        </Button>
                    </div>
                </div>

                <div
                    class="form"
                    style:display=move || if step.get() == STEP_SOURCING { "block" } else { "none" }
                >
                    <FieldSelectionEditor
                        label="Jenis usaha"
                        vocabulary=BUSINESS_TYPES
                        selection=business_types
                    />
                    <FieldSelectionEditor
                        label="Kategori produk yang dicari"
                        vocabulary=PRODUCT_CATEGORIES
                        selection=target_categories
                    />
                    <div class="form__group">
                        <Label>"Perkiraan volume tahunan (USD)"</Label>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            prop:value=move || {
                                form.get()
                                    .annual_volume_usd
                                    .map(|v| v.to_string())
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse::<f64>().ok();
                                form.update(|f| f.annual_volume_usd = value);
                            }
                        />
                    </div>
                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=on_previous>
                            "Sebelumnya"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            {move || if form.get().id.is_some() { "Simpan perubahan" } else { "Kirim profil" }}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
