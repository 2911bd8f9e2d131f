use contracts::shared::vocab::SERVICE_TYPES;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ForwarderProfileViewModel;
use crate::shared::components::completion_bar::CompletionBar;
use crate::shared::components::field_selection_editor::{CustomRowsEditor, FieldSelectionEditor};
use crate::system::auth::guard::RequireForwarder;

#[component]
pub fn ForwarderProfilePage() -> impl IntoView {
    view! {
        <RequireForwarder>
            <ForwarderProfileForm />
        </RequireForwarder>
    }
}

#[component]
fn ForwarderProfileForm() -> impl IntoView {
    let vm = ForwarderProfileViewModel::new();

    let form = vm.form;
    let service_types = vm.service_types;
    let coverage_routes = vm.coverage_routes;
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

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Profil Forwarder"</h1>
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
                                "Anda belum memiliki profil forwarder. Lengkapi formulir di bawah "
                                "untuk mulai menerima permintaan pengiriman."
                            </div>
                        })
                }}

                <CompletionBar percent=completion />

                <div class="form">
                    <div class="form__row">
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
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Nomor lisensi (SIUJPT)"</Label>
                            <input
                                class="form__input"
                                prop:value=move || form.get().license_number.unwrap_or_default()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        f.license_number =
                                            (!value.trim().is_empty()).then_some(value)
                                    });
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Tahun berdiri"</Label>
                            <input
                                class="form__input"
                                type="number"
                                min="1900"
                                prop:value=move || {
                                    form.get()
                                        .year_established
                                        .map(|v| v.to_string())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).parse::<u32>().ok();
                                    form.update(|f| f.year_established = value);
                                }
                            />
                        </div>
                    </div>

                    <FieldSelectionEditor
                        label="Jenis layanan"
                        vocabulary=SERVICE_TYPES
                        selection=service_types
                    />

                    <div class="form__group">
                        <Label>"Rute yang dilayani"</Label>
                        <CustomRowsEditor
                            rows=Signal::derive(move || coverage_routes.get())
                            on_update=Callback::new(move |(id, value)| {
                                coverage_routes.update(|r| r.update_row(id, value));
                            })
                            on_remove=Callback::new(move |id| {
                                coverage_routes.update(|r| r.remove_row(id));
                            })
                            on_add=Callback::new(move |_: ()| {
                                coverage_routes.update(|r| r.add_row());
                            })
                        />
                    </div>

                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            {move || if form.get().id.is_some() { "Simpan perubahan" } else { "Kirim profil" }}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
