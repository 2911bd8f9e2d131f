use leptos::prelude::*;
use thaw::*;

use crate::shared::forms::{FieldSelection, RowList};
use crate::shared::icons::icon;

/// Checkbox block for a closed vocabulary plus free-text "Lainnya" rows,
/// backed by one [`FieldSelection`].
#[component]
pub fn FieldSelectionEditor(
    #[prop(into)] label: String,
    vocabulary: &'static [&'static str],
    selection: RwSignal<FieldSelection>,
) -> impl IntoView {
    view! {
        <div class="field-selection">
            <span class="field-selection__label">{label}</span>
            <div class="field-selection__options">
                {vocabulary
                    .iter()
                    .map(|&value| {
                        view! {
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.with(|s| s.is_selected(value))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selection.update(|s| s.toggle(value, checked));
                                    }
                                />
                                <span>{value}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="field-selection__custom">
                <span class="field-selection__custom-label">"Lainnya"</span>
                <CustomRowsEditor rows=Signal::derive(move || selection.with(|s| s.custom.clone()))
                    on_update=Callback::new(move |(id, value)| {
                        selection.update(|s| s.custom.update_row(id, value));
                    })
                    on_remove=Callback::new(move |id| {
                        selection.update(|s| s.custom.remove_row(id));
                    })
                    on_add=Callback::new(move |_: ()| {
                        selection.update(|s| s.custom.add_row());
                    })
                />
            </div>
        </div>
    }
}

/// Editable list of free-text rows. The backing [`RowList`] guarantees at
/// least one row, so the section never renders without an input.
#[component]
pub fn CustomRowsEditor(
    #[prop(into)] rows: Signal<RowList>,
    on_update: Callback<(uuid::Uuid, String)>,
    on_remove: Callback<uuid::Uuid>,
    on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="custom-rows">
            <For
                each=move || rows.get().rows().to_vec()
                key=|row| row.id
                children=move |row| {
                    let row_id = row.id;
                    view! {
                        <div class="custom-rows__row">
                            <input
                                class="form__input"
                                prop:value=row.value.clone()
                                on:input=move |ev| {
                                    on_update.run((row_id, event_target_value(&ev)));
                                }
                            />
                            <button
                                class="custom-rows__remove"
                                title="Hapus baris"
                                on:click=move |_| on_remove.run(row_id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_add.run(())>
                {icon("plus")}
                " Tambah baris"
            </Button>
        </div>
    }
}
