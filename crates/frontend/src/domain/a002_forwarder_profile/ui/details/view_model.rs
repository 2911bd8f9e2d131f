use contracts::domain::a002_forwarder_profile::aggregate::ForwarderProfileDto;
use contracts::shared::vocab::SERVICE_TYPES;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::forms::{completion_percent, FieldSelection, RowList};

/// ViewModel for the forwarder profile form
#[derive(Clone)]
pub struct ForwarderProfileViewModel {
    pub form: RwSignal<ForwarderProfileDto>,
    /// Checkbox/custom-row state of `service_types`.
    pub service_types: RwSignal<FieldSelection>,
    /// Free-text route rows ("Surabaya - Rotterdam").
    pub coverage_routes: RwSignal<RowList>,
    pub error: RwSignal<Option<String>>,
    pub success_message: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub no_profile_yet: RwSignal<bool>,
}

impl ForwarderProfileViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ForwarderProfileDto::default()),
            service_types: RwSignal::new(FieldSelection::empty()),
            coverage_routes: RwSignal::new(RowList::seeded()),
            error: RwSignal::new(None),
            success_message: RwSignal::new(None),
            loading: RwSignal::new(false),
            no_profile_yet: RwSignal::new(false),
        }
    }

    pub fn completion(&self) -> u8 {
        let dto = self.form.get();
        let checks = [
            !dto.company_name.trim().is_empty(),
            !dto.contact_name.trim().is_empty(),
            self.service_types.with(|s| s.has_any()),
            self.coverage_routes.with(|r| r.has_content()),
        ];
        completion_percent(&checks)
    }

    pub fn load(&self) {
        let form = self.form;
        let service_types = self.service_types;
        let coverage_routes = self.coverage_routes;
        let error = self.error;
        let loading = self.loading;
        let no_profile_yet = self.no_profile_yet;

        loading.set(true);
        spawn_local(async move {
            match model::fetch_my_profile().await {
                Ok(Some(profile)) => {
                    service_types
                        .set(FieldSelection::split(&profile.service_types, SERVICE_TYPES));
                    coverage_routes.set(RowList::from_values(profile.coverage_routes.clone()));
                    form.set(ForwarderProfileDto::from_profile(&profile));
                    no_profile_yet.set(false);
                }
                Ok(None) => {
                    no_profile_yet.set(true);
                }
                Err(e) => {
                    error.set(Some(format!("Gagal memuat profil: {}", e)));
                }
            }
            loading.set(false);
        });
    }

    fn validate(dto: &ForwarderProfileDto) -> Result<(), &'static str> {
        if dto.company_name.trim().is_empty() {
            return Err("Nama perusahaan wajib diisi");
        }
        if dto.contact_name.trim().is_empty() {
            return Err("Nama kontak wajib diisi");
        }
        if dto.service_types.is_empty() {
            return Err("Pilih minimal satu jenis layanan");
        }
        Ok(())
    }

    pub fn save_command(&self) {
        let mut dto = self.form.get();
        dto.service_types = self.service_types.with(|s| s.merge(SERVICE_TYPES));
        dto.coverage_routes = self.coverage_routes.with(|r| r.non_empty_values());

        if dto.id.is_none() && self.completion() < 100 {
            self.error.set(Some(format!(
                "Profil belum lengkap ({}%). Lengkapi semua bagian sebelum mengirim.",
                self.completion()
            )));
            return;
        }
        if let Err(msg) = Self::validate(&dto) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let form = self.form;
        let error = self.error;
        let success = self.success_message;
        let no_profile_yet = self.no_profile_yet;
        spawn_local(async move {
            match model::save(&dto).await {
                Ok(saved) => {
                    form.update(|f| f.id = saved.id.clone());
                    no_profile_yet.set(false);
                    error.set(None);
                    success.set(Some("Profil forwarder tersimpan".to_string()));
                    TimeoutFuture::new(3_000).await;
                    success.set(None);
                }
                Err(e) => {
                    error.set(Some(format!("Gagal menyimpan profil: {}", e)));
                }
            }
        });
    }
}
