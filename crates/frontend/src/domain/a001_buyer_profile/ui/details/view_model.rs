use contracts::domain::a001_buyer_profile::aggregate::BuyerProfileDto;
use contracts::shared::vocab::{BUSINESS_TYPES, PRODUCT_CATEGORIES};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::forms::{completion_percent, FieldSelection};

/// Wizard steps of the buyer profile form.
pub const STEP_COMPANY: usize = 1;
pub const STEP_SOURCING: usize = 2;

/// ViewModel for the buyer profile wizard
#[derive(Clone)]
pub struct BuyerProfileViewModel {
    pub form: RwSignal<BuyerProfileDto>,
    /// Checkbox/custom-row state of `business_types`.
    pub business_types: RwSignal<FieldSelection>,
    /// Checkbox/custom-row state of `target_categories`.
    pub target_categories: RwSignal<FieldSelection>,
    pub step: RwSignal<usize>,
    pub error: RwSignal<Option<String>>,
    pub success_message: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// 404 on load: show the call-to-action instead of an error banner.
    pub no_profile_yet: RwSignal<bool>,
}

impl BuyerProfileViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BuyerProfileDto::default()),
            business_types: RwSignal::new(FieldSelection::empty()),
            target_categories: RwSignal::new(FieldSelection::empty()),
            step: RwSignal::new(STEP_COMPANY),
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
            !dto.country.trim().is_empty(),
            self.business_types.with(|s| s.has_any()),
            self.target_categories.with(|s| s.has_any()),
        ];
        completion_percent(&checks)
    }

    /// Load the stored profile and split its array fields into checkbox
    /// selections plus custom rows.
    pub fn load(&self) {
        let form = self.form;
        let business_types = self.business_types;
        let target_categories = self.target_categories;
        let error = self.error;
        let loading = self.loading;
        let no_profile_yet = self.no_profile_yet;

        loading.set(true);
        spawn_local(async move {
            match model::fetch_my_profile().await {
                Ok(Some(profile)) => {
                    business_types
                        .set(FieldSelection::split(&profile.business_types, BUSINESS_TYPES));
                    target_categories.set(FieldSelection::split(
                        &profile.target_categories,
                        PRODUCT_CATEGORIES,
                    ));
                    form.set(BuyerProfileDto::from_profile(&profile));
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

    fn validate(dto: &BuyerProfileDto) -> Result<(), &'static str> {
        if dto.company_name.trim().is_empty() {
            return Err("Nama perusahaan wajib diisi");
        }
        if dto.contact_name.trim().is_empty() {
            return Err("Nama kontak wajib diisi");
        }
        if dto.country.trim().is_empty() {
            return Err("Negara wajib diisi");
        }
        if dto.business_types.is_empty() {
            return Err("Pilih minimal satu jenis usaha");
        }
        Ok(())
    }

    /// Merge the checkbox/custom-row state back into the DTO and save.
    pub fn save_command(&self) {
        let mut dto = self.form.get();
        dto.business_types = self.business_types.with(|s| s.merge(BUSINESS_TYPES));
        dto.target_categories = self.target_categories.with(|s| s.merge(PRODUCT_CATEGORIES));

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
                    success.set(Some("Profil pembeli tersimpan".to_string()));
                    TimeoutFuture::new(3_000).await;
                    success.set(None);
                }
                Err(e) => {
                    error.set(Some(format!("Gagal menyimpan profil: {}", e)));
                }
            }
        });
    }

    pub fn next_step(&self) {
        self.step.update(|s| *s = (*s + 1).min(STEP_SOURCING));
    }

    pub fn previous_step(&self) {
        self.step.update(|s| *s = s.saturating_sub(1).max(STEP_COMPANY));
    }
}
