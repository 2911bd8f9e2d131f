use contracts::domain::a003_product::aggregate::{ExportCosting, ProductDto, ProductEnrichment};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use std::rc::Rc;

use crate::domain::a003_product::api;
use crate::shared::forms::completion_percent;
use crate::shared::upload::{validate_file, FileCheck, FileMeta, UploadKind};

/// ViewModel for the product details form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub enrichment: RwSignal<Option<ProductEnrichment>>,
    pub costing: RwSignal<Option<ExportCosting>>,
    pub error: RwSignal<Option<String>>,
    pub success_message: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
    pub file_checks: RwSignal<Vec<FileCheck>>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            enrichment: RwSignal::new(None),
            costing: RwSignal::new(None),
            error: RwSignal::new(None),
            success_message: RwSignal::new(None),
            loading: RwSignal::new(false),
            uploading: RwSignal::new(false),
            file_checks: RwSignal::new(Vec::new()),
        }
    }

    /// Required-field predicates for the completion gate. Creation is
    /// blocked below 100%; editing is not gated.
    pub fn completion_checks(dto: &ProductDto) -> Vec<bool> {
        vec![
            !dto.name.trim().is_empty(),
            !dto.description.trim().is_empty(),
            !dto.category.trim().is_empty(),
            dto.price_idr > 0.0,
            dto.min_order_qty >= 1,
            dto.unit_weight_kg > 0.0,
        ]
    }

    pub fn completion(&self) -> u8 {
        completion_percent(&Self::completion_checks(&self.form.get()))
    }

    fn validate_form(dto: &ProductDto) -> Result<(), &'static str> {
        if dto.name.trim().is_empty() {
            return Err("Nama produk wajib diisi");
        }
        if dto.category.trim().is_empty() {
            return Err("Kategori wajib dipilih");
        }
        if dto.price_idr <= 0.0 {
            return Err("Harga harus lebih dari nol");
        }
        if dto.min_order_qty < 1 {
            return Err("Minimum order harus minimal 1");
        }
        if dto.unit_weight_kg <= 0.0 {
            return Err("Berat per unit harus lebih dari nol");
        }
        Ok(())
    }

    /// Load form data from the server if an id is present in the route
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let enrichment = self.enrichment;
        let costing = self.costing;
        let error = self.error;
        let loading = self.loading;

        loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(product) => {
                    form.set(ProductDto::from_product(&product));
                    enrichment.set(product.enrichment);
                    costing.set(product.costing);
                }
                Err(e) => {
                    error.set(Some(format!("Gagal memuat produk: {}", e)));
                }
            }
            loading.set(false);
        });
    }

    /// Save form data to the server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if current.id.is_none() {
            let completion = completion_percent(&Self::completion_checks(&current));
            if completion < 100 {
                self.error.set(Some(format!(
                    "Lengkapi formulir terlebih dahulu ({}%)",
                    completion
                )));
                return;
            }
        }
        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let error = self.error;
        let success = self.success_message;
        spawn_local(async move {
            match api::save(&current).await {
                Ok(_) => {
                    success.set(Some("Produk tersimpan".to_string()));
                    error.set(None);
                    (on_saved)(());
                }
                Err(e) => error.set(Some(format!("Gagal menyimpan: {}", e))),
            }
        });
    }

    /// Validate a picked file selection and upload the accepted ones.
    /// Rejected files only get an inline message; they never block the
    /// rest of the batch.
    pub fn upload_images(&self, files: Vec<web_sys::File>) {
        let form = self.form;
        let error = self.error;
        let uploading = self.uploading;
        let file_checks = self.file_checks;

        let checks: Vec<FileCheck> = files
            .iter()
            .map(|file| {
                validate_file(
                    &FileMeta {
                        name: file.name(),
                        mime: file.type_(),
                        size: file.size() as u64,
                    },
                    UploadKind::ProductImage,
                )
            })
            .collect();
        let accepted: Vec<web_sys::File> = files
            .into_iter()
            .zip(checks.iter())
            .filter(|(_, check)| check.accepted)
            .map(|(file, _)| file)
            .collect();
        file_checks.set(checks);

        if accepted.is_empty() {
            return;
        }
        uploading.set(true);
        spawn_local(async move {
            for file in accepted {
                match api::upload_image(&file).await {
                    Ok(url) if !url.is_empty() => {
                        form.update(|f| f.images.push(url));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("image upload failed: {}", e);
                        error.set(Some(format!("Gagal mengunggah {}: {}", file.name(), e)));
                    }
                }
            }
            uploading.set(false);
        });
    }

    pub fn remove_image(&self, url: String) {
        self.form.update(|f| f.images.retain(|image| image != &url));
    }
}
