//! Client-side validation of files before multipart submission.
//!
//! Files are checked one by one; a rejected file never blocks the rest
//! of its batch. Messages are shown inline next to the file name.

pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for product images.
pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// MIME types accepted for article/document attachments.
pub const DOCUMENT_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/webp",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProductImage,
    Attachment,
}

impl UploadKind {
    fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::ProductImage => IMAGE_MIME_TYPES,
            UploadKind::Attachment => DOCUMENT_MIME_TYPES,
        }
    }
}

/// Name, MIME type and byte size of a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Per-file verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub name: String,
    pub accepted: bool,
    pub reason: Option<String>,
}

pub fn validate_file(file: &FileMeta, kind: UploadKind) -> FileCheck {
    if file.size > MAX_FILE_SIZE_BYTES {
        return FileCheck {
            name: file.name.clone(),
            accepted: false,
            reason: Some("Ukuran file melebihi batas 10 MB".to_string()),
        };
    }
    if !kind.allowed_types().contains(&file.mime.as_str()) {
        return FileCheck {
            name: file.name.clone(),
            accepted: false,
            reason: Some(format!("Jenis file tidak didukung: {}", file.mime)),
        };
    }
    FileCheck {
        name: file.name.clone(),
        accepted: true,
        reason: None,
    }
}

/// Validate a whole selection. Order is preserved; each file is judged
/// independently.
pub fn validate_batch(files: &[FileMeta], kind: UploadKind) -> Vec<FileCheck> {
    files.iter().map(|file| validate_file(file, kind)).collect()
}

/// Read metadata out of a DOM file list.
pub fn collect_file_list(list: &web_sys::FileList) -> Vec<FileMeta> {
    let mut files = Vec::new();
    for index in 0..list.length() {
        if let Some(file) = list.item(index) {
            files.push(FileMeta {
                name: file.name(),
                mime: file.type_(),
                size: file.size() as u64,
            });
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, mime: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
        }
    }

    #[test]
    fn accepts_image_under_the_ceiling() {
        let check = validate_file(&meta("foto.jpg", "image/jpeg", 512 * 1024), UploadKind::ProductImage);
        assert!(check.accepted);
        assert!(check.reason.is_none());
    }

    #[test]
    fn rejects_oversized_file() {
        let check = validate_file(
            &meta("besar.png", "image/png", MAX_FILE_SIZE_BYTES + 1),
            UploadKind::ProductImage,
        );
        assert!(!check.accepted);
        assert!(check.reason.unwrap().contains("10 MB"));
    }

    #[test]
    fn rejects_disallowed_mime_for_images() {
        let check = validate_file(&meta("video.mp4", "video/mp4", 1024), UploadKind::ProductImage);
        assert!(!check.accepted);
    }

    #[test]
    fn attachments_accept_pdf_but_images_do_not() {
        let pdf = meta("katalog.pdf", "application/pdf", 1024);
        assert!(validate_file(&pdf, UploadKind::Attachment).accepted);
        assert!(!validate_file(&pdf, UploadKind::ProductImage).accepted);
    }

    #[test]
    fn one_rejected_file_does_not_block_the_batch() {
        let files = vec![
            meta("a.jpg", "image/jpeg", 100),
            meta("b.exe", "application/octet-stream", 100),
            meta("c.png", "image/png", 100),
        ];
        let checks = validate_batch(&files, UploadKind::ProductImage);
        assert_eq!(checks.len(), 3);
        assert!(checks[0].accepted);
        assert!(!checks[1].accepted);
        assert!(checks[2].accepted);
    }
}
