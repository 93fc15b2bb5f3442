//! Upload Handling
//!
//! Raw upload bytes become inline data URIs before they enter a store. The
//! size cap keeps single values small enough for a key-value backend with
//! limited capacity.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::domain::{BriefReference, DomainError, DomainResult, MAX_UPLOAD_BYTES};

use super::ids::next_id;

/// An incoming file, as handed over by the UI shell
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    /// MIME type reported by the shell, if any
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime,
            bytes,
        }
    }

    /// Reject uploads the local store cannot reasonably hold
    pub fn ensure_within_cap(&self) -> DomainResult<()> {
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(DomainError::InvalidInput(format!(
                "'{}' is too large for local storage ({} KB limit)",
                self.name,
                MAX_UPLOAD_BYTES / 1024
            )));
        }
        Ok(())
    }

    /// Reported MIME type, falling back to a guess from the file name
    pub fn resolved_mime(&self) -> String {
        match self.mime.as_deref() {
            Some(mime) if !mime.is_empty() => mime.to_string(),
            _ => mime_guess::from_path(&self.name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        }
    }

    /// Full content as a `data:` URI
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.resolved_mime(),
            STANDARD.encode(&self.bytes)
        )
    }

    /// Human-readable size, e.g. "12.4 KB"
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.bytes.len() as f64 / 1024.0)
    }

    /// Turn the upload into a brief attachment
    pub fn into_brief_reference(self) -> DomainResult<BriefReference> {
        self.ensure_within_cap()?;
        Ok(BriefReference {
            id: next_id(),
            mime: self.resolved_mime(),
            url: self.data_uri(),
            name: self.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_rejects_oversized_upload() {
        let upload = FileUpload::new("huge.psd", None, vec![0u8; MAX_UPLOAD_BYTES + 1]);
        assert!(matches!(
            upload.ensure_within_cap(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mime_guessed_from_name() {
        let upload = FileUpload::new("logo.png", None, vec![1, 2, 3]);
        assert_eq!(upload.resolved_mime(), "image/png");
    }

    #[test]
    fn test_reported_mime_wins() {
        let upload = FileUpload::new("logo.png", Some("image/webp".into()), vec![]);
        assert_eq!(upload.resolved_mime(), "image/webp");
    }

    #[test]
    fn test_data_uri_shape() {
        let upload = FileUpload::new("a.txt", Some("text/plain".into()), b"hey".to_vec());
        assert_eq!(upload.data_uri(), "data:text/plain;base64,aGV5");
    }

    #[test]
    fn test_display_size() {
        let upload = FileUpload::new("a.bin", None, vec![0u8; 1536]);
        assert_eq!(upload.display_size(), "1.5 KB");
    }
}
