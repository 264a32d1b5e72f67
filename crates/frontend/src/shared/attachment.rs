//! Файлы, выбранные в форме, и их превью.

use crate::shared::http::ApiError;

/// An image or video attached to a draft: either a freshly picked file with a blob preview,
/// or the URL of a file the server already stores.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub preview_url: String,
    file: Option<web_sys::File>,
}

impl Attachment {
    /// Creates the local preview URL right away, before anything is uploaded.
    pub fn from_file(file: web_sys::File) -> Result<Self, ApiError> {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file)
            .map_err(|e| ApiError::Encode(format!("object URL: {:?}", e)))?;
        Ok(Self {
            file_name: file.name(),
            preview_url,
            file: Some(file),
        })
    }

    pub fn remote(url: impl Into<String>) -> Self {
        let url = url.into();
        let file_name = url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            file_name,
            preview_url: url,
            file: None,
        }
    }

    pub fn is_local(&self) -> bool {
        self.file.is_some()
    }

    /// File to upload; `None` for already stored files.
    pub fn file(&self) -> Option<&web_sys::File> {
        self.file.as_ref()
    }

    pub fn revoke(&self) {
        if self.file.is_some() {
            if let Err(e) = web_sys::Url::revoke_object_url(&self.preview_url) {
                log::debug!("revoke {} failed: {:?}", self.preview_url, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_attachment() {
        let a = Attachment::remote("https://cdn.example.com/ads/summer-sale.png?v=2");
        assert_eq!(a.file_name, "summer-sale.png");
        assert!(!a.is_local());
        assert!(a.file().is_none());
        // no blob to release
        a.revoke();
    }
}
