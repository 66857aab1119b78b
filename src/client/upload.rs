//! Image Upload Payloads
//!
//! Turns what the image picker hands back into the multipart body the
//! backend's upload endpoint expects (a single file under `archivo`).

use std::path::Path;

use reqwest::multipart::{Form, Part};
use thiserror::Error;

/// Multipart field name the backend reads the file from
pub const UPLOAD_FIELD: &str = "archivo";

const FILE_SCHEME: &str = "file://";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Platform the picker result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }
}

/// One picked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerAsset {
    pub uri: String,
    pub mime_type: Option<String>,
    pub file_name: Option<String>,
}

/// What the camera or gallery picker returned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerResult {
    pub did_cancel: bool,
    pub assets: Vec<PickerAsset>,
}

impl PickerResult {
    pub fn cancelled() -> Self {
        Self {
            did_cancel: true,
            assets: Vec::new(),
        }
    }

    /// A single local file, as picked from the desktop file field
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            did_cancel: false,
            assets: vec![PickerAsset {
                uri: format!("{}{}", FILE_SCHEME, path.display()),
                mime_type: mime_from_extension(path).map(str::to_string),
                file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
            }],
        }
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Image selection was cancelled")]
    Cancelled,

    #[error("No image was selected")]
    NoImageSelected,

    #[error("Failed to read image {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported image type: {0}")]
    InvalidMime(String),
}

/// Normalized description of the file to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File reference; the `file://` prefix is stripped on iOS only
    pub uri: String,
    pub mime_type: String,
    pub file_name: String,
}

impl UploadFile {
    /// Build from the first picked asset
    pub fn from_picker(result: &PickerResult, platform: Platform) -> Result<Self, UploadError> {
        if result.did_cancel {
            return Err(UploadError::Cancelled);
        }
        let asset = result.assets.first().ok_or(UploadError::NoImageSelected)?;

        let uri = match platform {
            Platform::Ios => asset.uri.replacen(FILE_SCHEME, "", 1),
            Platform::Android | Platform::Desktop => asset.uri.clone(),
        };
        let file_name = asset
            .file_name
            .clone()
            .or_else(|| {
                Path::new(local_path(&uri))
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = asset
            .mime_type
            .clone()
            .unwrap_or_else(|| FALLBACK_MIME.to_string());

        Ok(Self {
            uri,
            mime_type,
            file_name,
        })
    }

    /// Read the file and wrap it in a multipart form
    pub async fn into_form(self) -> Result<Form, UploadError> {
        let path = local_path(&self.uri).to_string();
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| UploadError::Read { path, source })?;

        let part = Part::bytes(bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|_| UploadError::InvalidMime(self.mime_type.clone()))?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

/// `file://` URI for previewing a picked path, when it names an existing image file
pub fn preview_uri(path: &str) -> Option<String> {
    let path = Path::new(local_path(path.trim()));
    mime_from_extension(path)?;
    if !path.is_file() {
        return None;
    }
    Some(format!("{}{}", FILE_SCHEME, path.display()))
}

/// Filesystem path behind a possibly `file://`-prefixed URI
fn local_path(uri: &str) -> &str {
    uri.strip_prefix(FILE_SCHEME).unwrap_or(uri)
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
