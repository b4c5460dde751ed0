use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// One airline record as the backend stores it.
///
/// `id` is server-assigned and immutable; `image` is a URL reference on
/// the read side (uploads travel as [`ImageFile`] payloads instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: String,
    pub code: String,
    pub name: String,
    pub terminal: String,
    #[serde(default)]
    pub image: String,
}

/// Write-side payload for create and update calls. Carries no `id`; the
/// target record is addressed by the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct AirlineDraft {
    pub code: String,
    pub name: String,
    pub terminal: String,
    /// `Some` only when the operator actually picked a file. Leaving it
    /// `None` keeps the stored image untouched on update.
    pub image: Option<ImageFile>,
}

/// An image file staged for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Reads the file at `path` and sniffs its format from the magic
    /// bytes. Unreadable files and unrecognized formats are rejected
    /// before anything goes on the wire.
    pub fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = fs::read(path)
            .map_err(|e| ClientError::InvalidImage(format!("{}: {}", path.display(), e)))?;
        let format = image::guess_format(&bytes).map_err(|_| {
            ClientError::InvalidImage(format!("{}: unrecognized image format", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            file_name,
            mime: format.to_mime_type().to_string(),
            bytes,
        })
    }
}

/// Envelope for `GET /airlines`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    pub data: Vec<Airline>,
}

/// Envelope for the single-record responses of create and update.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordResponse {
    pub data: Airline,
}
