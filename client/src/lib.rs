pub mod auth;
mod errors;
mod types;

pub use errors::ClientError;
pub use types::{Airline, AirlineDraft, ImageFile};

use auth::TokenSource;
use tokio::runtime::{Builder, Runtime};
use types::{ListResponse, RecordResponse};
use wreq::header::AUTHORIZATION;
use wreq::multipart::{Form, Part};

/// Client for the SkyFly backend's airlines resource.
///
/// One method per backend operation, all synchronous: each call drives a
/// single HTTP request to completion on an internal current-thread
/// runtime and maps every failure into a [`ClientError`]. The bearer
/// token is read from the [`TokenSource`] on every call, never cached.
pub struct SkyFlyClient {
    http: wreq::Client,
    runtime: Runtime,
    base_url: String,
    tokens: Box<dyn TokenSource>,
}

impl SkyFlyClient {
    /// Creates a client for the backend at `base_url` (the `/api/v1`
    /// root, with or without a trailing slash).
    pub fn connect(
        base_url: impl Into<String>,
        tokens: Box<dyn TokenSource>,
    ) -> Result<Self, ClientError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|_| ClientError::Runtime)?;
        let http = wreq::Client::builder()
            .build()
            .map_err(|_| ClientError::Connection)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            runtime,
            base_url,
            tokens,
        })
    }

    /// Fetches up to `limit` airline records, in server order.
    pub fn get_airlines(&self, limit: u32) -> Result<Vec<Airline>, ClientError> {
        let url = format!("{}/airlines?limit={}", self.base_url, limit);
        let auth = self.bearer()?;

        self.runtime.block_on(async {
            let resp = self
                .http
                .get(&url)
                .header(AUTHORIZATION, auth.as_str())
                .send()
                .await
                .map_err(|_| ClientError::Connection)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(ClientError::Status(status.as_u16()));
            }
            let bytes = resp.bytes().await.map_err(|_| ClientError::Connection)?;
            let payload: ListResponse =
                serde_json::from_slice(&bytes).map_err(|_| ClientError::Deserialization)?;
            Ok(payload.data)
        })
    }

    /// Creates a new airline from `draft` and returns the stored record.
    pub fn create_airline(&self, draft: &AirlineDraft) -> Result<Airline, ClientError> {
        let url = format!("{}/airlines", self.base_url);
        self.send_record(self.http.post(&url), draft)
    }

    /// Replaces the airline identified by `id` with `draft` and returns
    /// the stored record.
    pub fn update_airline(&self, id: &str, draft: &AirlineDraft) -> Result<Airline, ClientError> {
        let url = format!("{}/airlines/{}", self.base_url, id);
        self.send_record(self.http.put(&url), draft)
    }

    /// Deletes the airline identified by `id`.
    pub fn delete_airline(&self, id: &str) -> Result<(), ClientError> {
        let url = format!("{}/airlines/{}", self.base_url, id);
        let auth = self.bearer()?;

        self.runtime.block_on(async {
            let resp = self
                .http
                .delete(&url)
                .header(AUTHORIZATION, auth.as_str())
                .send()
                .await
                .map_err(|_| ClientError::Connection)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(ClientError::Status(status.as_u16()));
            }
            Ok(())
        })
    }

    // Shared tail of create and update: multipart body in, one record out.
    fn send_record(
        &self,
        request: wreq::RequestBuilder,
        draft: &AirlineDraft,
    ) -> Result<Airline, ClientError> {
        let auth = self.bearer()?;
        let form = multipart_form(draft)?;

        self.runtime.block_on(async {
            let resp = request
                .header(AUTHORIZATION, auth.as_str())
                .multipart(form)
                .send()
                .await
                .map_err(|_| ClientError::Connection)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(ClientError::Status(status.as_u16()));
            }
            let bytes = resp.bytes().await.map_err(|_| ClientError::Connection)?;
            let payload: RecordResponse =
                serde_json::from_slice(&bytes).map_err(|_| ClientError::Deserialization)?;
            Ok(payload.data)
        })
    }

    fn bearer(&self) -> Result<String, ClientError> {
        match self.tokens.token() {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err(ClientError::MissingToken),
        }
    }
}

/// Packages a draft as the backend's multipart shape. The image part is
/// attached only when the draft actually carries a file.
fn multipart_form(draft: &AirlineDraft) -> Result<Form, ClientError> {
    let mut form = Form::new()
        .text("code", draft.code.clone())
        .text("name", draft.name.clone())
        .text("terminal", draft.terminal.clone());

    if let Some(image) = &draft.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)
            .map_err(|_| ClientError::InvalidImage(image.mime.clone()))?;
        form = form.part("image", part);
    }

    Ok(form)
}
