use std::env;
use std::fmt::{self, Display};
use std::path::PathBuf;

use client::auth::CookieFile;
use client::{Airline, AirlineDraft, ClientError, SkyFlyClient};
use logger::Logger;

/// Backend root used when `SKYFLY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://backend-skyfly-c1.vercel.app/api/v1";

const DEFAULT_COOKIE_FILE: &str = "cookies.txt";
const LOGGER_APP: &str = "skyfly_admin";

// One page is enough for the whole airlines table; the backend caps the
// fleet far below this.
const LIST_LIMIT: u32 = 5000;

/// Error surfaced to the view when a backend operation fails.
#[derive(Debug, Clone)]
pub struct ApiError(String);

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiError {}

/// A trait that defines the required methods for a provider to manage
/// airline data. Implemented by any structure that talks to the backend
/// on behalf of the graphical interface.
pub trait Provider {
    fn get_airlines(&mut self) -> Result<Vec<Airline>, ApiError>;

    fn add_airline(&mut self, draft: &AirlineDraft) -> Result<Airline, ApiError>;

    fn update_airline(&mut self, id: &str, draft: &AirlineDraft) -> Result<Airline, ApiError>;

    fn delete_airline(&mut self, id: &str) -> Result<(), ApiError>;
}

/// The production provider: wraps the REST client and writes every
/// failure to the diagnostics log before handing it to the view.
pub struct Api {
    client: SkyFlyClient,
    logger: Logger,
}

impl Api {
    /// Builds the provider from the environment.
    ///
    /// - `SKYFLY_API_URL`: backend root, defaults to [`DEFAULT_API_URL`].
    /// - `SKYFLY_COOKIE_FILE`: cookie store holding `_token`, defaults to
    ///   `cookies.txt` in the working directory.
    /// - `SKYFLY_LOG_DIR`: where the log file goes, defaults to the
    ///   working directory.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var("SKYFLY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let cookie_file =
            env::var("SKYFLY_COOKIE_FILE").unwrap_or_else(|_| DEFAULT_COOKIE_FILE.to_string());
        let log_dir = env::var("SKYFLY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let client = SkyFlyClient::connect(base_url, Box::new(CookieFile::new(cookie_file)))
            .map_err(|err| ApiError::new(format!("Could not set up the backend client: {}", err)))?;
        let logger = Logger::new(&log_dir, LOGGER_APP)
            .map_err(|err| ApiError::new(format!("Could not set up logging: {}", err)))?;

        Ok(Self { client, logger })
    }

    fn report(&self, operation: &str, err: ClientError) -> ApiError {
        let message = format!("{} failed: {}", operation, err);
        let _ = self.logger.error(&message, true);
        ApiError::new(message)
    }
}

impl Provider for Api {
    fn get_airlines(&mut self) -> Result<Vec<Airline>, ApiError> {
        self.client
            .get_airlines(LIST_LIMIT)
            .map_err(|err| self.report("Fetch airlines", err))
    }

    fn add_airline(&mut self, draft: &AirlineDraft) -> Result<Airline, ApiError> {
        self.client
            .create_airline(draft)
            .map_err(|err| self.report("Create airline", err))
    }

    fn update_airline(&mut self, id: &str, draft: &AirlineDraft) -> Result<Airline, ApiError> {
        self.client
            .update_airline(id, draft)
            .map_err(|err| self.report("Update airline", err))
    }

    fn delete_airline(&mut self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete_airline(id)
            .map_err(|err| self.report("Delete airline", err))
    }
}
