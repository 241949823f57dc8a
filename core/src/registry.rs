//! Sources of raw registry text.
//!
//! The conversion only depends on [`RegistrySource`]; the HTTP and file
//! adapters below are the two ways the CLI can satisfy it.

use std::path::PathBuf;
use std::time::Duration;

use ouisql_common::config::{Config, Source};
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::FetchError;

/// Defines the contract for obtaining the vendor registry as text.
pub trait RegistrySource {
    /// Retrieves the full registry body.
    ///
    /// Invalid UTF-8 is replaced, never reported. Any transport or status
    /// failure is returned as-is; there is no retry.
    fn fetch(&self) -> Result<String, FetchError>;

    /// Human readable location, used in log lines.
    fn location(&self) -> String;
}

/// Decodes a registry body, substituting U+FFFD for invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Fetches the registry with a single blocking GET.
pub struct HttpRegistry {
    client: Client,
    url: String,
}

impl HttpRegistry {
    /// Builds a client that identifies itself with `user_agent`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(url: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl RegistrySource for HttpRegistry {
    fn fetch(&self) -> Result<String, FetchError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().map_err(|source| FetchError::Request {
            url: self.url.clone(),
            source,
        })?;

        debug!("received {} bytes", body.len());
        Ok(decode_lossy(&body))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Reads a registry that was downloaded ahead of time.
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegistrySource for FileRegistry {
    fn fetch(&self) -> Result<String, FetchError> {
        let bytes = std::fs::read(&self.path).map_err(|source| FetchError::File {
            path: self.path.clone(),
            source,
        })?;
        Ok(decode_lossy(&bytes))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the adapter matching the configured source.
pub fn from_config(cfg: &Config) -> Result<Box<dyn RegistrySource>, FetchError> {
    match &cfg.source {
        Source::Remote { url } => Ok(Box::new(HttpRegistry::new(
            url,
            &cfg.user_agent,
            cfg.timeout,
        )?)),
        Source::File { path } => Ok(Box::new(FileRegistry::new(path.clone()))),
    }
}
