use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Production endpoint of the Google Cloud Text-to-Speech REST API.
pub const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com";

/// Credentials taken from the execution environment. The program never
/// acquires or refreshes them itself.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Sent as the `x-goog-api-key` header.
    ApiKey(String),
    /// Sent as a bearer token, eg. from
    /// `gcloud auth application-default print-access-token`.
    AccessToken(String),
}

impl Credentials {
    /// Read credentials from `GOOGLE_API_KEY`, falling back to
    /// `GOOGLE_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            if !key.is_empty() {
                return Ok(Credentials::ApiKey(key));
            }
        }
        if let Ok(token) = std::env::var("GOOGLE_ACCESS_TOKEN") {
            if !token.is_empty() {
                return Ok(Credentials::AccessToken(token));
            }
        }
        Err(Error::MissingCredentials)
    }
}

/// Thin client over the remote service. One instance per invocation,
/// no state beyond the endpoint and credentials.
pub struct TtsClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl TtsClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_ENDPOINT)
    }

    /// Point the client at a different endpoint. Tests use this to talk
    /// to a local mock server.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Credentials::ApiKey(key) => request.header("x-goog-api-key", key),
            Credentials::AccessToken(token) => request.bearer_auth(token),
        }
    }

    /// Turn a non-2xx reply into a `Service` error carrying the service's
    /// own message, decoded from the standard Google error envelope when
    /// the body has one.
    pub(crate) async fn error_for(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return Error::Transport(err),
        };
        debug!(status, "service returned an error body");
        Error::Service {
            status,
            message: service_message(&body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn service_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_owned(),
    }
}
