use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::TtsClient;
use crate::error::{Error, Result};

const VOICES_PATH: &str = "/v1/voices";

/// One selectable voice, as described by the service. Never constructed
/// locally.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub name: String,
    #[serde(default)]
    pub language_codes: Vec<String>,
    pub ssml_gender: Option<String>,
    #[serde(default)]
    pub natural_sample_rate_hertz: u32,
}

#[derive(Debug, Deserialize)]
struct ListVoicesResponse {
    #[serde(default)]
    voices: Vec<Voice>,
}

impl TtsClient {
    /// Fetch the voice catalog, optionally filtered by language code,
    /// in the order the service returns it.
    #[instrument(skip(self))]
    pub async fn list_voices(&self, language_code: Option<&str>) -> Result<Vec<Voice>> {
        let mut request = self.apply_auth(self.http().get(self.url(VOICES_PATH)));
        if let Some(code) = language_code {
            request = request.query(&[("languageCode", code)]);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(self.error_for(response).await);
        }

        let body: ListVoicesResponse = response
            .json()
            .await
            .map_err(|err| Error::InvalidResponse(err.to_string()))?;
        debug!(voices = body.voices.len(), "fetched voice catalog");
        Ok(body.voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Credentials;
    use mockito::Matcher;

    const CATALOG: &str = r#"{
        "voices": [
            {
                "languageCodes": ["en-US"],
                "name": "en-US-Wavenet-H",
                "ssmlGender": "FEMALE",
                "naturalSampleRateHertz": 24000
            },
            {
                "languageCodes": ["en-US", "en-GB"],
                "name": "en-US-Standard-B",
                "ssmlGender": "MALE",
                "naturalSampleRateHertz": 24000
            }
        ]
    }"#;

    fn client_for(server: &mockito::ServerGuard) -> TtsClient {
        TtsClient::with_base_url(Credentials::AccessToken("test-token".into()), server.url())
    }

    #[tokio::test]
    async fn preserves_service_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/voices")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CATALOG)
            .create_async()
            .await;

        let voices = client_for(&server).list_voices(None).await.unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].name, "en-US-Wavenet-H");
        assert_eq!(voices[0].language_codes, vec!["en-US"]);
        assert_eq!(voices[0].ssml_gender.as_deref(), Some("FEMALE"));
        assert_eq!(voices[0].natural_sample_rate_hertz, 24000);
        assert_eq!(voices[1].name, "en-US-Standard-B");
    }

    #[tokio::test]
    async fn sends_language_filter_as_query_parameter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/voices")
            .match_query(Matcher::UrlEncoded("languageCode".into(), "de-DE".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"voices":[]}"#)
            .create_async()
            .await;

        let voices = client_for(&server).list_voices(Some("de-DE")).await.unwrap();
        mock.assert_async().await;
        assert!(voices.is_empty());
    }

    #[tokio::test]
    async fn missing_voices_field_is_an_empty_catalog() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/voices")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let voices = client_for(&server).list_voices(None).await.unwrap();
        assert!(voices.is_empty());
    }

    #[tokio::test]
    async fn auth_failure_is_a_service_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/voices")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"error":{"code":401,"message":"Request had invalid authentication credentials.","status":"UNAUTHENTICATED"}}"#,
            )
            .create_async()
            .await;

        let err = client_for(&server).list_voices(None).await.unwrap_err();
        match err {
            Error::Service { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Request had invalid authentication credentials.");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }
}
