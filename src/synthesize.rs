use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::TtsClient;
use crate::error::{Error, Result};

const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

/// One synthesis request. Lives for a single invocation; the audio
/// encoding is always MP3.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    input: SynthesisInput,
    voice: VoiceSelectionParams,
    audio_config: AudioConfig,
}

#[derive(Debug, Clone, Serialize)]
struct SynthesisInput {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams {
    language_code: String,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: AudioEncoding,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum AudioEncoding {
    #[serde(rename = "MP3")]
    Mp3,
}

impl SynthesizeRequest {
    /// # Arguments
    /// * `voice_name` - eg: "en-US-Wavenet-H"
    /// * `language_code` - eg: "en-US"
    ///
    /// The voice/language combination is validated by the service, not here.
    pub fn new(text: impl Into<String>, voice_name: &str, language_code: &str) -> Self {
        Self {
            input: SynthesisInput { text: text.into() },
            voice: VoiceSelectionParams {
                language_code: language_code.to_owned(),
                name: voice_name.to_owned(),
            },
            audio_config: AudioConfig {
                audio_encoding: AudioEncoding::Mp3,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

impl TtsClient {
    /// Request audio for one synthesis request and return the raw MP3
    /// bytes. Any service rejection is surfaced verbatim; nothing is
    /// retried.
    #[instrument(skip(self, request))]
    pub async fn synthesize(&self, request: &SynthesizeRequest) -> Result<Bytes> {
        let response = self
            .apply_auth(self.http().post(self.url(SYNTHESIZE_PATH)))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.error_for(response).await);
        }

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|err| Error::InvalidResponse(err.to_string()))?;
        let audio = BASE64
            .decode(body.audio_content.as_bytes())
            .map_err(|err| Error::InvalidResponse(format!("bad audioContent base64: {err}")))?;
        debug!(bytes = audio.len(), "synthesis complete");

        Ok(Bytes::from(audio))
    }
}
