mod client;
mod error;
mod files;
mod synthesize;
mod voice_list;

pub use client::{Credentials, TtsClient, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use files::{read_input_text, write_audio};
pub use synthesize::{AudioEncoding, SynthesizeRequest};
pub use voice_list::Voice;

// Re-export common types
pub use bytes::Bytes;
