use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read the whole input file as UTF-8 text. Whitespace-only input is
/// rejected here, before any network call.
pub fn read_input_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_owned(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(Error::EmptyInput {
            path: path.to_owned(),
        });
    }
    debug!(chars = text.chars().count(), "read input file");
    Ok(text)
}

/// Write the audio bytes to the output path, overwriting any existing
/// file. A failure to open leaves nothing behind.
pub fn write_audio(path: &Path, audio: &[u8]) -> Result<()> {
    fs::write(path, audio).map_err(|source| Error::WriteOutput {
        path: path.to_owned(),
        source,
    })
}
