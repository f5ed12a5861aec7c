use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::ExtractError;
use crate::warning::{ExtractWarning, WarningCode};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

pub(crate) fn read_input_text(
    path: &Path,
    warnings: &mut Vec<ExtractWarning>,
) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decode_input_bytes(&bytes, warnings))
}

pub(crate) fn decode_input_bytes(bytes: &[u8], warnings: &mut Vec<ExtractWarning>) -> String {
    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warnings.push(ExtractWarning::new(
                WarningCode::InputReencoded,
                "input is not valid UTF-8; decoded as Windows-1252",
            ));
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

pub(crate) fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
