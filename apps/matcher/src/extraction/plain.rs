use crate::extraction::ExtractError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes UTF-8 bytes. Invalid sequences are an error, never replaced.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(String::from_utf8(bytes.to_vec())?)
}
