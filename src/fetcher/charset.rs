//! Content-Type charset resolution and body decoding

use encoding_rs::Encoding;

/// Extracts the charset label from a `Content-Type` header value
///
/// Spaces are stripped from the whole value, the remainder is split on `;`,
/// and the first parameter beginning with `charset=` wins; the label is
/// whatever follows the first `=`. Returns `None` when the header carries no
/// charset parameter.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type
        .replace(' ', "")
        .split(';')
        .find_map(|param| param.strip_prefix("charset=").map(str::to_string))
        .filter(|label| !label.is_empty())
}

/// Decodes a response body using the resolved charset
///
/// A known charset label selects the matching encoding; an unknown or absent
/// label falls back to lossy UTF-8, the platform default for this crate.
pub fn decode_body(bytes: &[u8], charset: Option<&str>) -> String {
    if let Some(label) = charset {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            let (decoded, _, _) = encoding.decode(bytes);
            return decoded.into_owned();
        }
        tracing::debug!("Unknown charset label {:?}, falling back to UTF-8", label);
    }

    String::from_utf8_lossy(bytes).into_owned()
}
