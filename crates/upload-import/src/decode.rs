use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::borrow::Cow;

/// Decodes a name or surname. These never gate insertion, so a field that is
/// not valid in `encoding` is still decoded: UTF-8 input falls back to
/// Windows-1252 (a superset of Latin-1), anything else gets replacement chars.
pub(crate) fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if !had_errors {
        return text.into_owned();
    }
    if encoding == UTF_8 {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let (fallback, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
        return fallback.into_owned();
    }
    text.into_owned()
}

/// Decodes an email strictly: `None` when the bytes are not valid in
/// `encoding`.
pub(crate) fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::{decode_strict, decode_text};
    use encoding_rs::{UTF_8, WINDOWS_1252};

    #[test]
    fn latin1_name_falls_back_from_utf8() {
        assert_eq!(decode_text(b"Jos\xe9", UTF_8), "José");
        assert_eq!(decode_text("Zoë".as_bytes(), UTF_8), "Zoë");
    }

    #[test]
    fn leading_bom_is_removed() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFada", UTF_8), "ada");
    }

    #[test]
    fn strict_decode_rejects_invalid_bytes() {
        assert_eq!(decode_strict(b"a\xffb@example.com", UTF_8), None);
        assert_eq!(
            decode_strict(b"ana@example.com", WINDOWS_1252).as_deref(),
            Some("ana@example.com")
        );
    }
}
