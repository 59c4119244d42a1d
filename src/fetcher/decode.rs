use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

/// How far into the body we look for a `<meta>` charset declaration.
const META_SNIFF_BYTES: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

// Covers both `<meta charset=..>` and the http-equiv `content="..; charset=.."` form.
static META_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s[^>]*?charset\s*=\s*["']?([^"'\s;/>]+)"#).unwrap());

/// Pick the encoding for a response body: Content-Type header first, then a
/// `<meta>` declaration near the top of the document, then a statistical guess.
pub fn sniff_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&HEADER_CHARSET, content_type) {
        return encoding;
    }

    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    if let Some(encoding) = label_from(&META_CHARSET, &String::from_utf8_lossy(head)) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, body.len() <= META_SNIFF_BYTES);
    detector.guess(None, true)
}

/// Decode lossily; scraped pages routinely contain a few broken bytes and the
/// cleaner drops replacement characters anyway.
pub fn decode_body(content_type: &str, body: &[u8]) -> (String, &'static Encoding) {
    let encoding = sniff_encoding(content_type, body);
    let (text, used, _had_errors) = encoding.decode(body);
    (text.into_owned(), used)
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str();
    Encoding::for_label(label.trim().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"></head></html>";
        let encoding = sniff_encoding("text/html; charset=utf-8", body);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn falls_back_to_meta_charset() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>T</title></head></html>";
        // encoding_rs maps ISO-8859-1 onto its windows-1252 superset
        assert_eq!(sniff_encoding("text/html", body), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn reads_http_equiv_declaration() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=shift_jis\"></head></html>";
        assert_eq!(sniff_encoding("text/html", body), encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn decodes_latin1_bytes() {
        let body = b"<p>caf\xe9</p>";
        let (text, used) = decode_body("text/html; charset=iso-8859-1", body);
        assert_eq!(text, "<p>café</p>");
        assert_eq!(used, encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn decodes_utf8_without_declaration() {
        let body = "<p>Hello, 世界!</p>".as_bytes();
        let (text, _) = decode_body("text/html", body);
        assert_eq!(text, "<p>Hello, 世界!</p>");
    }
}
