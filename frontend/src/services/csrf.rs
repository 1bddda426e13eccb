use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Read the anti-forgery token from `document.cookie`.
///
/// Returns `None` when the cookie is absent or empty. Callers must treat
/// that as a hard stop for mutating requests — the check happens before
/// any network activity.
pub fn csrf_token(cookie_name: &str) -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    token_from_cookies(&cookies, cookie_name)
}

/// Pull a named cookie value out of a `document.cookie` string.
pub fn token_from_cookies(cookies: &str, cookie_name: &str) -> Option<String> {
    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == cookie_name && !value.is_empty() {
                return Some(percent_decode(value));
            }
        }
    }
    None
}

/// Undo URL encoding on a cookie value. Tokens are usually plain
/// alphanumerics, but the cookie header may carry %-escapes.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            if let Ok(byte) = u8::from_str_radix(&value[i + 1..i + 3], 16) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(decoded).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_found_among_other_cookies() {
        let cookies = "sessionid=abc123; csrftoken=THETOKEN; theme=dark";
        assert_eq!(
            token_from_cookies(cookies, "csrftoken"),
            Some("THETOKEN".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_cookie_yields_none() {
        assert_eq!(token_from_cookies("sessionid=abc123", "csrftoken"), None);
        assert_eq!(token_from_cookies("", "csrftoken"), None);
        assert_eq!(token_from_cookies("csrftoken=", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_value_is_url_decoded() {
        assert_eq!(
            token_from_cookies("csrftoken=abc%3D123", "csrftoken"),
            Some("abc=123".to_string())
        );
    }

    #[test]
    fn test_broken_percent_escape_is_left_alone() {
        assert_eq!(
            token_from_cookies("csrftoken=abc%zz", "csrftoken"),
            Some("abc%zz".to_string())
        );
    }

    #[test]
    fn test_name_must_match_exactly() {
        assert_eq!(token_from_cookies("xcsrftoken=nope", "csrftoken"), None);
    }
}
