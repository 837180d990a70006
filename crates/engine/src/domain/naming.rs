//! Naming rules for dynamically defined styles.
//!
//! A dynamic style is requested as a raw geometry token (`"50x50#"`) and
//! registered under a percent-escaped name with a fixed prefix
//! (`"dynamic_50x50%23"`). The escaped form is what gets signed and what
//! appears (escaped once more) in URLs, so both directions live here.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::error::{EngineError, EngineResult};
use super::types::StyleName;

/// Prefix that marks a style as dynamically defined.
pub const DYNAMIC_STYLE_PREFIX: &str = "dynamic_";

// Everything outside [A-Za-z0-9_-] is escaped, matching the charset that is
// safe in a URL path segment without further quoting.
const STYLE_TOKEN_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Percent-escape a raw style token (`"50x50#"` -> `"50x50%23"`).
pub fn escape_style_token(token: &str) -> String {
    utf8_percent_encode(token, STYLE_TOKEN_ESCAPE).to_string()
}

/// Reverse [`escape_style_token`]. Fails on malformed escapes that do not
/// decode to UTF-8.
pub fn unescape_style_token(escaped: &str) -> EngineResult<String> {
    percent_decode_str(escaped)
        .decode_utf8()
        .map(|token| token.into_owned())
        .map_err(|_| EngineError::InvalidStyleName(escaped.to_string()))
}

/// Style name a dynamic token is registered under: prefix + escaped token.
pub fn dynamic_style_name(token: &str) -> StyleName {
    StyleName::new(format!("{DYNAMIC_STYLE_PREFIX}{}", escape_style_token(token)))
}

/// Whether a style name carries the dynamic prefix.
pub fn is_dynamic_style_name(name: &str) -> bool {
    name.starts_with(DYNAMIC_STYLE_PREFIX)
}

/// Recover the raw token from a dynamic style name
/// (`"dynamic_50x50%23"` -> `"50x50#"`).
pub fn dynamic_style_token(name: &str) -> EngineResult<String> {
    let escaped = name
        .strip_prefix(DYNAMIC_STYLE_PREFIX)
        .ok_or_else(|| EngineError::InvalidStyleName(name.to_string()))?;
    unescape_style_token(escaped)
}
