mod common;

use restyle_engine as re;
use restyle_engine::domain::naming;

#[test]
fn escape_keeps_safe_chars_and_escapes_the_rest() {
    assert_eq!(naming::escape_style_token("50x50"), "50x50");
    assert_eq!(naming::escape_style_token("50x50#"), "50x50%23");
    assert_eq!(naming::escape_style_token("100x100>"), "100x100%3E");
    assert_eq!(naming::escape_style_token("a_b-c"), "a_b-c");
    // '%' itself is not safe, so escaping is repeatable without ambiguity.
    assert_eq!(naming::escape_style_token("50x50%23"), "50x50%2523");
}

#[test]
fn escape_handles_spaces_and_unicode() {
    assert_eq!(naming::escape_style_token("a b"), "a%20b");
    // Multi-byte chars escape per UTF-8 byte.
    assert_eq!(naming::escape_style_token("é"), "%C3%A9");
}

#[test]
fn unescape_reverses_escape() {
    assert_eq!(naming::unescape_style_token("50x50%23").unwrap(), "50x50#");
    assert_eq!(naming::unescape_style_token("plain").unwrap(), "plain");
    assert_eq!(naming::unescape_style_token("a%20b").unwrap(), "a b");
}

#[test]
fn unescape_rejects_non_utf8_escapes() {
    // %FF alone is not valid UTF-8.
    let err = naming::unescape_style_token("bad%FF").unwrap_err();
    assert!(matches!(err, re::EngineError::InvalidStyleName(_)));
}

#[test]
fn dynamic_style_name_prefixes_escaped_token() {
    assert_eq!(
        naming::dynamic_style_name("50x50#").as_str(),
        "dynamic_50x50%23"
    );
    assert_eq!(naming::dynamic_style_name("42x42").as_str(), "dynamic_42x42");
}

#[test]
fn dynamic_prefix_detection() {
    assert!(naming::is_dynamic_style_name("dynamic_50x50%23"));
    assert!(!naming::is_dynamic_style_name("thumb"));
    assert!(!naming::is_dynamic_style_name("Dynamic_50x50"));
}

#[test]
fn token_roundtrips_through_name() {
    for token in ["50x50#", "100x100>", "42x42", "50x50%23"] {
        let name = naming::dynamic_style_name(token);
        assert_eq!(naming::dynamic_style_token(name.as_str()).unwrap(), token);
    }
}

#[test]
fn token_extraction_requires_the_prefix() {
    let err = naming::dynamic_style_token("thumb").unwrap_err();
    assert!(matches!(err, re::EngineError::InvalidStyleName(_)));
    assert!(err.to_string().contains("thumb"));
}
