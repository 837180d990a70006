//! URL template interpolation and path helpers.

use super::types::AttachmentInfo;

/// Zero-padded, slash-chunked partition of a record id, spreading files
/// across directories: `1` -> `"000/000/001"`, `1234567890` ->
/// `"123/456/789/0"`.
pub fn id_partition(id: u64) -> String {
    let digits = format!("{id:09}");
    let mut parts = Vec::with_capacity(digits.len() / 3 + 1);
    let mut rest = digits.as_str();
    while rest.len() > 3 {
        let (head, tail) = rest.split_at(3);
        parts.push(head);
        rest = tail;
    }
    parts.push(rest);
    parts.join("/")
}

/// Append `key=value` to a URL, picking `?` or `&` by whether the URL
/// already carries a query string.
pub fn append_query_param(url: &str, key: &str, value: &str) -> String {
    let delimiter = if url.contains('?') { '&' } else { '?' };
    format!("{url}{delimiter}{key}={value}")
}

/// An attachment URL pattern with `:token` placeholders.
///
/// Recognized tokens: `:collection`, `:field`, `:id`, `:id_partition`,
/// `:style`, `:filename`. Unknown tokens pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    template: String,
}

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Interpolate the template for one attachment. `style_segment` is the
    /// style name as it should appear in the path (callers escape dynamic
    /// names first); `filename` is resolved by the caller so missing-file
    /// templates can substitute a placeholder.
    pub fn render(&self, info: &AttachmentInfo, style_segment: &str, filename: &str) -> String {
        let mut rendered = self.template.clone();
        // ":id_partition" must go before ":id" or the prefix gets eaten.
        for (token, value) in [
            (":id_partition", id_partition(info.id)),
            (":id", info.id.to_string()),
            (":collection", info.collection.clone()),
            (":field", info.field.clone()),
            (":style", style_segment.to_string()),
            (":filename", filename.to_string()),
        ] {
            rendered = rendered.replace(token, &value);
        }
        rendered
    }
}

impl From<&str> for UrlTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for UrlTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}
