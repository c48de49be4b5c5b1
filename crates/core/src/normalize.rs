//! Free-text normalization applied to every record before validation.

/// Records whose free-text fields are cleaned before validation and storage.
///
/// Implementations run [`clean_text`] over every text field (`name`,
/// `description`, `title`) and leave identifiers, numbers and flags alone.
pub trait Normalize {
    fn normalize(self) -> Self;
}

/// Trim surrounding whitespace, then escape markup-significant characters.
///
/// The escaped set is `<`, `>`, `&`, `'` and `"`. Trimming happens first so
/// the result never carries leading or trailing whitespace.
pub fn clean_text(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            other => out.push(other),
        }
    }
    out
}
