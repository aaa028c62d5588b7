//! Identifier case conversion for generated provider code.
//!
//! Templates address the same product identity in several renderings:
//! snake_case for file and attribute names, TitleCase for type names, and
//! UPPERCASE for environment variable names. The conversions here are pure,
//! deterministic, and total over printable ASCII identifiers.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Boundary between a lowercase letter or digit and an uppercase letter.
///
/// This is the only camel boundary recognized; runs of uppercase collapse,
/// so `HTTPServer` becomes `httpserver`, not `http_server`.
fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("([a-z0-9])([A-Z])").unwrap())
}

/// Normalize an identifier-like string into snake_case.
///
/// Spaces and hyphens are treated as existing separators, an underscore is
/// inserted at each lower/digit-to-upper boundary, and the result is
/// lowercased.
///
/// ```
/// use provgen_casing::to_snake_case;
///
/// assert_eq!(to_snake_case("AccessContextManager"), "access_context_manager");
/// assert_eq!(to_snake_case("Binary Authorization"), "binary_authorization");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let separated = s.replace([' ', '-'], "_");
    camel_boundary()
        .replace_all(&separated, "${1}_${2}")
        .to_ascii_lowercase()
}

/// Convert a snake_case string to TitleCase.
///
/// Each underscore-delimited segment has its first ASCII character
/// uppercased and the underscores are removed.
///
/// ```
/// use provgen_casing::snake_to_title_case;
///
/// assert_eq!(snake_to_title_case("storage_bucket"), "StorageBucket");
/// ```
pub fn snake_to_title_case(s: &str) -> String {
    let mut title = String::with_capacity(s.len());
    for segment in s.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            title.push(first.to_ascii_uppercase());
            title.extend(chars);
        }
    }
    title
}

/// Uppercase an entire snake_case string, keeping the underscores.
pub fn to_upper_case(s: &str) -> String {
    s.to_ascii_uppercase()
}
