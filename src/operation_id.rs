//! # Operation Id Module
//!
//! Derives a stable, human-readable `operationId` for a (method, template)
//! pair. Client generators turn these ids into function names, so the
//! derivation must never change for an unchanged route.
//!
//! ## Rules
//!
//! 1. Split the template on `/`, drop empty segments.
//! 2. If a segment starts with `@` (e.g. `@me`), drop every segment after the
//!    first such sentinel.
//! 3. `:param` segments lose the `:` prefix and every occurrence of `Id`.
//! 4. Each token is PascalCased (`foo-bar` → `FooBar`, `@me` → `Me`).
//! 5. Tokens are joined with `By` and prefixed with the lowercase method.
//!
//! ```rust
//! use routedoc::{derive_operation_id, HttpMethod};
//!
//! assert_eq!(derive_operation_id(HttpMethod::Get, "/users/:userId"), "getUsersByUser");
//! assert_eq!(derive_operation_id(HttpMethod::Get, "/users/@me/settings"), "getUsersByMe");
//! ```

use crate::method::HttpMethod;

const SENTINEL_PREFIX: char = '@';
const PARAM_PREFIX: char = ':';
const ID_SUFFIX: &str = "Id";
const JOINER: &str = "By";

/// Build the default operationId for a route.
#[must_use]
pub fn derive_operation_id(method: HttpMethod, template: &str) -> String {
    let mut id = String::from(method.as_lower());
    id.push_str(&path_to_identifier(template));
    id
}

/// The method-independent part of an operationId.
#[must_use]
pub fn path_to_identifier(template: &str) -> String {
    let mut segments: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();

    if let Some(sentinel) = segments.iter().position(|s| s.starts_with(SENTINEL_PREFIX)) {
        segments.truncate(sentinel + 1);
    }

    segments
        .into_iter()
        .map(|segment| match segment.strip_prefix(PARAM_PREFIX) {
            Some(name) => to_pascal_case(&name.replace(ID_SUFFIX, "")),
            None => to_pascal_case(segment),
        })
        .collect::<Vec<_>>()
        .join(JOINER)
}

/// Convert any mix of camelCase, kebab-case, snake_case or spaced words to
/// PascalCase.
///
/// ```rust
/// use routedoc::operation_id::to_pascal_case;
///
/// assert_eq!(to_pascal_case("foo-bar"), "FooBar");
/// assert_eq!(to_pascal_case("userProfile"), "UserProfile");
/// assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
/// ```
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Split on non-alphanumeric characters and case boundaries.
pub(crate) fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // fooBar | foo2Bar | HTTPServer
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
