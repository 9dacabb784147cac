use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[allow(clippy::expect_used)]
static PARAM_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("parameter name regex should be valid")
});

/// Returns `true` if `name` is usable as a path parameter name.
///
/// OpenAPI itself allows any string, but generated clients turn parameter
/// names into identifiers, so only `[A-Za-z_][A-Za-z0-9_]*` is accepted.
#[must_use]
pub fn is_valid_param_name(name: &str) -> bool {
    PARAM_NAME.is_match(name)
}

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text segment (`users`)
    Literal(String),
    /// Named parameter, stored without the `:` prefix
    Param(String),
    /// `@`-prefixed literal, stored without the `@` prefix
    Sentinel(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if let Some(name) = raw.strip_prefix(':') {
            Segment::Param(name.to_string())
        } else if let Some(name) = raw.strip_prefix('@') {
            Segment::Sentinel(name.to_string())
        } else {
            Segment::Literal(raw.to_string())
        }
    }
}

/// A registered route template.
///
/// Equality, hashing and ordering only look at the template text, so a
/// pattern can stand in for its string anywhere a key is needed.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let segments = template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();
        Self { template, segments }
    }

    /// The template exactly as registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Non-empty segments in left-to-right order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of `:param` segments in order of appearance.
    #[must_use]
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn has_sentinel(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Sentinel(_)))
    }

    /// Render with OpenAPI `{param}` templating instead of `:param`.
    ///
    /// A trailing slash on the original template is preserved.
    #[must_use]
    pub fn to_openapi_path(&self) -> String {
        let mut out = String::with_capacity(self.template.len() + 2);
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(name) => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
                Segment::Sentinel(name) => {
                    out.push('@');
                    out.push_str(name);
                }
            }
        }
        if out.is_empty() || (self.template.ends_with('/') && !out.ends_with('/')) {
            out.push('/');
        }
        out
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template
    }
}

impl Eq for PathPattern {}

impl Hash for PathPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.template.hash(state);
    }
}

impl PartialOrd for PathPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.template.cmp(&other.template)
    }
}

impl PartialEq<str> for PathPattern {
    fn eq(&self, other: &str) -> bool {
        self.template == other
    }
}

impl PartialEq<&str> for PathPattern {
    fn eq(&self, other: &&str) -> bool {
        self.template == *other
    }
}

impl Display for PathPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

impl From<&str> for PathPattern {
    fn from(value: &str) -> Self {
        PathPattern::new(value)
    }
}

impl From<String> for PathPattern {
    fn from(value: String) -> Self {
        PathPattern::new(value)
    }
}

impl AsRef<str> for PathPattern {
    fn as_ref(&self) -> &str {
        &self.template
    }
}

// Hash and Eq agree with `str`, so sets of patterns can be probed by text.
impl Borrow<str> for PathPattern {
    fn borrow(&self) -> &str {
        &self.template
    }
}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.template)
    }
}

impl<'de> Deserialize<'de> for PathPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PathPattern::new(s))
    }
}
