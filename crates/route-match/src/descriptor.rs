//! Route-template compilation.
//!
//! A template like `users/{username}/account/{id}` is normalized and compiled
//! into a [`RouteDescriptor`]: the normalized template, the ordered parameter
//! names, and a wildcard pattern with one non-greedy capture group per
//! placeholder position.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// One `{name}` placeholder: a literal `{`, as few characters as possible,
/// then the nearest following `}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*?\}").expect("placeholder pattern is valid"));

/// A compiled route template.
///
/// Descriptors are immutable after construction and safe to share across any
/// number of concurrent match operations.
///
/// # Example
///
/// ```
/// use route_match::RouteDescriptor;
///
/// let route = RouteDescriptor::new("users/{username}/account/{id}");
/// assert_eq!(route.name(), "/users/{username}/account/{id}/");
/// assert_eq!(route.params(), ["username", "id"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// Normalized template: trimmed, with leading and trailing `/`.
    name: String,
    /// Parameter names in order of appearance, repeats included.
    params: Vec<String>,
    /// Wildcard pattern; capture group `i` corresponds to `params[i]`.
    pattern: Regex,
}

impl RouteDescriptor {
    /// Compile a route template.
    ///
    /// Never fails: every input string yields a descriptor. Malformed
    /// templates produce a descriptor that matches unexpectedly rather than
    /// an error.
    ///
    /// # Example
    ///
    /// ```
    /// use route_match::RouteDescriptor;
    ///
    /// // Leading/trailing slashes are added, whitespace is trimmed.
    /// let route = RouteDescriptor::new("  users/{id}  ");
    /// assert_eq!(route.name(), "/users/{id}/");
    /// ```
    #[must_use]
    pub fn new(template: &str) -> Self {
        let name = normalize(template);
        let tokens: Vec<&str> = PLACEHOLDER.find_iter(&name).map(|m| m.as_str()).collect();
        let params = tokens
            .iter()
            .map(|token| token[1..token.len() - 1].to_string())
            .collect();
        let pattern = wildcard_pattern(&name, &tokens);
        Self {
            name,
            params,
            pattern,
        }
    }

    /// The normalized template (starts and ends with `/`).
    ///
    /// Compiling the name again reproduces an equal descriptor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter names in order of appearance in the template.
    ///
    /// A name declared more than once appears more than once.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The compiled wildcard pattern.
    ///
    /// The pattern is unanchored; matching validates the match offset
    /// explicitly.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl PartialEq for RouteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.params == other.params
            && self.pattern.as_str() == other.pattern.as_str()
    }
}

impl Eq for RouteDescriptor {}

impl Serialize for RouteDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RouteDescriptor", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("params", &self.params)?;
        state.serialize_field("pattern", self.pattern.as_str())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for RouteDescriptor {
    /// Deserialize by recompiling from the normalized name.
    ///
    /// `params` and `pattern` are derived values; rebuilding them from the
    /// name keeps the descriptor consistent no matter where the serialized
    /// form came from.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            name: String,
        }

        let repr = Repr::deserialize(deserializer)?;
        Ok(Self::new(&repr.name))
    }
}

/// Compile a route template into a [`RouteDescriptor`].
///
/// # Example
///
/// ```
/// use route_match::compile;
///
/// let route = compile("users/{username}/account/{id}");
/// assert_eq!(route.params(), ["username", "id"]);
/// ```
#[must_use]
pub fn compile(template: &str) -> RouteDescriptor {
    RouteDescriptor::new(template)
}

/// Trim surrounding whitespace and enforce leading and trailing `/`.
///
/// Idempotent; the empty string normalizes to `"/"`.
pub(crate) fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let mut out = String::with_capacity(trimmed.len() + 2);
    if !trimmed.starts_with('/') {
        out.push('/');
    }
    out.push_str(trimmed);
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// A piece of the template while it is being rewritten into a pattern.
enum Segment {
    Literal(String),
    Capture,
}

/// Split the first remaining literal occurrence of `token` into a capture.
///
/// Searching left to right over literal segments only, so a repeated token
/// text claims its next physical position each time.
fn split_first_occurrence(segments: &mut Vec<Segment>, token: &str) {
    for idx in 0..segments.len() {
        let (before, after) = {
            let Segment::Literal(text) = &segments[idx] else {
                continue;
            };
            let Some(at) = text.find(token) else {
                continue;
            };
            (
                text[..at].to_string(),
                text[at + token.len()..].to_string(),
            )
        };
        segments.splice(
            idx..=idx,
            [
                Segment::Literal(before),
                Segment::Capture,
                Segment::Literal(after),
            ],
        );
        return;
    }
}

/// Build the wildcard pattern for a normalized template.
///
/// Each placeholder position becomes a non-greedy `(.*?)` group; everything
/// else is escaped so template text matches literally.
fn wildcard_pattern(name: &str, tokens: &[&str]) -> Regex {
    let mut segments = vec![Segment::Literal(name.to_owned())];
    for token in tokens {
        split_first_occurrence(&mut segments, token);
    }

    let mut source = String::with_capacity(name.len());
    for segment in &segments {
        match segment {
            Segment::Literal(text) => source.push_str(&regex::escape(text)),
            Segment::Capture => source.push_str("(.*?)"),
        }
    }
    Regex::new(&source).expect("escaped literals and wildcard groups form a valid pattern")
}
