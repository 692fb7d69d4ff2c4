//! Route matching result.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{RouteDescriptor, normalize};

/// A matched route with extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    /// Longest leading part of the normalized request path covered by the
    /// route (starts and ends with `/`, lower-cased).
    pub matched: String,
    /// The caller's request path, exactly as supplied.
    pub route: String,
    /// Extracted path parameters.
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Get a parameter value by name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl RouteDescriptor {
    /// Test a request path against this route.
    ///
    /// `None` (absent) and `Some("")` both count as no-match. The path is
    /// normalized with the same slash rules as the template and lower-cased
    /// before matching, so matching is case-insensitive while
    /// [`RouteMatch::route`] preserves the caller's original string.
    ///
    /// A match must begin at the very start of the normalized path, but may
    /// cover only a prefix of it; the remainder is the caller's to route
    /// further.
    ///
    /// # Example
    ///
    /// ```
    /// use route_match::RouteDescriptor;
    ///
    /// let route = RouteDescriptor::new("users/{username}/account/{id}");
    /// let hit = route.match_path(Some("/users/nic/account/1/blabla")).unwrap();
    /// assert_eq!(hit.matched, "/users/nic/account/1/");
    /// assert_eq!(hit.get_param("username"), Some("nic"));
    /// assert_eq!(hit.get_param("id"), Some("1"));
    /// ```
    #[must_use]
    pub fn match_path(&self, request_path: Option<&str>) -> Option<RouteMatch> {
        let raw = request_path?;
        if raw.is_empty() {
            return None;
        }

        let path = normalize(raw).to_lowercase();
        let captures = self.pattern().captures(&path)?;
        let whole = captures.get(0)?;
        if whole.start() != 0 {
            // The pattern is unanchored; a hit anywhere but the very start of
            // the path is not this route.
            return None;
        }

        let mut params = HashMap::with_capacity(self.params().len());
        for (name, capture) in self.params().iter().zip(captures.iter().skip(1)) {
            let value = capture.map_or_else(String::new, |m| m.as_str().to_owned());
            params.insert(name.clone(), value);
        }

        Some(RouteMatch {
            matched: whole.as_str().to_owned(),
            route: raw.to_owned(),
            params,
        })
    }
}

/// Test a request path against a compiled route.
///
/// # Example
///
/// ```
/// use route_match::{compile, match_route};
///
/// let route = compile("users/{id}");
/// assert!(match_route(Some("/users/7"), &route).is_some());
/// assert!(match_route(Some("/other/path"), &route).is_none());
/// assert!(match_route(None, &route).is_none());
/// ```
#[must_use]
pub fn match_route(request_path: Option<&str>, route: &RouteDescriptor) -> Option<RouteMatch> {
    route.match_path(request_path)
}
