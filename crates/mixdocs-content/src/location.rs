//! Route locations.
//!
//! A [`Location`] is the address of a page and, optionally, one of its
//! sections. Paths are stored without a leading slash (`""` for the root
//! page) so they compare directly against page identifiers.

use std::fmt;

use serde::Serialize;

/// Page path plus optional section anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    /// Page identifier without leading slash.
    pub path: String,
    /// Section anchor without `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl Location {
    /// Location of the root page.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a location for a page, optionally addressing a section.
    #[must_use]
    pub fn new(path: impl Into<String>, fragment: Option<&str>) -> Self {
        Self {
            path: path.into(),
            fragment: fragment.map(str::to_owned),
        }
    }

    /// Parse an href such as `/quick-start#wallet`.
    ///
    /// Leading and trailing slashes are dropped, the query string is
    /// ignored, and an empty fragment (`/api#`) counts as no fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use mixdocs_content::Location;
    ///
    /// let loc = Location::parse("/quick-start#wallet");
    /// assert_eq!(loc.path, "quick-start");
    /// assert_eq!(loc.fragment.as_deref(), Some("wallet"));
    ///
    /// assert_eq!(Location::parse("/"), Location::root());
    /// ```
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = match href.split_once('#') {
            Some((rest, frag)) => (rest, Some(frag).filter(|f| !f.is_empty())),
            None => (href, None),
        };
        let path = rest.split_once('?').map_or(rest, |(path, _)| path);
        let path = path.trim_matches('/');

        Self::new(path, fragment)
    }

    /// Whether this location addresses the root page.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// URL form with leading slash (`/`, `/api`, `/api#errors`).
    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        assert_eq!(Location::parse("/"), Location::root());
        assert_eq!(Location::parse(""), Location::root());
    }

    #[test]
    fn test_parse_root_with_fragment() {
        let loc = Location::parse("/#features");
        assert!(loc.is_root());
        assert_eq!(loc.fragment.as_deref(), Some("features"));
    }

    #[test]
    fn test_parse_strips_trailing_slash_and_query() {
        let loc = Location::parse("/api/?expanded=API%20Reference#errors");
        assert_eq!(loc.path, "api");
        assert_eq!(loc.fragment.as_deref(), Some("errors"));
    }

    #[test]
    fn test_parse_empty_fragment_is_none() {
        assert_eq!(Location::parse("/api#"), Location::new("api", None));
    }

    #[test]
    fn test_href_round_trips_display_form() {
        assert_eq!(Location::root().href(), "/");
        assert_eq!(Location::new("api", Some("errors")).href(), "/api#errors");
        assert_eq!(Location::parse("/#features").href(), "/#features");
    }
}
