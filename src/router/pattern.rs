//! Path Templates
//!
//! Route paths made of static segments and `:param` segments, joined along
//! the route tree and filled in to build links to named routes. Matching
//! locations against them is left to `leptos_router`.

use std::collections::HashMap;

/// Values substituted into `:param` segments
pub type Params = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// Parsed route path, e.g. `/orders/details/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(path: &str) -> Self {
        let segments = split(path)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(seg.to_string()),
            })
            .collect::<Vec<_>>();

        let raw = if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", split(path).collect::<Vec<_>>().join("/"))
        };

        Self { raw, segments }
    }

    /// Resolve a child path relative to this pattern.
    ///
    /// An empty child resolves to the parent itself; a child starting with
    /// `/` is absolute.
    pub fn join(&self, child: &str) -> Self {
        if child.starts_with('/') {
            return Self::parse(child);
        }
        Self::parse(&format!("{}/{}", self.raw.trim_end_matches('/'), child))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the `:param` segments, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Build a concrete path, substituting params.
    ///
    /// Returns the name of the first missing param on failure.
    pub fn build(&self, params: &Params) -> Result<String, String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => match params.get(name) {
                    Some(value) => path.push_str(value),
                    None => return Err(name.clone()),
                },
            }
        }
        Ok(path)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(PathPattern::parse("/").as_str(), "/");
        assert_eq!(PathPattern::parse("").as_str(), "/");
        assert_eq!(PathPattern::parse("/orders/").as_str(), "/orders");
    }

    #[test]
    fn test_join_relative_children() {
        let parent = PathPattern::parse("/orders");
        assert_eq!(parent.join("").as_str(), "/orders");
        assert_eq!(parent.join("details/:id").as_str(), "/orders/details/:id");
        assert_eq!(parent.join("/elsewhere").as_str(), "/elsewhere");
        assert_eq!(PathPattern::parse("/").join("test").as_str(), "/test");
    }

    #[test]
    fn test_build() {
        let pattern = PathPattern::parse("/orders/details/:id");
        let mut params = Params::new();
        assert_eq!(pattern.build(&params), Err("id".to_string()));

        params.insert("id".to_string(), "A-100".to_string());
        assert_eq!(pattern.build(&params).unwrap(), "/orders/details/A-100");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    }
}
