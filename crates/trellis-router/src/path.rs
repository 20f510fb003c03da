//! Path and pattern segmentation.

/// The kind of a single pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A literal segment, matched only by identical text.
    Static,
    /// A named parameter (`:id`), matching exactly one segment.
    Param,
    /// A catch-all (`*path`), matching the remainder of the path.
    CatchAll,
}

impl SegmentKind {
    /// Classifies a segment by its leading character.
    pub fn of(segment: &str) -> Self {
        match segment.as_bytes().first() {
            Some(b':') => Self::Param,
            Some(b'*') => Self::CatchAll,
            _ => Self::Static,
        }
    }

    /// Returns true for `Param` and `CatchAll`.
    pub fn is_wildcard(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// Splits a pattern or request path into its segments.
///
/// Empty segments are dropped, so leading, trailing and repeated slashes
/// carry no meaning. Everything after the first catch-all segment is
/// discarded.
///
/// # Example
///
/// ```
/// use trellis_router::parse_pattern;
///
/// assert_eq!(parse_pattern("/p//go/"), vec!["p", "go"]);
/// assert_eq!(parse_pattern("/static/*filepath/ignored"), vec!["static", "*filepath"]);
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<&str> {
    let mut parts = Vec::new();

    for part in pattern.split('/').filter(|s| !s.is_empty()) {
        parts.push(part);
        if part.starts_with('*') {
            break;
        }
    }

    parts
}
