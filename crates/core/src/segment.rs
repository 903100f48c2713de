use serde::Deserialize;
use std::fmt;

/// A caller-supplied path parameter destined for an upstream URL.
///
/// Displays percent-encoded, so a decoded `/`, `?` or `#` stays inside its
/// own segment. Empty and dot segments are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct PathSegment(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a valid path segment")]
pub struct InvalidSegment(pub String);

impl TryFrom<String> for PathSegment {
    type Error = InvalidSegment;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.as_str() {
            "" | "." | ".." => Err(InvalidSegment(raw)),
            _ => Ok(Self(raw)),
        }
    }
}

impl PathSegment {
    /// The decoded value as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&urlencoding::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(raw: &str) -> Result<PathSegment, InvalidSegment> {
        PathSegment::try_from(raw.to_string())
    }

    #[test]
    fn test_plain_ids_render_unchanged() {
        assert_eq!(segment("DU123456").unwrap().to_string(), "DU123456");
        assert_eq!(segment("abc-123_x.y~z").unwrap().to_string(), "abc-123_x.y~z");
    }

    #[test]
    fn test_separators_are_encoded() {
        let seg = segment("../../account/DU1/order/42").unwrap();
        assert_eq!(seg.to_string(), "..%2F..%2Faccount%2FDU1%2Forder%2F42");
        assert_eq!(seg.as_str(), "../../account/DU1/order/42");
        assert_eq!(segment("100?force=true").unwrap().to_string(), "100%3Fforce%3Dtrue");
        assert_eq!(segment("a#b").unwrap().to_string(), "a%23b");
    }

    #[test]
    fn test_dot_and_empty_segments_rejected() {
        assert!(segment("..").is_err());
        assert!(segment(".").is_err());
        assert!(segment("").is_err());
    }

    #[test]
    fn test_deserializes_through_serde() {
        let seg: PathSegment = serde_json::from_str("\"100\"").unwrap();
        assert_eq!(seg.as_str(), "100");
        assert!(serde_json::from_str::<PathSegment>("\"..\"").is_err());
    }
}
