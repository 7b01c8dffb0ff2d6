//! Version types and operations.

use std::cmp::Ordering;
use std::convert::Infallible;

/// A single dot-separated component of a version string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Numeric(u64),
    /// Non-numeric segment, lower-cased.
    Text(String),
}

impl Segment {
    fn parse(s: &str) -> Self {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse() {
                return Segment::Numeric(n);
            }
        }
        Segment::Text(s.to_ascii_lowercase())
    }
}

/// Parsed dotted version.
///
/// Parsing never fails: malformed input still produces a version that takes
/// part in the total order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    raw: String,
    segments: Vec<Segment>,
}

impl Version {
    /// Lower bound used when no minimum is given.
    pub const DEFAULT_MIN: &'static str = "0.1";
    /// Upper bound used when no maximum is given.
    pub const DEFAULT_MAX: &'static str = "999.0";

    pub fn parse(s: &str) -> Self {
        let raw = s.trim().to_string();
        let mut segments: Vec<Segment> = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split('.').map(Segment::parse).collect()
        };

        while matches!(segments.last(), Some(Segment::Numeric(0))) {
            segments.pop();
        }

        Self { raw, segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Inclusive range containment: `min <= self <= max`.
    pub fn within(&self, min: &Version, max: &Version) -> bool {
        self >= min && self <= max
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments.cmp(&other.segments)
    }
}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl std::str::FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::parse(&s)
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::parse(s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.raw
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
