//! Dotted version parsing and comparison for firmware releases.
//!
//! Versions such as `14.4.1` are split into ordered segments. Numeric
//! segments compare numerically, anything else compares lexically and sorts
//! after every numeric segment at the same position. Trailing zero segments
//! are ignored, so `14.4` and `14.4.0` are equal.

pub use self::version::{Segment, Version};

mod version;
