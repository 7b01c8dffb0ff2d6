//! Immutable option and progress types shared by the fetch operations.

pub mod options;
pub mod progress;

pub use options::{FetchOptions, FetchPhase};
pub use progress::Progress;
