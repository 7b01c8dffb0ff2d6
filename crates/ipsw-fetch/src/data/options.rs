use std::fmt;
use std::sync::Arc;

use super::progress::Progress;

/// Phases of a single download.
///
/// Downloads progress through these phases in order:
/// Connecting → Downloading → Verifying → Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Request sent, waiting for response headers.
    #[default]
    Connecting,

    /// Streaming the body to disk.
    Downloading,

    /// Finalizing the digest and comparing it with the reference.
    Verifying,

    /// Terminal state; reached whether or not the digest matched.
    Completed,
}

impl std::fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchPhase::Connecting => write!(f, "Connecting"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Verifying => write!(f, "Verifying"),
            FetchPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Per-download configuration.
///
/// # Examples
///
/// ```
/// use ipsw_fetch::{FetchOptions, FetchPhase};
/// use std::sync::Arc;
///
/// let options = FetchOptions::default()
///     .on_progress(Arc::new(|progress| {
///         if progress.phase == FetchPhase::Completed {
///             println!("{} bytes", progress.bytes_downloaded);
///         }
///     }));
/// ```
#[derive(Clone, Default)]
pub struct FetchOptions {
    /// Progress callback invoked on phase transitions and after every chunk
    /// written during the Downloading phase.
    ///
    /// Default: None
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl FetchOptions {
    #[must_use]
    pub fn on_progress(mut self, on_progress: Arc<dyn Fn(&Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub(crate) fn report(&self, progress: Progress) {
        if let Some(ref callback) = self.on_progress {
            callback(&progress);
        }
    }
}
