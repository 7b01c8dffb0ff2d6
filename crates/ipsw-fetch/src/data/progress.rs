use super::options::FetchPhase;

/// Snapshot of a download's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub phase: FetchPhase,
    pub bytes_downloaded: u64,
    /// Content length announced by the server, if any.
    pub total_bytes: Option<u64>,
}

impl Progress {
    pub fn new(phase: FetchPhase, bytes_downloaded: u64, total_bytes: Option<u64>) -> Self {
        Self {
            phase,
            bytes_downloaded,
            total_bytes,
        }
    }

    /// Percentage complete, when the total is known and non-zero.
    pub fn percentage(&self) -> Option<f64> {
        self.total_bytes
            .filter(|&t| t > 0)
            .map(|t| self.bytes_downloaded as f64 / t as f64 * 100.0)
    }
}
