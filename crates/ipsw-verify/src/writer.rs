use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::Hasher;

/// Outcome of comparing a computed digest with a reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Lowercase hex digest of everything written.
    pub digest: String,
    pub matched: bool,
}

/// Case-insensitive comparison of two hex digests.
pub fn digest_matches(actual: &str, expected: &str) -> bool {
    let expected = expected.trim();
    !expected.is_empty() && actual.trim().eq_ignore_ascii_case(expected)
}

/// Streaming writer that hashes data as it passes through.
/// Wraps any `AsyncWrite` sink.
pub struct VerifiedWriter<W, H> {
    writer: W,
    hasher: H,
    written: u64,
}

impl<W, H> VerifiedWriter<W, H> {
    pub fn new(writer: W, hasher: H) -> Self {
        Self { writer, hasher, written: 0 }
    }

    /// Total bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: AsyncWrite + Unpin, H: Hasher> VerifiedWriter<W, H> {
    /// Write the whole chunk and feed it to the hasher.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.writer.write_all(chunk).await?;
        self.hasher.update(chunk);
        self.written += chunk.len() as u64;
        Ok(())
    }

    /// Flush the sink and compare the digest against `expected`.
    pub async fn finish(mut self, expected: &str) -> io::Result<Verification> {
        self.writer.flush().await?;
        let digest = hex::encode(self.hasher.finalize());
        let matched = digest_matches(&digest, expected);
        Ok(Verification { digest, matched })
    }
}
