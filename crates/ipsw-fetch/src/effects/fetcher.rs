use std::io;
use std::path::Path;

use futures_util::StreamExt;
use ipsw_catalog::FirmwareRecord;
use ipsw_verify::{Md5Hasher, VerifiedWriter};
use tokio::fs::OpenOptions;
use tracing::{debug, trace};

use crate::plan::{SkipReason, target_path};
use crate::data::{FetchOptions, FetchPhase, Progress};
use crate::effects::http::HttpClient;
use crate::error::{Result, TransferError};

/// Outcome of [`Fetcher::fetch_and_verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyResult {
    Skipped(SkipReason),
    /// The body was written in full. A mismatch leaves the file in place.
    Completed {
        /// Lowercase hex MD5 of the downloaded bytes.
        digest: String,
        matched: bool,
        bytes: u64,
    },
}

/// Downloads firmware records one at a time, hashing while writing.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Download `record` into `output_dir` and compare its MD5 with the
    /// record's reference checksum.
    ///
    /// Nothing is requested when the URL is not an IPSW or the target file
    /// already exists. Existing files are never overwritten.
    pub async fn fetch_and_verify(
        &self,
        record: &FirmwareRecord,
        output_dir: &Path,
        options: &FetchOptions,
    ) -> Result<VerifyResult> {
        let path = match target_path(record, output_dir) {
            Ok(path) => path,
            Err(reason) => return Ok(VerifyResult::Skipped(reason)),
        };

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|source| TransferError::Io {
                path: path.clone(),
                source,
            })?;
        if exists {
            return Ok(VerifyResult::Skipped(SkipReason::AlreadyExists));
        }

        options.report(Progress::new(FetchPhase::Connecting, 0, None));
        debug!(url = %record.url, path = %path.display(), "requesting firmware");

        let body = self
            .client
            .stream(&record.url)
            .await
            .map_err(|e| Self::network_error(&record.url, e))?;
        let total_bytes = body.content_length.or(record.size);

        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(VerifyResult::Skipped(SkipReason::AlreadyExists));
            }
            Err(source) => return Err(TransferError::Io { path, source }),
        };

        let io_error = |source: io::Error| TransferError::Io {
            path: path.clone(),
            source,
        };

        let mut writer = VerifiedWriter::new(file, Md5Hasher::new());
        let mut stream = body.stream;
        options.report(Progress::new(FetchPhase::Downloading, 0, total_bytes));

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Self::network_error(&record.url, e))?;
            writer.write_chunk(&chunk).await.map_err(io_error)?;
            options.report(Progress::new(
                FetchPhase::Downloading,
                writer.written(),
                total_bytes,
            ));
        }

        let bytes = writer.written();
        options.report(Progress::new(FetchPhase::Verifying, bytes, total_bytes));

        let verification = writer.finish(&record.checksum).await.map_err(io_error)?;
        trace!(
            digest = %verification.digest,
            expected = %record.checksum,
            matched = verification.matched,
            "digest computed"
        );

        options.report(Progress::new(FetchPhase::Completed, bytes, total_bytes));

        Ok(VerifyResult::Completed {
            digest: verification.digest,
            matched: verification.matched,
            bytes,
        })
    }

    fn network_error<E: std::error::Error>(url: &str, e: E) -> TransferError {
        TransferError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}
