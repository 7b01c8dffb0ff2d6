//! The batch pipeline: validate output, fetch metadata, select, download.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use ipsw_catalog::{FirmwareRecord, select};
use ipsw_fetch::{
    FetchOptions, FetchPhase, Fetcher, HttpClient, Progress, SkipReason, VerifyResult,
    fetch_catalog,
};
use tracing::{debug, error, info, warn};

use crate::cli::App;
use crate::config::Config;
use crate::error::ConfigError;
use crate::ui::table;
use crate::ui::tracker::{ProgressTracker, ProgressTrackerConfig, Tracker};

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub matched: usize,
    pub downloaded: usize,
    pub mismatched: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matched: {} downloaded ({} mismatched), {} skipped, {} failed",
            self.matched, self.downloaded, self.mismatched, self.skipped, self.failed
        )
    }
}

pub async fn run(app: App) -> Result<Summary> {
    let output = validate_output(&app.output)?;

    let mut config = Config::load(app.config.as_deref())?;
    if let Some(url) = &app.api_url {
        config.api_url = url.clone();
    }

    let client = config
        .client_setting()
        .build()
        .map_err(ConfigError::Client)?;

    run_with(&app, &config, client, &output).await
}

/// The output directory must exist before anything touches the network.
pub fn validate_output(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(ConfigError::OutputNotDirectory(path.to_path_buf()))
    }
}

async fn run_with<C: HttpClient>(
    app: &App,
    config: &Config,
    client: C,
    output: &Path,
) -> Result<Summary> {
    info!("ipsw-get powered by ipsw.me");

    let catalog = fetch_catalog(&client, &config.api_url).await?;
    let criteria = app.criteria();
    let (min, max) = criteria.bounds();
    debug!(device = ?criteria.device(), %min, %max, "selection criteria");
    let targets = select(&catalog, &criteria);

    if targets.is_empty() {
        info!("No IPSWs matched provided criteria. Nothing to do.");
        return Ok(Summary::default());
    }

    if app.dry_run {
        println!("{}", table::targets(&targets));
        return Ok(Summary {
            matched: targets.len(),
            ..Summary::default()
        });
    }

    info!("Downloading {} matched IPSWs..", targets.len());
    let fetcher = Fetcher::new(client);
    Ok(download_all(&fetcher, &targets, output, true).await)
}

/// Download every target in order. Failures are logged and counted; they
/// never stop the batch.
pub async fn download_all<C: HttpClient>(
    fetcher: &Fetcher<C>,
    targets: &[&FirmwareRecord],
    output: &Path,
    show_progress: bool,
) -> Summary {
    let mut summary = Summary {
        matched: targets.len(),
        ..Summary::default()
    };

    for fw in targets {
        let tracker = ProgressTracker::new(ProgressTrackerConfig {
            len: fw.size,
            visible: show_progress,
        });
        let options = progress_options(fw.file_name().to_string(), tracker.clone());

        let result = fetcher.fetch_and_verify(fw, output, &options).await;
        tracker.finish();

        match result {
            Ok(VerifyResult::Completed { digest, matched, .. }) => {
                summary.downloaded += 1;
                if matched {
                    info!("MD5: {digest} - MATCH");
                } else {
                    summary.mismatched += 1;
                    warn!(expected = %fw.checksum, "MD5: {digest} - ! MISMATCH !");
                }
            }
            Ok(VerifyResult::Skipped(SkipReason::NotIpsw)) => {
                summary.skipped += 1;
                info!(url = %fw.url, "URL does not point to an ipsw");
            }
            Ok(VerifyResult::Skipped(SkipReason::AlreadyExists)) => {
                summary.skipped += 1;
                info!("{} already exists, skipping..", fw.file_name());
            }
            Err(err) => {
                summary.failed += 1;
                error!("{err}");
            }
        }
    }

    summary
}

fn progress_options(file_name: String, tracker: ProgressTracker) -> FetchOptions {
    FetchOptions::default().on_progress(Arc::new(move |progress: &Progress| {
        if progress.phase == FetchPhase::Connecting {
            info!("Downloading {file_name} ...");
        }
        tracker.update(progress);
    }))
}
