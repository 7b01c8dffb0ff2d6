use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use ipsw_fetch::{FetchPhase, Progress};
use once_cell::sync::Lazy;

pub trait Tracker {
    type Ctx: Clone;
    fn new(ctx: Self::Ctx) -> Self;
    fn update(&self, progress: &Progress);
    fn finish(&self);
}

const PB_STYLE: &str = "{spinner:.blue} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} {msg} ({bytes_per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Byte progress bar for one download. Stays hidden until bytes flow, so
/// skipped records draw nothing.
#[derive(Clone)]
pub struct ProgressTracker {
    pub pb: ProgressBar,
    visible: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressTrackerConfig {
    /// Size advertised by the metadata, used until the server reports one.
    pub len: Option<u64>,
    pub visible: bool,
}

impl Tracker for ProgressTracker {
    type Ctx = ProgressTrackerConfig;

    fn new(ctx: Self::Ctx) -> Self {
        let pb = ProgressBar::with_draw_target(ctx.len, ProgressDrawTarget::hidden());
        if let Some(style) = PB_TEMPLATE.as_ref() {
            pb.set_style(style.clone());
        }
        ProgressTracker {
            pb,
            visible: ctx.visible,
        }
    }

    fn update(&self, progress: &Progress) {
        if progress.phase != FetchPhase::Downloading {
            return;
        }
        if self.visible && self.pb.is_hidden() {
            self.pb.set_draw_target(ProgressDrawTarget::stderr());
        }
        if let Some(total) = progress.total_bytes {
            self.pb.set_length(total);
        }
        self.pb.set_position(progress.bytes_downloaded);
        if let Some(pct) = progress.percentage() {
            self.pb.set_message(format!("{pct:.0}%"));
        }
    }

    fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
