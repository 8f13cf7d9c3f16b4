use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

/// Tracks how many input files have been processed, drawn on stderr.
pub struct FileProgress {
    pb: ProgressBar,
}

impl FileProgress {
    /// Creates a bar for `total` files; a disabled bar draws nothing.
    pub fn new(total: usize, enabled: bool) -> Self {
        let pb = if enabled {
            let pb = ProgressBar::new(total as u64).with_style(Self::bar_style());
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.set_length(total as u64);
        Self { pb }
    }

    pub fn start_file(&self, path: &Path) {
        self.pb.set_message(path.display().to_string());
    }

    pub fn finish_file(&self) {
        self.pb.inc(1);
    }

    /// Runs `f` with the bar cleared so that output written to the terminal is not torn.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}
