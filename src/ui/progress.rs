// Tue Jan 13 2026 - Alex

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

pub struct ProgressManager {
    enabled: bool,
    template: String,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            enabled: true,
            template: BAR_TEMPLATE.to_string(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_style(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }

    /// One tick per finished file. Hidden when progress is disabled.
    pub fn file_bar(&self, total: u64, message: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template(&self.template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ ");
        let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_bar_is_hidden() {
        let bar = ProgressManager::new().with_enabled(false).file_bar(3, "files");
        assert!(bar.is_hidden());
        bar.inc(1);
    }

    #[test]
    fn test_bad_template_falls_back() {
        let bar = ProgressManager::new().with_style("{bar:").file_bar(2, "files");
        bar.inc(2);
        bar.finish_and_clear();
        assert_eq!(bar.position(), 2);
    }
}
