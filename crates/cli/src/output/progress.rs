//! Progress indication for transfers
//!
//! A transfer is a single blocking HTTP exchange, so there is no byte
//! count to report while it runs; a spinner is the honest display.
//! Suppressed in quiet, JSON, and --no-progress modes.

use super::OutputConfig;

/// Spinner shown while a blocking transfer is in flight
#[derive(Debug)]
pub struct ProgressSpinner {
    bar: Option<indicatif::ProgressBar>,
}

impl ProgressSpinner {
    /// Start a spinner with the given message
    pub fn start(config: &OutputConfig, message: &str) -> Self {
        let bar = if config.quiet || config.json || config.no_progress {
            None
        } else {
            let bar = indicatif::ProgressBar::new_spinner();
            bar.set_style(
                indicatif::ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("valid template"),
            );
            bar.set_message(message.to_string());
            bar.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(bar)
        };

        Self { bar }
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Check if the spinner is being displayed
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_suppressed_in_quiet_mode() {
        let config = OutputConfig {
            quiet: true,
            ..Default::default()
        };
        assert!(!ProgressSpinner::start(&config, "uploading").is_visible());
    }

    #[test]
    fn test_spinner_suppressed_in_json_mode() {
        let config = OutputConfig {
            json: true,
            ..Default::default()
        };
        assert!(!ProgressSpinner::start(&config, "uploading").is_visible());
    }

    #[test]
    fn test_spinner_visible_by_default() {
        let spinner = ProgressSpinner::start(&OutputConfig::default(), "uploading");
        assert!(spinner.is_visible());
        spinner.finish();
    }
}
