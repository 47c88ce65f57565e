use crate::{Error, Result};
use chromiumoxide::browser::BrowserConfig;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(3);

/// How to start the browser and how long to wait on each page
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub chrome_path: PathBuf,
    pub profile_dir: PathBuf,
    pub headless: bool,
    pub navigation_timeout: Duration,
    pub settle_delay: Duration,
    pub window_size: (u32, u32),
}

impl LaunchOptions {
    /// Headed browser with the default timings
    pub fn new(chrome_path: PathBuf, profile_dir: PathBuf) -> Self {
        Self {
            chrome_path,
            profile_dir,
            headless: false,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
            window_size: (1280, 900),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Extra Chrome command-line switches
    fn build_args(&self) -> Vec<String> {
        vec![
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--lang=en-US".to_string(),
        ]
    }

    /// Translate into a chromiumoxide launch configuration
    pub fn to_config(&self) -> Result<BrowserConfig> {
        let (width, height) = self.window_size;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .user_data_dir(&self.profile_dir)
            .window_size(width, height)
            // CDP commands must outlive the navigation timeout or goto gives up first
            .request_timeout(self.navigation_timeout + Duration::from_secs(5))
            .args(self.build_args());

        if !self.headless {
            builder = builder.with_head();
        }

        builder.build().map_err(Error::Browser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> LaunchOptions {
        LaunchOptions::new(
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/tmp/profile"),
        )
    }

    #[test]
    fn test_defaults_match_source_timings() {
        let opts = options();

        assert!(!opts.headless);
        assert_eq!(opts.navigation_timeout, Duration::from_secs(60));
        assert_eq!(opts.settle_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_builders_override_defaults() {
        let opts = options()
            .headless(true)
            .navigation_timeout(Duration::from_secs(10))
            .settle_delay(Duration::ZERO);

        assert!(opts.headless);
        assert_eq!(opts.navigation_timeout, Duration::from_secs(10));
        assert_eq!(opts.settle_delay, Duration::ZERO);
    }

    #[test]
    fn test_args_skip_first_run_prompts() {
        let args = options().build_args();

        assert!(args.contains(&"--no-first-run".to_string()));
        assert!(args.contains(&"--no-default-browser-check".to_string()));
    }
}
