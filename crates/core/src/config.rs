use std::path::PathBuf;
use std::time::Duration;

/// URL the check navigates to when none is configured.
pub const DEFAULT_TARGET_URL: &str = "https://example.com";

/// Upper bound applied to CDP requests, navigation included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fully owned configuration for one verification run.
///
/// The defaults reproduce the zero-argument behavior: headless launch,
/// sandboxing off, `https://example.com` as the target, executable resolved
/// by discovery.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
	/// URL the page navigates to.
	pub url: String,
	/// Explicit browser executable; discovery runs when unset.
	pub executable: Option<PathBuf>,
	/// Whether the browser launches headless.
	pub headless: bool,
	/// Whether OS-level process sandboxing stays enabled.
	///
	/// Off by default: containerised hosts frequently cannot support the
	/// Chromium sandbox. An environment accommodation, not a security choice.
	pub sandbox: bool,
	/// Upper bound for navigation and other CDP requests.
	pub timeout: Duration,
	/// Extra arguments appended to the browser command line.
	pub launch_args: Vec<String>,
}

impl Default for VerifyConfig {
	fn default() -> Self {
		Self {
			url: DEFAULT_TARGET_URL.to_string(),
			executable: None,
			headless: true,
			sandbox: false,
			timeout: DEFAULT_TIMEOUT,
			launch_args: Vec::new(),
		}
	}
}
