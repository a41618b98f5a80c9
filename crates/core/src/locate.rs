//! Browser executable discovery.
//!
//! Attempts to locate a Chromium/Chrome binary in the following order:
//! 1. `SMOKE_BROWSER_EXE` environment variable (runtime override)
//! 2. Explicit path from configuration
//! 3. `PATH` lookup of well-known binary names
//! 4. Common install locations
//!
//! An explicitly requested path (override variable or configuration) must
//! exist; there is no fallback past it. Only the implicit searches cascade.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding all other discovery sources.
pub const BROWSER_EXE_ENV: &str = "SMOKE_BROWSER_EXE";

#[cfg(target_os = "linux")]
const BINARY_NAMES: &[&str] = &[
	"chromium",
	"chromium-browser",
	"google-chrome",
	"google-chrome-stable",
];

#[cfg(target_os = "macos")]
const BINARY_NAMES: &[&str] = &["chromium", "google-chrome", "chrome"];

#[cfg(target_os = "windows")]
const BINARY_NAMES: &[&str] = &["chrome.exe", "chromium.exe", "msedge.exe"];

#[cfg(target_os = "linux")]
const COMMON_LOCATIONS: &[&str] = &[
	"/usr/bin/chromium",
	"/usr/bin/chromium-browser",
	"/usr/bin/google-chrome",
	"/usr/bin/google-chrome-stable",
	"/snap/bin/chromium",
];

#[cfg(target_os = "macos")]
const COMMON_LOCATIONS: &[&str] = &[
	"/Applications/Chromium.app/Contents/MacOS/Chromium",
	"/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
];

#[cfg(target_os = "windows")]
const COMMON_LOCATIONS: &[&str] = &[
	"C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
	"C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
];

/// Resolve the browser executable for this run.
///
/// # Errors
///
/// Returns [`Error::ExecutableMissing`] when an explicitly requested path is
/// not on disk, and [`Error::BrowserNotFound`] when every implicit search
/// comes up empty.
pub fn locate_browser(configured: Option<&Path>) -> Result<PathBuf> {
	let env_override = std::env::var_os(BROWSER_EXE_ENV).map(PathBuf::from);
	resolve(env_override, configured)
}

fn resolve(env_override: Option<PathBuf>, configured: Option<&Path>) -> Result<PathBuf> {
	if let Some(path) = env_override {
		return checked(path, BROWSER_EXE_ENV);
	}

	if let Some(path) = configured {
		return checked(path.to_path_buf(), "configuration");
	}

	for name in BINARY_NAMES {
		if let Ok(path) = which::which(name) {
			debug!(
				target = "smoke",
				path = %path.display(),
				source = "PATH",
				"resolved browser executable"
			);
			return Ok(path);
		}
	}

	for location in COMMON_LOCATIONS {
		let path = PathBuf::from(location);
		if path.exists() {
			debug!(
				target = "smoke",
				path = %path.display(),
				source = "known location",
				"resolved browser executable"
			);
			return Ok(path);
		}
	}

	Err(Error::BrowserNotFound)
}

fn checked(path: PathBuf, source: &str) -> Result<PathBuf> {
	if path.exists() {
		debug!(
			target = "smoke",
			path = %path.display(),
			source,
			"resolved browser executable"
		);
		Ok(path)
	} else {
		Err(Error::ExecutableMissing(path))
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::TempDir;

	use super::*;

	fn fake_browser(dir: &TempDir) -> PathBuf {
		let path = dir.path().join("chromium");
		fs::write(&path, "#!/bin/sh\n").unwrap();
		path
	}

	#[test]
	fn override_variable_wins_over_configured_path() {
		let dir = TempDir::new().unwrap();
		let from_env = fake_browser(&dir);
		let configured = dir.path().join("other-chromium");

		let resolved = resolve(Some(from_env.clone()), Some(configured.as_path())).unwrap();
		assert_eq!(resolved, from_env);
	}

	#[test]
	fn missing_override_path_does_not_fall_back() {
		let dir = TempDir::new().unwrap();
		let configured = fake_browser(&dir);
		let missing = dir.path().join("gone");

		let err = resolve(Some(missing.clone()), Some(configured.as_path())).unwrap_err();
		match err {
			Error::ExecutableMissing(path) => assert_eq!(path, missing),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn configured_path_is_used_when_present() {
		let dir = TempDir::new().unwrap();
		let configured = fake_browser(&dir);

		let resolved = resolve(None, Some(configured.as_path())).unwrap();
		assert_eq!(resolved, configured);
	}

	#[test]
	fn missing_configured_path_is_an_error() {
		let dir = TempDir::new().unwrap();
		let missing = dir.path().join("gone");

		let err = resolve(None, Some(missing.as_path())).unwrap_err();
		assert!(matches!(err, Error::ExecutableMissing(_)));
	}

	#[cfg(target_os = "linux")]
	#[test]
	fn snap_chromium_is_a_known_location() {
		assert!(COMMON_LOCATIONS.contains(&"/snap/bin/chromium"));
	}
}
