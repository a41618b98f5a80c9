use std::path::PathBuf;

use thiserror::Error;

use crate::locate::BROWSER_EXE_ENV;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures a verification run can end in.
///
/// Every variant maps to the same outcome at the top level: one error line
/// on stderr and exit status 1. The distinctions exist for diagnostics only.
#[derive(Debug, Error)]
pub enum Error {
	/// Discovery exhausted every candidate location.
	#[error("no usable browser executable found; set {BROWSER_EXE_ENV} or pass an explicit path")]
	BrowserNotFound,

	/// An explicitly requested executable is not on disk.
	#[error("browser executable does not exist: {0}")]
	ExecutableMissing(PathBuf),

	/// The browser process or its CDP connection could not be established.
	#[error("browser launch failed: {0}")]
	Launch(String),

	/// Navigation to the target URL failed (DNS, TLS, connectivity, timeout).
	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: chromiumoxide::error::CdpError,
	},

	/// The document title could not be read from the page.
	#[error("could not read page title for {url}")]
	Title { url: String },

	#[error(transparent)]
	Cdp(#[from] chromiumoxide::error::CdpError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
