//! Installation verifier: acquire, navigate, extract, release, report.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::VerifyConfig;
use crate::error::{Error, Result};
use crate::locate::locate_browser;
use crate::session::BrowserSession;

/// Progress notification emitted as a verification run advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	/// The browser process is up and its CDP connection established.
	BrowserLaunched,
	/// The document title was read from the target page.
	TitleRetrieved(String),
	/// The browser session was released cleanly.
	SessionClosed,
}

/// Receives progress steps while [`run`] advances.
///
/// The CLI installs a console reporter that prints one line per step; tests
/// install a recording reporter.
pub trait Reporter {
	fn step(&mut self, step: Step);
}

/// Reporter that drops every step, for callers that only want the final
/// report.
pub struct SilentReporter;

impl Reporter for SilentReporter {
	fn step(&mut self, _step: Step) {}
}

/// Successful verification outcome.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
	/// Browser executable the session ran.
	pub executable: PathBuf,
	/// URL the page navigated to.
	pub url: String,
	/// Document title read from the page.
	pub title: String,
}

/// Run the installation check once.
///
/// Resolves the browser executable, acquires a session, navigates a page to
/// the configured URL, reads the document title, and releases the session.
/// Strictly linear; no step starts before the previous one completed.
///
/// The session is released on the failure path as well. A close error during
/// error teardown is logged and the original failure returned; the spawned
/// process is never left behind silently.
///
/// # Errors
///
/// Any failure between executable discovery and session release surfaces as
/// an [`Error`]; callers map it to a single error line and exit status 1.
pub async fn run<R: Reporter>(config: &VerifyConfig, reporter: &mut R) -> Result<VerifyReport> {
	let executable = locate_browser(config.executable.as_deref())?;

	let session = BrowserSession::launch(config, &executable).await?;
	reporter.step(Step::BrowserLaunched);

	let title = match read_title(&session, &config.url).await {
		Ok(title) => title,
		Err(err) => {
			// Release before surfacing the failure so the browser process
			// does not outlive the check.
			if let Err(close_err) = session.close().await {
				warn!(
					target = "smoke",
					error = %close_err,
					"browser close failed during error teardown"
				);
			}
			return Err(err);
		}
	};
	reporter.step(Step::TitleRetrieved(title.clone()));

	session.close().await?;
	reporter.step(Step::SessionClosed);

	info!(target = "smoke", title = %title, "verification complete");

	Ok(VerifyReport {
		executable,
		url: config.url.clone(),
		title,
	})
}

async fn read_title(session: &BrowserSession, url: &str) -> Result<String> {
	let page = session.navigate(url).await?;

	page.get_title().await?.ok_or_else(|| Error::Title {
		url: url.to_string(),
	})
}
