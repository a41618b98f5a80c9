//! Exclusively-owned browser session over the Chrome DevTools Protocol.
//!
//! A [`BrowserSession`] couples the spawned Chromium process, its CDP
//! connection, and the event loop driving that connection. Closing the
//! session tears all three down; ownership makes the release exactly-once.

use std::path::Path;

use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::VerifyConfig;
use crate::error::{Error, Result};

const DISABLE_SETUID_SANDBOX: &str = "--disable-setuid-sandbox";
const DISABLE_DEV_SHM: &str = "--disable-dev-shm-usage";

/// A running browser process with an established CDP connection.
pub struct BrowserSession {
	browser: Browser,
	event_loop: JoinHandle<()>,
}

impl BrowserSession {
	/// Launch a browser process at `executable` and connect to it.
	///
	/// # Errors
	///
	/// Returns [`Error::Launch`] when the process cannot be spawned or the
	/// CDP connection cannot be established.
	pub async fn launch(config: &VerifyConfig, executable: &Path) -> Result<Self> {
		let browser_config = launch_config(config, executable)?;

		let (browser, mut handler) = Browser::launch(browser_config)
			.await
			.map_err(|err| Error::Launch(err.to_string()))?;

		// The handler stream must be polled for the CDP connection to make
		// progress; it ends when the browser process goes away.
		let event_loop = tokio::spawn(async move {
			while let Some(event) = handler.next().await {
				if event.is_err() {
					debug!(target = "smoke", "CDP event loop ended");
					break;
				}
			}
		});

		info!(
			target = "smoke",
			executable = %executable.display(),
			"browser launched"
		);

		Ok(Self {
			browser,
			event_loop,
		})
	}

	/// Open a fresh page and navigate it to `url`, waiting for the load to
	/// complete.
	///
	/// # Errors
	///
	/// Returns [`Error::Navigation`] for DNS, TLS, connectivity, and timeout
	/// failures.
	pub async fn navigate(&self, url: &str) -> Result<Page> {
		let page = self.browser.new_page("about:blank").await?;

		page.goto(url).await.map_err(|source| Error::Navigation {
			url: url.to_string(),
			source,
		})?;
		page.wait_for_navigation()
			.await
			.map_err(|source| Error::Navigation {
				url: url.to_string(),
				source,
			})?;

		Ok(page)
	}

	/// Release the session: close the browser, wait for the process to exit,
	/// and stop the event loop. Consumes the session.
	///
	/// # Errors
	///
	/// Returns the transport error when the close handshake fails; the
	/// process wait error when the spawned process cannot be reaped.
	pub async fn close(mut self) -> Result<()> {
		self.browser.close().await?;
		self.browser.wait().await?;
		self.event_loop.abort();

		info!(target = "smoke", "browser closed");
		Ok(())
	}
}

/// Assemble the launch configuration for `executable`.
fn launch_config(config: &VerifyConfig, executable: &Path) -> Result<BrowserConfig> {
	let mut builder = BrowserConfig::builder()
		.chrome_executable(executable)
		.request_timeout(config.timeout);

	if !config.headless {
		builder = builder.with_head();
	}

	if !config.sandbox {
		// Containerised hosts frequently cannot support the Chromium
		// sandbox, and their /dev/shm tends to be too small for the
		// renderer. Environment accommodations, not security choices.
		builder = builder.no_sandbox().args(compat_args());
	}

	for arg in &config.launch_args {
		builder = builder.arg(arg);
	}

	builder.build().map_err(Error::Launch)
}

fn compat_args() -> [&'static str; 2] {
	[DISABLE_SETUID_SANDBOX, DISABLE_DEV_SHM]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn existing_executable() -> std::path::PathBuf {
		std::env::current_exe().unwrap()
	}

	#[test]
	fn launch_config_builds_for_defaults() {
		let cfg = VerifyConfig::default();
		assert!(launch_config(&cfg, &existing_executable()).is_ok());
	}

	#[test]
	fn launch_config_accepts_extra_args() {
		let cfg = VerifyConfig {
			launch_args: vec!["--lang=en-US".to_string()],
			..VerifyConfig::default()
		};
		assert!(launch_config(&cfg, &existing_executable()).is_ok());
	}

	#[test]
	fn compat_args_disable_setuid_sandbox_and_shared_memory() {
		let args = compat_args();
		assert!(args.contains(&DISABLE_SETUID_SANDBOX));
		assert!(args.contains(&DISABLE_DEV_SHM));
	}
}
