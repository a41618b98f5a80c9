//! Headless Chromium installation smoke check.
//!
//! Launches a local Chromium over the Chrome DevTools Protocol, navigates a
//! single page to a target URL, reads the document title, and releases the
//! browser again. One linear sequence, no retries: acquire, navigate,
//! extract, release, report.

pub mod config;
pub mod error;
pub mod locate;
pub mod session;
pub mod verify;

pub use config::VerifyConfig;
pub use error::{Error, Result};
pub use session::BrowserSession;
pub use verify::{Reporter, SilentReporter, Step, VerifyReport, run};
