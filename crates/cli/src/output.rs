//! Console and JSON reporting for the smoke check.
//!
//! Text mode prints one green-checkmark line per completed step and a final
//! confirmation line, all on stdout. JSON mode keeps stdout to a single
//! envelope. Failures always produce exactly one cross-prefixed line on
//! stderr, whatever the format.

use colored::Colorize;
use serde::Serialize;
use smoke::{Reporter, Step, VerifyReport};

/// Output format selected with `-f/--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable checkmark lines
	#[default]
	Text,
	/// Single JSON envelope on stdout
	Json,
}

/// Result envelope emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct RunResult<'a> {
	pub ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<&'a VerifyReport>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<RunError>,
}

#[derive(Debug, Serialize)]
pub struct RunError {
	pub message: String,
}

/// Reporter printing a checkmark line per completed step.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
	fn step(&mut self, step: Step) {
		match step {
			Step::BrowserLaunched => {
				println!("{} Successfully launched browser", "✓".green());
			}
			Step::TitleRetrieved(title) => {
				println!("{} Page title: {title}", "✓".green());
			}
			Step::SessionClosed => {
				println!("{} Browser closed successfully", "✓".green());
			}
		}
	}
}

/// Print the success outcome for `format`.
pub fn print_report(report: &VerifyReport, format: OutputFormat) {
	match format {
		OutputFormat::Text => {
			println!();
			println!("Chromium installation is working correctly!");
		}
		OutputFormat::Json => {
			let envelope = RunResult {
				ok: true,
				data: Some(report),
				error: None,
			};
			println!("{}", to_json(&envelope));
		}
	}
}

/// Print the failure outcome: one error line on stderr, plus the envelope on
/// stdout in JSON mode.
pub fn print_failure(err: &anyhow::Error, format: OutputFormat) {
	eprintln!("{} Error: {err:#}", "✗".red());

	if format == OutputFormat::Json {
		let envelope = RunResult {
			ok: false,
			data: None,
			error: Some(RunError {
				message: format!("{err:#}"),
			}),
		};
		println!("{}", to_json(&envelope));
	}
}

fn to_json(envelope: &RunResult<'_>) -> String {
	serde_json::to_string(envelope).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn report() -> VerifyReport {
		VerifyReport {
			executable: PathBuf::from("/snap/bin/chromium"),
			url: "https://example.com/".to_string(),
			title: "Example Domain".to_string(),
		}
	}

	#[test]
	fn success_envelope_carries_data_and_no_error() {
		let report = report();
		let envelope = RunResult {
			ok: true,
			data: Some(&report),
			error: None,
		};

		let json: serde_json::Value = serde_json::from_str(&to_json(&envelope)).unwrap();
		assert_eq!(json["ok"], true);
		assert_eq!(json["data"]["title"], "Example Domain");
		assert!(json.get("error").is_none());
	}

	#[test]
	fn failure_envelope_carries_the_message() {
		let envelope = RunResult {
			ok: false,
			data: None,
			error: Some(RunError {
				message: "navigation failed: https://example.com/".to_string(),
			}),
		};

		let json: serde_json::Value = serde_json::from_str(&to_json(&envelope)).unwrap();
		assert_eq!(json["ok"], false);
		assert_eq!(json["error"]["message"], "navigation failed: https://example.com/");
		assert!(json.get("data").is_none());
	}
}
