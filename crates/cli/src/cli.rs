use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use smoke::VerifyConfig;
use smoke::config::DEFAULT_TARGET_URL;

use crate::output::OutputFormat;

/// Clap styling matching cargo's help output colors.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
}

/// All flags are optional; a zero-argument invocation runs the check with
/// the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "browser-smoke")]
#[command(about = "Verify a local headless-Chromium installation end to end")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: text (default) or json
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// URL the check navigates to
	#[arg(long, value_name = "URL", default_value = DEFAULT_TARGET_URL)]
	pub url: String,

	/// Browser executable to launch (skips discovery)
	#[arg(long, value_name = "PATH")]
	pub executable: Option<PathBuf>,

	/// Upper bound for navigation and other CDP requests, in milliseconds
	#[arg(long, value_name = "MS", default_value_t = 30_000)]
	pub timeout_ms: u64,

	/// Keep the Chromium sandbox enabled (disabled by default for
	/// containerised hosts)
	#[arg(long)]
	pub sandbox: bool,

	/// Launch with a visible window instead of headless
	#[arg(long)]
	pub headful: bool,

	/// Extra argument for the browser command line (repeatable)
	#[arg(long = "launch-arg", value_name = "ARG", allow_hyphen_values = true)]
	pub launch_args: Vec<String>,
}

impl Cli {
	/// Turn parsed flags into a run configuration, validating the URL early
	/// so a typo fails before a browser is spawned.
	pub fn to_config(&self) -> anyhow::Result<VerifyConfig> {
		let url =
			url::Url::parse(&self.url).with_context(|| format!("invalid URL: {}", self.url))?;

		Ok(VerifyConfig {
			url: url.into(),
			executable: self.executable.clone(),
			headless: !self.headful,
			sandbox: self.sandbox,
			timeout: Duration::from_millis(self.timeout_ms),
			launch_args: self.launch_args.clone(),
		})
	}
}
