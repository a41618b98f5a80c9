use clap::Parser;
use smoke_cli::{
    cli::Cli,
    logging,
    output::{self, ConsoleReporter, OutputFormat},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let format = cli.format;

    if let Err(err) = run(cli).await {
        output::print_failure(&err, format);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let config = cli.to_config()?;

    let report = match format {
        OutputFormat::Text => smoke::run(&config, &mut ConsoleReporter).await?,
        // Keep stdout to the single envelope in JSON mode.
        OutputFormat::Json => smoke::run(&config, &mut smoke::SilentReporter).await?,
    };

    output::print_report(&report, format);
    Ok(())
}
