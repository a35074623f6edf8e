use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use meetscribe::config::{self, Config, DEFAULT_API_BASE, LaunchParams};
use meetscribe::headless::{self, HeadlessOptions};
use meetscribe::{Filter, HttpApi};

#[derive(Parser)]
#[command(name = "meetscribe")]
#[command(about = "Submit Google Meet recordings for transcription and browse the results")]
struct Cli {
    /// Base URL of the transcription backend
    #[arg(long, value_name = "URL", env = "MEETSCRIBE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Page URL whose `project_id` / `meeting_id` query parameters select what to open
    #[arg(long, value_name = "URL")]
    page_url: Option<String>,

    /// Project to open (overrides the page URL)
    #[arg(long, value_name = "ID", env = "MEETSCRIBE_PROJECT_ID")]
    project_id: Option<String>,

    /// Meeting to open (overrides the page URL)
    #[arg(long, value_name = "ID")]
    meeting_id: Option<String>,

    /// Run in the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Google Meet URL to submit if the input form comes up (headless only)
    #[arg(long, value_name = "MEET_URL")]
    submit: Option<String>,

    /// Title for the submitted meeting (headless only)
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Which meetings the list shows
    #[arg(long, value_name = "FILTER")]
    filter: Option<Filter>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "meetscribe=debug" } else { "meetscribe=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let launch = match &args.page_url {
        Some(page_url) => config::parse_page_url(page_url)?,
        None => LaunchParams::default(),
    }
    .with_overrides(args.project_id, args.meeting_id);
    let config = Config::new(&args.api_base, launch)?;
    tracing::debug!(api_base = %config.api_base, launch = ?config.launch, "starting");

    if args.headless {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
        let options = HeadlessOptions {
            submit: args.submit,
            title: args.title,
            filter: args.filter,
        };
        let api = Arc::new(HttpApi::new(config.api_base));
        let (launch, timings) = (config.launch, config.timings);
        let outcome = runtime.block_on(async {
            let mut stdout = std::io::stdout();
            tokio::select! {
                outcome = headless::run(api, launch, timings, options, &mut stdout) => outcome,
                _ = tokio::signal::ctrl_c() => anyhow::bail!("interrupted"),
            }
        })?;
        tracing::debug!(?outcome, "headless run finished");
        return Ok(());
    }

    run_gui(config, args.filter)
}

#[cfg(feature = "gui")]
fn run_gui(config: Config, filter: Option<Filter>) -> anyhow::Result<()> {
    if filter.is_some() {
        tracing::warn!("--filter only applies to headless runs");
    }
    meetscribe::gui::run(config).map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: Config, _filter: Option<Filter>) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; pass --headless")
}
