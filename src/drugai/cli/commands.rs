//! Per-command handlers.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_api()`: Builds the `DrugaiApi` from configuration and environment
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{
    print_config, print_inference, print_messages, print_page, print_plans, print_tags,
};
use super::setup::{BrowseArgs, Cli, Commands};
use clap::Parser;
use console::Term;
use drugai::api::{ConfigAction, DrugaiApi};
use drugai::auth::EnvCredentials;
use drugai::config::{resolve_config_dir, DrugaiConfig};
use drugai::error::{DrugaiError, Result};
use drugai::pipeline::SortOption;
use drugai::service::{HttpTransport, Transport, Unconfigured};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "DRUGAI_LOG";

type CliApi = DrugaiApi<Box<dyn Transport>, EnvCredentials>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Models(args)) => handle_models(&api, args),
        Some(Commands::Tags) => handle_tags(&api),
        Some(Commands::Pricing) => handle_pricing(&api),
        Some(Commands::Subscribe { email }) => handle_subscribe(&api, email),
        Some(Commands::Invoke { prompt }) => handle_invoke(&api, prompt),
        Some(Commands::Status) => handle_status(&api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_models(&api, BrowseArgs::default()),
    }
}

/// `DRUGAI_LOG` wins; otherwise `--verbose` means debug and the default is warn.
fn setup_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)))
        .try_init();
}

fn init_api(cli: &Cli) -> Result<CliApi> {
    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    let config = DrugaiConfig::load(&config_dir)?.with_env_overrides();
    tracing::debug!(dir = %config_dir.display(), "configuration loaded");

    let transport: Box<dyn Transport> = match &config.api_url {
        Some(url) => Box::new(HttpTransport::new(url.as_str(), config.request_timeout())?),
        None => Box::new(Unconfigured),
    };

    Ok(DrugaiApi::from_config(
        transport,
        EnvCredentials::default(),
        config,
        config_dir,
    ))
}

fn terminal_width() -> Option<u16> {
    Term::stdout().size_checked().map(|(_rows, cols)| cols)
}

fn handle_models(api: &CliApi, args: BrowseArgs) -> Result<()> {
    if args.page_size == Some(0) {
        return Err(DrugaiError::Api("--page-size must be at least 1".into()));
    }

    let mut view = api.initial_view(terminal_width());
    if let Some(size) = args.page_size {
        view = view.with_page_size(size);
    }
    if let Some(tag) = args.tag {
        view = view.with_tag(tag);
    }
    if let Some(term) = args.search {
        view = view.with_search(term);
    }
    if let Some(label) = args.sort {
        view = view.with_sort(SortOption::from_label(&label));
    }

    let today = chrono::Local::now().date_naive();
    let result = api.browse(view, args.page.unwrap_or(1), today)?;
    if let Some(page) = &result.page {
        print_page(page, today);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(api: &CliApi) -> Result<()> {
    let result = api.tags()?;
    print_tags(&result.tags);
    print_messages(&result.messages);
    Ok(())
}

fn handle_pricing(api: &CliApi) -> Result<()> {
    let result = api.pricing()?;
    print_plans(&result.plans);
    print_messages(&result.messages);
    Ok(())
}

fn handle_subscribe(api: &CliApi, email: Option<String>) -> Result<()> {
    let result = api.subscribe(email.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_invoke(api: &CliApi, prompt: Vec<String>) -> Result<()> {
    let prompt = prompt.join(" ");
    let result = api.invoke(&prompt)?;
    if let Some(response) = &result.inference {
        print_inference(response);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(api: &CliApi) -> Result<()> {
    let result = api.status()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &CliApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
