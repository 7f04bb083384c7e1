use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use ddj_toolkit::directory::Directory;
use ddj_toolkit::render;
use ddj_toolkit::source::{DataSource, FileSource, HttpSource, load_dataset};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ddj-toolkit")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("ddj-toolkit.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// CLI flags win over the config file
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(dir) = &cli.data_dir {
        config.source.data_dir = Some(dir.clone());
    }
    if let Some(url) = &cli.base_url {
        config.source.base_url = url.clone();
        if cli.data_dir.is_none() {
            config.source.data_dir = None;
        }
    }
}

fn build_source(config: &Config) -> Result<Box<dyn DataSource>> {
    if let Some(dir) = &config.source.data_dir {
        return Ok(Box::new(FileSource::new(dir)));
    }
    let source = HttpSource::new(config.source.base_url.clone(), config.source.timeout())
        .context("Failed to create HTTP source")?;
    Ok(Box::new(source))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let source = build_source(config)?;
    if cli.is_verbose() {
        println!("{} {}", "Loading from:".cyan(), source.location());
    }

    let dataset = load_dataset(source.as_ref(), config.load_options())
        .await
        .context("Failed to load tool directory")?;
    let mut directory = Directory::new(dataset, config.page);

    match &cli.command {
        None => handle_list_command(&mut directory, &[], &[], false, None, false),
        Some(Commands::List {
            categories,
            platforms,
            open_source,
            search,
            json,
        }) => handle_list_command(
            &mut directory,
            categories,
            platforms,
            *open_source,
            search.as_deref(),
            *json,
        ),
        Some(Commands::Categories) => handle_categories_command(&directory),
        Some(Commands::Platforms) => handle_platforms_command(&directory),
    }
}

fn handle_list_command(
    directory: &mut Directory,
    categories: &[String],
    platforms: &[String],
    open_source: bool,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    info!(
        "Listing tools - categories: {:?}, platforms: {:?}, open source: {}, search: {:?}",
        categories, platforms, open_source, search
    );

    for label in categories {
        if !directory.selections().categories.contains(label) {
            bail!("Unknown category '{}' (see `ddj-toolkit categories`)", label);
        }
        directory.check_category(label, true);
    }
    for label in platforms {
        if !directory.selections().platforms.contains(label) {
            bail!("Unknown platform '{}' (see `ddj-toolkit platforms`)", label);
        }
        directory.check_platform(label, true);
    }
    directory.set_open_source_only(open_source);

    if let Some(query) = search {
        if !directory.config().search {
            let notice = "Search is disabled for this page variant; ignoring --search";
            println!("{}", notice.yellow());
        }
        directory.set_search(query);
    }

    let results = directory.results();
    if json {
        let body = render::results_json(&results).context("Failed to serialize results")?;
        println!("{}", body);
    } else {
        println!("{}", render::results(&results, &directory.dataset().platforms));
        if directory.is_filtered() {
            let total = directory.dataset().active_count();
            println!("{}", format!("de {} ferramentas", total).dimmed());
        }
    }
    Ok(())
}

fn handle_categories_command(directory: &Directory) -> Result<()> {
    info!("Listing categories");
    let tools = &directory.dataset().tools;
    for option in directory.selections().categories.options() {
        let count = tools
            .iter()
            .filter(|t| !t.is_disabled && t.category == option.label)
            .count();
        println!("{} {}", option.label.cyan(), format!("({})", count).dimmed());
    }
    Ok(())
}

fn handle_platforms_command(directory: &Directory) -> Result<()> {
    info!("Listing platforms");
    let tools = &directory.dataset().tools;
    for option in directory.selections().platforms.options() {
        let count = tools
            .iter()
            .filter(|t| !t.is_disabled && t.has_platform(&option.label))
            .count();
        println!("{} {}", option.label.cyan(), format!("({})", count).dimmed());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_overrides(&cli, &mut config);
    config.source.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
