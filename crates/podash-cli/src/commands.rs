//! Command handlers

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use podash_app::service::SheetSource;
use podash_app::{model_digest, Config, DashboardService};
use podash_domain::DashboardModel;
use podash_infra::InsightClient;
use podash_types::{Error, OutputFormat, Result};
use tracing::warn;

use crate::cli::{Cli, Commands};
use crate::output::{output_model, output_summary};

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Show => {
            let mut service = make_service(&cli, &config)?;
            let model = refresh_with_spinner(&mut service, output_format).await?;
            output_model(output_format, &model)
        }

        Commands::Summary => {
            let mut service = make_service(&cli, &config)?;
            let model = refresh_with_spinner(&mut service, output_format).await?;
            output_summary(output_format, &model)
        }

        Commands::Insights { model } => {
            let insight_model = model.clone().unwrap_or_else(|| config.model.clone());
            cmd_insights(&cli, &config, insight_model).await
        }

        Commands::Watch { interval, cycles } => {
            cmd_watch(&cli, &config, output_format, *interval, *cycles).await
        }

        Commands::Config {
            show,
            set_sheet_url,
            set_model,
            set_output,
            set_timeout,
            reset,
        } => cmd_config(
            *show,
            set_sheet_url.clone(),
            set_model.clone(),
            *set_output,
            *set_timeout,
            *reset,
        ),
    }
}

fn make_service(cli: &Cli, config: &Config) -> Result<DashboardService> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let source = match &cli.source {
        Some(arg) => SheetSource::from_arg(arg),
        None => SheetSource::Url(config.sheet_url.clone()),
    };

    Ok(DashboardService::new(client, source))
}

/// One refresh cycle with a terminal spinner. In JSON mode the spinner is
/// skipped so stdout stays machine-readable.
async fn refresh_with_spinner(
    service: &mut DashboardService,
    output_format: OutputFormat,
) -> Result<DashboardModel> {
    if output_format == OutputFormat::Json {
        return Ok(service.refresh().await?.clone());
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Fetching sheet data...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = service.refresh().await.map(|m| m.clone());
    pb.finish_and_clear();
    result
}

async fn cmd_insights(cli: &Cli, config: &Config, model: String) -> Result<()> {
    let api_key = config.resolved_api_key().ok_or(Error::MissingApiKey)?;

    let mut service = make_service(cli, config)?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let dashboard = refresh_with_spinner(&mut service, output_format).await?;

    let digest = model_digest(&dashboard);
    if cli.verbose {
        eprintln!("Digest sent to model:\n{}", digest);
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs.max(60)))
        .build()?;
    let insights = InsightClient::new(client, model, api_key)
        .generate_insights(&digest)
        .await?;

    println!("AI Insights");
    println!("===========");
    for line in insights.lines().filter(|l| !l.trim().is_empty()) {
        println!("{}", line);
    }

    Ok(())
}

async fn cmd_watch(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    interval: u64,
    cycles: u64,
) -> Result<()> {
    let mut service = make_service(cli, config)?;
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    let mut completed = 0u64;

    loop {
        ticker.tick().await;

        match service.refresh().await {
            Ok(model) => {
                let now = chrono::Local::now().format("%H:%M:%S");
                println!("[{}] refreshed", now);
                output_summary(output_format, model)?;
            }
            Err(e) => {
                // keep showing the last good model; only log the failure
                warn!(error = %e, "refresh failed, keeping previous data");
                if cli.verbose {
                    eprintln!("Refresh failed: {}", e);
                }
            }
        }

        completed += 1;
        if cycles > 0 && completed >= cycles {
            break;
        }
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_sheet_url: Option<String>,
    set_model: Option<String>,
    set_output: Option<OutputFormat>,
    set_timeout: Option<u64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(url) = set_sheet_url {
        config.sheet_url = url;
        modified = true;
    }

    if let Some(model) = set_model {
        config.model = model;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(timeout) = set_timeout {
        config.timeout_secs = timeout;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
