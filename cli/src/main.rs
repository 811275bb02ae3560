//! CLI entrypoint for slr-assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use slr_application::{
    ExchangeLogger, GenerateQueryInput, GenerateQueryUseCase, GenerateQuestionsInput,
    GenerateQuestionsUseCase, ModelClient, NoExchangeLogger,
};
use slr_domain::{Answers, QuestionExtractor, ResponseEnvelope, parse_manual_query};
use slr_infrastructure::{ConfigLoader, FileConfig, JsonlExchangeLogger};
use slr_presentation::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout carries only results
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if cli.show_config {
        return show_config(&cli, &config);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let formatter = cli.output.formatter();

    let output = match command {
        Command::Questions { description } => {
            info!("Starting question pipeline");
            let use_case = GenerateQuestionsUseCase::new(build_client(&config)?)
                .with_params(config.questions.to_params())
                .with_exchange_logger(exchange_logger(&config));
            let envelope = use_case
                .execute(GenerateQuestionsInput::new(description))
                .await;
            formatter.format_questions(&envelope)
        }
        Command::Query {
            description,
            answers,
        } => {
            let answers = match answers {
                Some(json) => Answers::from_json(&json)?,
                None => Answers::new(),
            };
            info!("Starting query pipeline");
            let use_case = GenerateQueryUseCase::new(build_client(&config)?)
                .with_params(config.query.to_params())
                .with_exchange_logger(exchange_logger(&config));
            let output = use_case
                .execute(GenerateQueryInput::new(description).with_answers(answers))
                .await;
            formatter.format_query(&output.envelope, output.source)
        }
        Command::ParseQuestions { file } => {
            let raw = read_input(file.as_deref())?;
            formatter.format_questions(&QuestionExtractor::parse(&raw))
        }
        Command::ParseQuery { file, fenced } => {
            let raw = read_input(file.as_deref())?;
            let params = config.query.to_params();
            let accept_fenced = fenced || params.accept_fenced_json;
            let decoded = params.with_fenced_json(accept_fenced).decoder().parse(&raw);
            formatter.format_query(
                &ResponseEnvelope::success(decoded.structure),
                Some(decoded.source),
            )
        }
        Command::ParseManual { query } => {
            let structure = parse_manual_query(&query)?;
            formatter.format_query(&ResponseEnvelope::success(structure), None)
        }
    };

    println!("{}", output.trim_end());

    Ok(())
}

/// Create the model client described by the `[provider]` section.
fn build_client(config: &FileConfig) -> Result<Arc<dyn ModelClient>> {
    let client = config.provider.build_client()?;
    if !client.has_api_key() {
        debug!(
            "No API key found in {}; requests will fail",
            config.provider.api_key_env
        );
    }
    Ok(Arc::new(client))
}

/// JSONL transcript when `[logging] exchange_log` is set.
fn exchange_logger(config: &FileConfig) -> Arc<dyn ExchangeLogger> {
    match config
        .logging
        .exchange_log
        .as_ref()
        .and_then(JsonlExchangeLogger::open)
    {
        Some(logger) => {
            info!("Exchange log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoExchangeLogger),
    }
}

/// Read a completion from a file, or stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
    }
}

/// Print configuration sources and the effective configuration.
fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Configuration files disabled (--no-config); using built-in defaults.");
    } else {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
    }

    let mut shown = config.clone();
    if shown.provider.api_key.is_some() {
        shown.provider.api_key = Some("********".to_string());
    }

    println!();
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(&shown)?);

    Ok(())
}
