// src/main.rs

use aidigest::cli::{Cli, Commands, DigestArgs};
use aidigest::config::{ConfigBuilder, OutputDestination};
use aidigest::discovery::aggregate_with_progress;
use aidigest::errors::Error;
use aidigest::inference::models::{DEFAULT_MODEL, MODELS};
use aidigest::output::summary::{write_metrics_table, write_stats, write_tree};
use aidigest::output::writer::write_artifact;
#[cfg(feature = "progress")]
use aidigest::progress::IndicatifProgress;
use aidigest::progress::ProgressReporter;
use aidigest::source::fetch_source;
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the default level.
    let default_directive = if cfg!(debug_assertions) {
        "aidigest=debug"
    } else {
        "aidigest=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();

    log::info!("Starting aidigest v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Digest(args) => run_digest(&args),
        #[cfg(feature = "inference")]
        Commands::Ask(args) => run_ask(&args),
        Commands::Models => run_models(),
    };

    // --- Error Handling ---
    if let Err(e) = result {
        if let Some(Error::Interrupted) = e.downcast_ref::<Error>() {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Shows a progress bar only when stderr is a TTY.
fn progress_reporter() -> Option<Arc<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Some(Arc::new(IndicatifProgress::new()));
        }
    }
    None
}

fn run_digest(args: &DigestArgs) -> Result<()> {
    let progress = progress_reporter();

    #[cfg(feature = "git")]
    let depth = args.git_depth;
    #[cfg(not(feature = "git"))]
    let depth = None;

    // Keeps a cloned repository alive until the digest is written.
    let source = fetch_source(&args.source, depth, progress.clone())?;
    let config = ConfigBuilder::from_cli(args)
        .root_dir(source.path())
        .build()?;
    log::debug!("Configuration built successfully.");

    let result = aggregate_with_progress(&config, progress)?;

    let destination = if args.stdout {
        OutputDestination::Stdout
    } else if let Some(path) = &args.output {
        OutputDestination::File(path.clone())
    } else {
        OutputDestination::default_for(config.output_format)
    };
    write_artifact(&result.artifact, &destination)?;

    let stderr = std::io::stderr();
    let mut report = stderr.lock();
    if let OutputDestination::File(path) = &destination {
        writeln!(report, "Digest written to {}", path.display())?;
    }
    write_stats(&mut report, &result)?;
    if args.tree {
        write_tree(&mut report, &result.tree)?;
    }
    if args.metrics {
        write_metrics_table(&mut report, &result.metrics)?;
    }
    Ok(())
}

#[cfg(feature = "inference")]
fn run_ask(args: &aidigest::cli::AskArgs) -> Result<()> {
    use aidigest::inference::models::find_model;
    use aidigest::inference::{stream_to_writer, ChatRequest, GroqClient, InferenceProvider};
    use aidigest::signal::setup_signal_handler;
    use anyhow::Context;

    let token = setup_signal_handler()?;

    let artifact = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read digest '{}'", args.file.display()))?;

    let mut client = match &args.api_key {
        Some(key) => GroqClient::new(key.clone())?,
        None => GroqClient::from_env()?,
    };
    if let Some(base_url) = &args.base_url {
        client = client.with_base_url(base_url.clone());
    }

    if find_model(&args.model).is_none() {
        log::warn!(
            "Model '{}' is not in the known catalog; sending it anyway.",
            args.model
        );
    }

    let request = ChatRequest {
        model: args.model.clone(),
        system_prompt: args.system_prompt.clone(),
        artifact,
        question: args.question.clone(),
    };
    let stream = client.stream(&request)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let chunks = stream_to_writer(stream, &mut out, &token)?;
    writeln!(out)?;
    log::debug!("Answer streamed in {} chunks", chunks);
    Ok(())
}

fn run_models() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for model in MODELS {
        let marker = if model.id == DEFAULT_MODEL { " [default]" } else { "" };
        writeln!(out, "{}{}", model, marker)?;
    }
    Ok(())
}
