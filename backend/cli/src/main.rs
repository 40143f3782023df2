mod config;
mod terminal_output;

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use insights::InsightSection;
use mindtrace_core::{AnalysisRequest, MindtraceError};
use mindtrace_journal::{JournalStore, SqliteJournal};
use mindtrace_provider::providers::mock::MockProvider;
use mindtrace_provider::providers::openrouter::OpenRouterProvider;
use mindtrace_provider::ProviderRegistry;

use config::Config;
use terminal_output as term;

#[derive(Parser)]
#[command(name = "mindtrace")]
#[command(about = "mindtrace — AI insights for personal behavior tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an AI analysis and render the insight cards
    Analyze {
        /// Analysis window in days
        #[arg(long, default_value_t = 30)]
        days: u32,
        /// Leave behavior patterns out of the analysis
        #[arg(long)]
        no_patterns: bool,
        /// Leave journal entries out of the analysis
        #[arg(long)]
        no_journals: bool,
        /// Leave medication records out of the analysis
        #[arg(long)]
        no_medications: bool,
        /// Provider to use ("openrouter" or "demo"); auto-selected when omitted
        #[arg(long)]
        provider: Option<String>,
        /// Model identifier passed to the provider
        #[arg(long)]
        model: Option<String>,
        /// Save every parsed section to the journal
        #[arg(long)]
        save_all: bool,
        /// Emit parsed sections as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Parse a markdown file (or stdin) into insight cards, no provider call
    Parse {
        /// Markdown file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Emit parsed sections as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Inspect or append saved journal entries
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },
}

#[derive(Subcommand)]
enum JournalCommands {
    /// List saved entries, newest first
    List,
    /// Save a file's (or stdin's) text under a title
    Save {
        /// Entry title
        #[arg(long)]
        title: String,
        /// Text file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init_logger(&config.log_dir, &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            days,
            no_patterns,
            no_journals,
            no_medications,
            provider,
            model,
            save_all,
            json,
        } => {
            let request = AnalysisRequest {
                include_patterns: !no_patterns,
                include_journals: !no_journals,
                include_medications: !no_medications,
                timeframe_days: days,
                model: model.unwrap_or_else(|| config.model.clone()),
            };
            run_analyze(&config, request, provider, save_all, json).await?;
        }
        Commands::Parse { file, json } => {
            let markdown = read_input(file)?;
            let sections = insights::parse(&markdown);
            print_sections(&sections, json);
        }
        Commands::Journal { command } => run_journal(&config, command).await?,
    }

    Ok(())
}

/// Build the provider registry from configuration.
fn build_registry(config: &Config) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register("demo", Arc::new(MockProvider::new("demo")));
    if let Some(key) = &config.openrouter_api_key {
        registry.register("openrouter", Arc::new(OpenRouterProvider::new(key.clone())));
    }
    registry
}

async fn run_analyze(
    config: &Config,
    request: AnalysisRequest,
    provider: Option<String>,
    save_all: bool,
    json: bool,
) -> Result<()> {
    let registry = build_registry(config);

    let name = provider.unwrap_or_else(|| {
        if config.openrouter_api_key.is_some() {
            "openrouter".to_string()
        } else {
            "demo".to_string()
        }
    });
    let Some(provider) = registry.get(&name) else {
        if name == "openrouter" {
            return Err(MindtraceError::MissingApiKey(name).into());
        }
        bail!(
            "unknown provider \"{name}\" (available: {})",
            registry.list().join(", ")
        );
    };

    if name == "demo" {
        term::note_info("demo provider selected; returning canned analysis");
    }

    let response = match provider.analyze(&request).await {
        Ok(response) => response,
        Err(err) => {
            term::note_error(&logging::redact_sensitive_data(&format!("{err:#}")));
            std::process::exit(1);
        }
    };
    info!(
        provider = %response.provider,
        model = %response.model,
        tokens_used = response.tokens_used,
        latency_ms = response.latency_ms,
        "Analysis complete"
    );

    let sections = insights::parse(&response.content);
    print_sections(&sections, json);

    if save_all {
        let store = SqliteJournal::open(&config.db_path)?;
        for section in &sections {
            store.save(&section.title, &section.full_text()).await?;
        }
        term::note_success(&format!("saved {} section(s) to the journal", sections.len()));
    }

    Ok(())
}

async fn run_journal(config: &Config, command: JournalCommands) -> Result<()> {
    let store = SqliteJournal::open(&config.db_path)?;
    match command {
        JournalCommands::List => {
            let entries = store.list().await?;
            if entries.is_empty() {
                term::note_info("journal is empty");
                return Ok(());
            }
            for entry in entries {
                let when = chrono::DateTime::from_timestamp(entry.created_at, 0)
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{when}  {}  {}", entry.id, entry.title);
            }
        }
        JournalCommands::Save { title, file } => {
            let content = read_input(file)?;
            let entry = store.save(&title, content.trim_end()).await?;
            term::note_success(&format!("saved \"{}\" ({})", entry.title, entry.id));
        }
    }
    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_sections(sections: &[InsightSection], json: bool) {
    if json {
        let value: Vec<_> = sections
            .iter()
            .map(|s| {
                let style = s.style();
                serde_json::json!({
                    "title": s.title,
                    "bullets": s.bullets,
                    "paragraph": s.paragraph,
                    "icon": style.icon,
                    "tint": style.tint,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else if sections.is_empty() {
        term::note_info("nothing to show: input was empty");
    } else {
        print!("{}", term::render_cards(sections, term::supports_color()));
    }
}
