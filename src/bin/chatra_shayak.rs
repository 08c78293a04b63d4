//! CLI binary for chatra-shayak.

use anyhow::Context;
use chatra_shayak::page::SubmitOutcome;
use chatra_shayak::profile::{InputKind, ProfileField};
use chatra_shayak::ui::landing::banner;
use chatra_shayak::{
    AppConfig, HttpBackend, Page, PageStep, ProxyBackend, SearchBackend, SearchProxy, SearchServer,
};
use clap::{Parser, Subcommand};
use scholar_search::{EnvCredential, TavilyProvider};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Chatra Shayak: find scholarships that match a student profile.
#[derive(Parser)]
#[command(name = "chatra-shayak", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the search API and the web page.
    Serve {
        /// Interface to bind (overrides config).
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fill in the profile in the terminal and print matching scholarships.
    Find {
        /// Base URL of a running server (defaults to the configured address).
        #[arg(long, conflicts_with = "direct")]
        server: Option<String>,
        /// Call the search provider from this process instead of a server.
        #[arg(long)]
        direct: bool,
    },

    /// Write a default config file (to --config or the default path).
    InitConfig {
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chatra_shayak=info,scholar_search=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    match command {
        Command::Serve { host, port } => {
            let config = AppConfig::load(cli.config.as_deref())?;
            run_serve(config, host, port).await
        }
        Command::Find { server, direct } => {
            let config = AppConfig::load(cli.config.as_deref())?;
            run_find(config, server, direct).await
        }
        Command::InitConfig { force } => {
            let path = cli.config.unwrap_or_else(AppConfig::default_config_path);
            AppConfig::write_default(&path, force)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}

fn build_proxy(config: &AppConfig) -> anyhow::Result<SearchProxy> {
    let credential = Arc::new(EnvCredential::new(config.provider.api_key_env.clone()));
    if std::env::var(&config.provider.api_key_env).is_err() {
        tracing::warn!(
            var = %config.provider.api_key_env,
            "search provider API key is not set; searches will be rejected"
        );
    }
    let provider = TavilyProvider::new(config.provider.search.clone(), credential)
        .context("invalid provider configuration")?;
    Ok(SearchProxy::new(Arc::new(provider)))
}

async fn run_serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    let proxy = build_proxy(&config)?;
    let server = SearchServer::start(&config.server, proxy, config.ui.clone()).await?;
    println!("Chatra Shayak running at {}", server.url());

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;
    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}

async fn run_find(config: AppConfig, server: Option<String>, direct: bool) -> anyhow::Result<()> {
    config.validate()?;

    let backend: Box<dyn SearchBackend> = if direct {
        Box::new(ProxyBackend::new(build_proxy(&config)?))
    } else {
        let base = server.unwrap_or_else(|| {
            format!("http://{}:{}", config.server.host, config.server.port)
        });
        Box::new(HttpBackend::new(&base)?)
    };

    println!("{}", banner());
    let mut page = Page::new(config.ui.clone());
    page.start();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        match page.step() {
            PageStep::Landing => {
                page.start();
            }
            PageStep::Form => {
                let step = page.wizard().step();
                println!("\nStudent Information: {step}");
                if let Some(notice) = page.notice() {
                    println!("! {notice}");
                }
                for field in step.fields() {
                    prompt_field(&mut page, &mut input, *field)?;
                }

                if step.next().is_some() {
                    if !page.next() {
                        print_errors(&page);
                    }
                    continue;
                }

                println!("Searching...");
                match page.submit(backend.as_ref()).await {
                    SubmitOutcome::Results(_) => {}
                    SubmitOutcome::Rejected(_) => print_errors(&page),
                    SubmitOutcome::SearchFailed => {
                        if !confirm(&mut input, "Search failed. Try again?")? {
                            return Ok(());
                        }
                    }
                    SubmitOutcome::Ignored => {}
                }
            }
            PageStep::Results => {
                println!("\n{}", page.results_view());
                if !confirm(&mut input, "Modify search?")? {
                    return Ok(());
                }
                page.back();
            }
        }
    }
}

fn print_errors(page: &Page) {
    for (field, message) in page.wizard().errors() {
        println!("  {}: {message}", field.label());
    }
}

fn read_line(input: &mut impl BufRead) -> anyhow::Result<String> {
    std::io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line.trim().to_owned())
}

fn confirm(input: &mut impl BufRead, question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    let answer = read_line(input)?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Prompt for one field. An empty answer keeps the current value.
fn prompt_field(page: &mut Page, input: &mut impl BufRead, field: ProfileField) -> anyhow::Result<()> {
    let Some(kind) = field.input() else {
        return Ok(());
    };
    let current = page.profile().get(field).to_owned();
    let error = page.wizard().error(field).map(str::to_owned);

    match kind {
        InputKind::Text(hint) => {
            print!("{} ({hint})", field.label());
        }
        InputKind::Select { prompt, options } => {
            println!("{} ({prompt}):", field.label());
            for (i, option) in options.iter().enumerate() {
                println!("  {:>2}. {option}", i + 1);
            }
            print!("Choice");
        }
    }
    if let Some(error) = &error {
        print!(" [{error}]");
    }
    if !current.is_empty() {
        print!(" [{current}]");
    }
    print!(": ");

    let answer = read_line(input)?;
    if answer.is_empty() {
        return Ok(());
    }

    let value = match kind {
        InputKind::Select { options, .. } => match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_owned(),
            _ => options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(&answer))
                .map(|o| (*o).to_owned())
                .unwrap_or(answer),
        },
        InputKind::Text(_) => answer,
    };
    page.edit(field, value);
    Ok(())
}
