use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use og_story::models::{AppConfig, Story, StoryParams};
use og_story::rendering::render_story_svg;
use og_story::server::{self, AppState};
use og_story::services::{Clock, FixedClock, SystemClock};

#[derive(Parser)]
#[command(name = "og-story")]
#[command(about = "Open Graph story card renderer for social link previews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render a story card directly to an SVG file
    Render {
        /// Country code (e.g. "UA")
        #[arg(short, long)]
        country: Option<String>,

        /// Content type: ciianalysis, crisisalert, dailybrief, marketfocus
        #[arg(short = 't', long = "type")]
        content_type: Option<String>,

        /// Country Instability Index score
        #[arg(short, long)]
        score: Option<String>,

        /// Severity level: critical, high, elevated, normal, low
        #[arg(short, long)]
        level: Option<String>,

        /// Footer date as YYYY-MM-DD (defaults to today, UTC)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output SVG file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            country,
            content_type,
            score,
            level,
            date,
            output,
        }) => {
            let params = StoryParams {
                country,
                content_type,
                score,
                level,
            };
            run_render_command(params, date, output)
        }
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Render a story card without starting the server
fn run_render_command(
    params: StoryParams,
    date: Option<NaiveDate>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "og_story=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let clock: Box<dyn Clock> = match date {
        Some(d) => Box::new(FixedClock(d)),
        None => Box::new(SystemClock),
    };

    let story = Story::resolve(&params, clock.today());
    let svg = render_story_svg(&story);

    match output {
        Some(path) => {
            std::fs::write(&path, &svg)?;
            eprintln!("Rendered {} ({} bytes)", path.display(), svg.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();

    println!("og-story v{VERSION}");
    println!("Open Graph story card renderer\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR = {}",
        bind_addr
            .as_deref()
            .unwrap_or("0.0.0.0:3000 (default)")
    );

    println!("\nEndpoints:");
    println!("  GET /api/og-story?c=&t=&s=&l=   Story card (SVG)");
    println!("  GET /api-docs/openapi.json      OpenAPI document");
    println!("  GET /health                     Health check");

    println!("\nCommands:");
    println!("  og-story serve    Start the HTTP server");
    println!("  og-story render   Render a story card to SVG");
    println!("\nRun 'og-story --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "og_story=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let state = AppState::new(Arc::new(SystemClock));
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "og-story server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
