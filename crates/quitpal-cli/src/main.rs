//! QuitPal server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use quitpal_corpus::{build_corpus, split_sentences, ArticleFetcher};
use quitpal_engine::ChatSession;
use quitpal_gateway::{GatewayServer, Sanitizer};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quitpal", about = "QuitPal — smoking cessation support chatbot")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "quitpal.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Deserialize, Default)]
struct QuitpalConfig {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    corpus: CorpusConfig,
    #[serde(default)]
    gateway: GatewayConfig,
}

#[derive(Deserialize)]
struct ServerConfig {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Deserialize)]
struct CorpusConfig {
    #[serde(default = "default_source_urls")]
    source_urls: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source_urls: default_source_urls(),
        }
    }
}

#[derive(Deserialize)]
struct GatewayConfig {
    #[serde(default = "default_max_msg_len")]
    max_message_length: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_msg_len(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_max_msg_len() -> usize {
    2_000
}
fn default_source_urls() -> Vec<String> {
    vec![
        "https://www.webmd.com/smoking-cessation/ss/slideshow-13-best-quit-smoking-tips-ever"
            .to_string(),
        "https://www.mayoclinic.org/healthy-lifestyle/quit-smoking/in-depth/nicotine-craving/art-20045454"
            .to_string(),
        "https://www.quit.org.au/".to_string(),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let cli = Cli::parse();

    // Load config; a missing file falls back to built-in defaults so the
    // binary runs without any setup.
    let config: QuitpalConfig = match tokio::fs::read_to_string(&cli.config).await {
        Ok(raw) => toml::from_str(&raw).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", cli.config.display(), e)
        })?,
        Err(e) => {
            warn!(
                config = %cli.config.display(),
                error = %e,
                "config file not readable, using defaults"
            );
            QuitpalConfig::default()
        }
    };

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            info!("Building corpus from {} source(s)", config.corpus.source_urls.len());
            let fetcher = ArticleFetcher::new()?;
            let corpus_text = build_corpus(&fetcher, &config.corpus.source_urls).await;
            let sentences = split_sentences(&corpus_text);
            info!(sentences = sentences.len(), "corpus ready");

            let session = Arc::new(ChatSession::new(sentences));
            info!(session_id = %session.id(), "chat session created");

            let sanitizer = Sanitizer::new(config.gateway.max_message_length);
            let app = GatewayServer::build_with_sanitizer(session, sanitizer);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("QuitPal gateway listening on {}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
