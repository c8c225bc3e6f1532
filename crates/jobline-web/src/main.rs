//! jobline-web server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, and serves the job board over HTTP.
//!
//! # Session secret generation
//!
//! `session_secret` must be a hex-encoded 64-byte key. To generate one:
//!
//! ```
//! cargo run -p jobline-web --bin server -- --generate-secret
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use jobline_store_sqlite::SqliteStore;
use jobline_web::{AppState, ServerConfig, uploads::UploadDir};
use rand_core::{OsRng, RngCore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Jobline job board server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print a fresh random session secret and exit.
  #[arg(long)]
  generate_secret: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if cli.generate_secret {
    let mut secret = [0u8; 64];
    OsRng.fill_bytes(&mut secret);
    println!("{}", hex::encode(secret));
    return Ok(());
  }

  // Defaults, then the optional file, then JOBLINE_* variables.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8000)?
    .set_default("base_url", "http://localhost:8000")?
    .set_default("store_path", "~/.local/share/jobline/jobline.db")?
    .set_default("upload_dir", "uploads")?
    .set_default("static_dir", "static")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("JOBLINE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let key = server_cfg
    .session_key()
    .context("invalid session_secret; generate one with --generate-secret")?;

  let store_path = expand_tilde(&server_cfg.store_path);
  if let Some(parent) = store_path.parent() {
    tokio::fs::create_dir_all(parent)
      .await
      .with_context(|| format!("failed to create {parent:?}"))?;
  }
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let upload_dir = expand_tilde(&server_cfg.upload_dir);
  let uploads = UploadDir::create(&upload_dir)
    .await
    .with_context(|| format!("failed to create upload directory {upload_dir:?}"))?;

  let state = AppState {
    store:   Arc::new(store),
    config:  Arc::new(server_cfg.clone()),
    uploads: Arc::new(uploads),
    key,
  };

  let app = jobline_web::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!(store = ?store_path, uploads = ?upload_dir, "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
