//! PoolCheck Engine - Main entry point.
//!
//! Speaks JSON lines on stdio: one `ClientMessage` per input line, one
//! `ServerMessage` per output line. Logs go to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poolcheck_engine::api::handle_message;
use poolcheck_engine::infrastructure::config::EngineConfig;
use poolcheck_engine::App;
use poolcheck_shared::{ClientMessage, ErrorCode, ServerMessage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root when run through cargo from `crates/engine`.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poolcheck_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(
        roll_mode = %config.roll_mode,
        gm_users = config.gm_users.len(),
        "Starting PoolCheck engine"
    );

    let app = App::in_memory(&config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<ClientMessage>(&line) {
            Ok(message) => handle_message(&app, message).await,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed message");
                ServerMessage::error(ErrorCode::BadRequest, "Malformed message")
            }
        };

        let mut out = serde_json::to_string(&reply)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
