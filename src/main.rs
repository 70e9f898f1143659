//! `tts-bootstrap`: search one product and print the raw response body
//!
//! Reads `TTS_APP_KEY`, `TTS_APP_SECRET`, `TTS_APP_ACCESS_TOKEN` and the
//! optional `TTS_SANDBOX` from the environment (or a `.env` file). Logs go to
//! stderr so stdout carries only the JSON body.

use tiktok_shop_sdk::{Bootstrap, Error, InvocationMode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Exit code for problems found before any request was sent
const EXIT_LOCAL: i32 = 2;

/// Exit code for transport and API failures
const EXIT_REMOTE: i32 = 1;

#[tokio::main]
async fn main() {
    // Load .env early; ignore if missing.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        error!(
            kind = ?err.kind(),
            status = ?err.status_code(),
            code = ?err.api_code(),
            request_id = ?err.request_id(),
            "{}",
            err
        );
        std::process::exit(exit_code(&err));
    }
}

async fn run() -> Result<(), Error> {
    let bootstrap = Bootstrap::from_env()?;
    let mut stdout = std::io::stdout();
    let _ = bootstrap.run(InvocationMode::Execute, &mut stdout).await?;
    Ok(())
}

fn exit_code(err: &Error) -> i32 {
    if err.is_local() {
        EXIT_LOCAL
    } else {
        EXIT_REMOTE
    }
}
