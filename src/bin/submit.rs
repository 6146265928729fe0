//! One-shot task submitter.
//!
//! Posts a task to a running launchpad server through the same
//! transport the panel widget uses:
//!
//! ```text
//! launchpad-submit "refactor login module"
//! ```
//!
//! The server address comes from `LAUNCHPAD_URL` (default
//! `http://127.0.0.1:8080`).

use launchpad::widget::notify::{LogNotifier, Notifier};
use launchpad::widget::transport::{HttpTransport, TaskTransport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launchpad=info".into()),
        )
        .init();

    let task = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let task = task.trim().to_string();
    if task.is_empty() {
        anyhow::bail!("usage: launchpad-submit <task text>");
    }

    let base_url =
        std::env::var("LAUNCHPAD_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

    let response = HttpTransport::new(&base_url).submit(&task).await?;
    tracing::debug!("Server response: {}", response);

    LogNotifier.notify(&format!("Agent for task \"{}\" launched!", task));

    Ok(())
}
