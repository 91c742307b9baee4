use std::io::{Read, Write};

use anyhow::Context;
use greeting_function::{GreetingEvent, handle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Reads one invocation event from stdin and writes the response to stdout.
fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read event from stdin")?;

    let event: GreetingEvent = if raw.trim().is_empty() {
        GreetingEvent::default()
    } else {
        serde_json::from_str(&raw).context("failed to parse invocation event")?
    };
    debug!(?event, "invocation event received");

    let response = handle(&event).context("failed to build greeting response")?;
    info!(status_code = response.status_code, "greeting handled");

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response).context("failed to write response")?;
    writeln!(stdout)?;
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
