use anyhow::Result;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordsplit::config::Config;
use wordsplit::driver;
use wordsplit::tokenizer::Tokenizer;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only tokens.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_cli()?;
    debug!(
        "separators {} ({} chars), max line length {}",
        config.separators,
        config.separators.len(),
        config.max_line_len
    );

    let tokenizer = Tokenizer::new(config.separators);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let summary = driver::run(stdin, stdout, &tokenizer, config.max_line_len)?;

    info!(
        "processed {} lines, {} tokens{}",
        summary.lines,
        summary.tokens,
        if summary.stopped_by_sentinel {
            " (sentinel)"
        } else {
            ""
        }
    );
    Ok(())
}
