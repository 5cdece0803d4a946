use anyhow::{Context, Result};
use stripes_emit::ConfigEmitter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let emitter = ConfigEmitter::default();
    emitter
        .run()
        .with_context(|| format!("failed to write {}", emitter.output().display()))?;
    Ok(())
}
