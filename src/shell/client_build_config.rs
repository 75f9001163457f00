// Prints the client build configuration for the bundler.
//
// Usage: client_build_config [json|ts]

use tracing_subscriber::{EnvFilter, fmt};

use transcription::modules::client_build::adapters::outbound::vite_config::{
    render_json, render_vite_config,
};
use transcription::modules::client_build::core::build_config::BuildConfig;

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let format = std::env::args().nth(1).unwrap_or_else(|| "json".to_string());
    let config = BuildConfig::client();
    tracing::debug!(plugins = ?config.plugins, target = config.build.target.as_str(), "client build config");

    let rendered = match format.as_str() {
        "json" => render_json(&config)?,
        "ts" => render_vite_config(&config),
        other => anyhow::bail!("unknown format {other:?}, expected json or ts"),
    };
    println!("{rendered}");
    Ok(())
}
