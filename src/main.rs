use clap::Parser;
use pageview::ClientConfig;
use pageview::dispatch::{self, Batch};

mod args;
use args::{Args, to_properties};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let batch = Batch {
        urls: args.urls.clone(),
        event: args
            .event
            .clone()
            .map(|event| (event, to_properties(&args.props))),
    };

    if batch.is_empty() {
        ::log::error!("Nothing to report: pass at least one URL or --event");
        std::process::exit(1);
    }

    let config = match &args.config {
        Some(path) => match ClientConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ClientConfig::default(),
    }
    .apply_env();

    let output = match config.sink.build() {
        Ok(output) => output,
        Err(e) => {
            ::log::error!("Failed to open event output: {}", e);
            std::process::exit(1);
        }
    };

    let distinct_id = args.distinct_id.clone().or(config.distinct_id.clone());
    let summary = dispatch::dispatch(&batch, distinct_id, config.channel_capacity, output).await;

    ::log::info!(
        "Reported {} of {} events ({} failures)",
        summary.written,
        batch.len(),
        summary.failures
    );

    if summary.failures > 0 {
        std::process::exit(1);
    }
}
