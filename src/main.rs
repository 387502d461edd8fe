use article_desk::{
    cli::{self, Args},
    config::AppConfig,
};
use clap::Parser;
use std::{io, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let config = AppConfig::from_env();

    let outcome = cli::run(args.command, &config, &mut io::stdout().lock());

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("[ERR] {err}");
            if let Some(cause) = err.chain().nth(1) {
                eprintln!("Cause: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
