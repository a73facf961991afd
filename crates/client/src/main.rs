use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use paysign_client::config::Secret;
use paysign_client::{Config, run};

#[derive(Parser)]
struct Args {
    /// Path to the JSON configuration file.
    #[clap(long, default_value = "config.json")]
    config: PathBuf,
    /// Bundle password; overrides the config file value.
    #[clap(long, env = "PFX_PASSWORD", hide_env_values = true)]
    pfx_password: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error:#}");
            std::process::exit(1);
        }
    };
    if let Some(password) = args.pfx_password {
        config.pfx_password = Some(Secret::from(password));
    }

    init_logging(config.log_file.as_deref());

    if let Err(error) = run(config).await {
        tracing::error!("{error:#}");
        std::process::exit(1);
    }
}

fn init_logging(log_file: Option<&Path>) {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .expect("failed to open log file");
            tracing_subscriber::fmt()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => tracing_subscriber::fmt::init(),
    }
}
