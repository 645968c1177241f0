use postmark_exporter::app::{App, ShutdownReason};
use postmark_exporter::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {err}");
            std::process::exit(1);
        }
    };

    config.logging.init();
    info!(interval = ?config.polling_interval, "postmark exporter starting");

    match App::run(config).await {
        Ok(ShutdownReason::Signal) => info!("postmark exporter stopped"),
        Ok(ShutdownReason::PollFailed(err)) => {
            error!(error = %err, "poll loop failed");
            std::process::exit(1);
        }
        Ok(ShutdownReason::ServeFailed(err)) => {
            error!(error = %err, "metrics server failed");
            std::process::exit(1);
        }
        Err(err) => {
            error!(error = %err, "Fatal error");
            std::process::exit(1);
        }
    }
}
