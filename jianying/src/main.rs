use std::process::ExitCode;

use dotenv::dotenv;
use jianying_http::{create_server, ServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, trace};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let subscriber = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    if let Err(err) = subscriber {
        eprintln!("failed to init logger: {err}");
    }

    trace!("started!");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    trace!("current site root is {}", config.site_root.display());
    trace!("current index file is {}", config.index_file.display());

    let cancellation_token = CancellationToken::new();
    tokio::spawn({
        let cancellation_token = cancellation_token.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("shutting down");
                    cancellation_token.cancel();
                }
                Err(err) => error!("failed to listen for ctrl-c: {err}"),
            }
        }
    });

    if let Err(err) = create_server(cancellation_token, &config).await {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
