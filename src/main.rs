use std::process::ExitCode;

use greeter::config::Config;
use greeter::error::Error;
use greeter::startup;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    std_logger::Config::logfmt().init();

    let config = match Config::get().map_err(Error::from) {
        Ok(config) => config,
        Err(error) => {
            log::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(error) => {
            log::error!("Unable to bind '{address}'. Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = startup::create_web_server(config, listener).await {
        log::error!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
