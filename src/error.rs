use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read the configuration. Error: '{0}'.")]
    Config(#[from] config::ConfigError),
    #[error("Unable to create the MongoDB client. Error: '{0}'.")]
    Mongo(#[from] mongodb::error::Error),
    #[error("The web server failed. Error: '{0}'.")]
    Io(#[from] std::io::Error),
}
