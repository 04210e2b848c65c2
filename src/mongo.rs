use mongodb::Client;

use crate::config::MongoSettings;

/// Creates a MongoDB client handle. The driver only parses the URI here and
/// connects lazily on first use, so this succeeds even when the database is
/// unreachable.
pub async fn create_client(settings: &MongoSettings) -> Result<Client, mongodb::error::Error> {
    Client::with_uri_str(settings.connection_uri()).await
}
