use mongodb::{
    Client, Collection,
    bson::doc,
    options::ClientOptions,
};
use std::time::Duration;

use crate::config::Config;
use crate::store::TodoDocument;

/// Name of the collection holding todo documents
pub const TODOS_COLLECTION: &str = "todos";

pub async fn connect(config: &Config) -> Result<Collection<TodoDocument>, mongodb::error::Error> {
    let mut options = ClientOptions::parse(config.mongo_uri()).await?;
    options.app_name = Some("todo-server".to_string());
    options.server_selection_timeout = Some(Duration::from_secs(5));

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);

    // Fail at startup rather than on the first request
    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        "Connected to MongoDB at {}:{} (database: {})",
        config.mongo_host,
        config.mongo_port,
        config.database
    );

    Ok(database.collection::<TodoDocument>(TODOS_COLLECTION))
}
