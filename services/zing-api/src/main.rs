use std::sync::Arc;

use zing_api::{Server, ServerConfig, logging, secrets::SecretManager, zing::ZingClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let secrets = SecretManager::from_env();
    let config = ServerConfig::from_secrets(&secrets)?;

    let catalog = Arc::new(ZingClient::new(config.zing.clone()));
    let server = Server::bind(&config, catalog).await?;
    server.serve().await?;
    Ok(())
}
