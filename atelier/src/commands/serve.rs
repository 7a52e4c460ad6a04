use atelier_config::Config;
use atelier_di::Provide;
use atelier_email_contracts::EmailService;
use atelier_persistence_memory::contact::MemoryContactMessageRepository;
use tracing::info;

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let contact_repo = MemoryContactMessageRepository::default();

    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, contact_repo, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
