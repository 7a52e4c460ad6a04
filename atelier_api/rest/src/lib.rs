use std::net::IpAddr;

use atelier_core_contact_contracts::ContactFeatureService;
use atelier_core_health_contracts::HealthFeatureService;
use atelier_core_quote_contracts::QuoteFeatureService;
use atelier_di::Build;
use axum::Router;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact, Quote> {
    health: Health,
    contact: Contact,
    quote: Quote,
}

impl<Health, Contact, Quote> RestServer<Health, Contact, Quote>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Quote: QuoteFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::quote::router(self.quote.into()));

        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::cors::add(router);
        middlewares::panic_handler::add(router)
    }
}
