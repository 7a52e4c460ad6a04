use std::future::Future;

use atelier_models::quote::QuoteRequest;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait QuoteFeatureService: Send + Sync + 'static {
    /// Relays the quote request to the configured inbox.
    fn request_quote(
        &self,
        request: QuoteRequest,
    ) -> impl Future<Output = Result<(), QuoteRequestError>> + Send;
}

#[derive(Debug, Error)]
pub enum QuoteRequestError {
    #[error("Failed to deliver the quote request email.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockQuoteFeatureService {
    pub fn with_request_quote(
        mut self,
        request: QuoteRequest,
        result: Result<(), QuoteRequestError>,
    ) -> Self {
        self.expect_request_quote()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
