use std::sync::Arc;

use atelier_core_quote_contracts::{QuoteFeatureService, QuoteRequestError};
use atelier_di::Build;
use atelier_email_contracts::{ContentType, Email, EmailService};
use atelier_models::{email_address::EmailAddressWithName, quote::QuoteRequest};
use atelier_shared_contracts::time::TimeService;
use tracing::warn;

#[derive(Debug, Clone, Build)]
pub struct QuoteFeatureServiceImpl<Time, Email> {
    time: Time,
    email: Email,
    config: QuoteFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct QuoteFeatureConfig {
    pub inbox: Arc<EmailAddressWithName>,
}

impl<Time, EmailS> QuoteFeatureService for QuoteFeatureServiceImpl<Time, EmailS>
where
    Time: TimeService,
    EmailS: EmailService,
{
    async fn request_quote(&self, request: QuoteRequest) -> Result<(), QuoteRequestError> {
        let email = Email {
            recipient: (*self.config.inbox).clone(),
            subject: format!("New quote request from {}", *request.name),
            body: format!(
                "Submitted on: {}\n\
                 Name: {}\n\
                 Email: {}\n\
                 Business type: {}\n\
                 Goal: {}\n\
                 Budget: {}\n\
                 Urgency: {}",
                self.time.now().to_rfc2822(),
                *request.name,
                request.email.as_str(),
                *request.business_type,
                *request.goal,
                *request.budget,
                *request.urgency,
            ),
            content_type: ContentType::Text,
            reply_to: Some(
                request
                    .email
                    .clone()
                    .with_name(request.name.clone().into_inner()),
            ),
        };

        match self.email.send(email).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                warn!("Failed to deliver quote request email");
                Err(QuoteRequestError::Send)
            }
            Err(err) => {
                warn!("Failed to deliver quote request email: {err}");
                Err(QuoteRequestError::Send)
            }
        }
    }
}
