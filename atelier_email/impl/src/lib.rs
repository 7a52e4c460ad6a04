use std::time::Duration;

use anyhow::anyhow;
use atelier_email_contracts::{ContentType, Email, EmailService};
use atelier_models::email_address::EmailAddressWithName;
use atelier_utils::Apply;
use lettre::{
    message::{header, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    send_timeout: Duration,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub fn new(
        url: &str,
        from: EmailAddressWithName,
        send_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self {
            from,
            send_timeout,
            transport,
        })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to, |builder, reply_to| {
                MessageBuilder::reply_to(builder, reply_to.0)
            })
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            })
            .body(email.body)?;

        match tokio::time::timeout(self.send_timeout, self.transport.send(message)).await {
            Ok(response) => response
                .map(|response| response.is_positive())
                .map_err(Into::into),
            Err(_) => Err(anyhow!(
                "Sending email timed out after {:?}",
                self.send_timeout
            )),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match tokio::time::timeout(self.send_timeout, self.transport.test_connection()).await {
            Ok(result) => result?
                .then_some(())
                .ok_or_else(|| anyhow!("Failed to ping smtp server")),
            Err(_) => Err(anyhow!(
                "Pinging smtp server timed out after {:?}",
                self.send_timeout
            )),
        }
    }
}
