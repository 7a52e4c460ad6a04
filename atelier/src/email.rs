use anyhow::Context;
use atelier_config::EmailConfig;
use atelier_email_impl::EmailServiceImpl;

/// Build the SMTP email service from the configuration.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.smtp_url,
        config.from.clone(),
        config.send_timeout.into(),
    )
    .context("Failed to create SMTP transport")
}
