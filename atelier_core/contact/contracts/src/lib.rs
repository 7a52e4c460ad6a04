use std::future::Future;

use atelier_models::contact::{ContactMessage, ContactMessageId, ContactSubmission};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Stores the submitted message and notifies the configured inbox.
    ///
    /// The message is stored before the notification is dispatched. If the
    /// notification cannot be delivered, the stored message is kept and the
    /// failure is reported via [`ContactSubmitError::Notify`].
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactMessage, ContactSubmitError>> + Send;

    /// Returns all stored messages in insertion order.
    fn list_messages(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Marks the message with the given id as read and returns it.
    ///
    /// Marking an already read message succeeds and returns the same state.
    fn mark_read(
        &self,
        message_id: ContactMessageId,
    ) -> impl Future<Output = Result<ContactMessage, ContactMarkReadError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to deliver the notification email.")]
    Notify,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactMarkReadError {
    #[error("The message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<ContactMessage, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_messages(mut self, messages: Vec<ContactMessage>) -> Self {
        self.expect_list_messages()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(messages))));
        self
    }

    pub fn with_mark_read(
        mut self,
        message_id: ContactMessageId,
        result: Result<ContactMessage, ContactMarkReadError>,
    ) -> Self {
        self.expect_mark_read()
            .once()
            .with(mockall::predicate::eq(message_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
