use std::future::Future;

use atelier_models::contact::{ContactMessage, ContactMessageId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageRepository: Send + Sync + 'static {
    /// Appends a new message to the store.
    ///
    /// Returns an error if a message with the same id already exists.
    fn create(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Returns all stored messages in insertion order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Sets the `read` flag of the message with the given id and returns the
    /// updated message, or `None` if no such message exists.
    ///
    /// Marking an already read message succeeds and leaves it read.
    fn mark_read(
        &self,
        message_id: ContactMessageId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactMessageRepository {
    pub fn with_create(mut self, message: ContactMessage) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_list(mut self, messages: Vec<ContactMessage>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(messages))));
        self
    }

    pub fn with_mark_read(
        mut self,
        message_id: ContactMessageId,
        result: Option<ContactMessage>,
    ) -> Self {
        self.expect_mark_read()
            .once()
            .with(mockall::predicate::eq(message_id))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
