use std::sync::Arc;

use anyhow::ensure;
use atelier_models::contact::{ContactMessage, ContactMessageId};
use atelier_persistence_contracts::contact::ContactMessageRepository;
use tokio::sync::RwLock;

/// In-process contact message store.
///
/// Messages are kept in insertion order. Mutations of a stored message are
/// applied under the write lock, so concurrent mark-as-read calls on the same
/// id cannot interleave.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactMessageRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl ContactMessageRepository for MemoryContactMessageRepository {
    async fn create(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let mut messages = self.messages.write().await;
        ensure!(
            messages.iter().all(|m| m.id != message.id),
            "A message with id {} already exists",
            *message.id
        );
        messages.push(message.clone());
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactMessage>> {
        Ok(self.messages.read().await.clone())
    }

    async fn mark_read(
        &self,
        message_id: ContactMessageId,
    ) -> anyhow::Result<Option<ContactMessage>> {
        let mut messages = self.messages.write().await;
        Ok(messages.iter_mut().find(|m| m.id == message_id).map(|m| {
            m.read = true;
            m.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use atelier_models::contact::ContactMessageAuthor;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn create_and_list_in_insertion_order() {
        // Arrange
        let sut = MemoryContactMessageRepository::default();
        let first = message("First inquiry");
        let second = message("Second inquiry");

        // Act
        sut.create(&first).await.unwrap();
        sut.create(&second).await.unwrap();

        // Assert
        assert_eq!(sut.list().await.unwrap(), [first, second]);
    }

    #[tokio::test]
    async fn create_duplicate_id() {
        // Arrange
        let sut = MemoryContactMessageRepository::default();
        let msg = message("Inquiry");
        sut.create(&msg).await.unwrap();

        // Act
        let result = sut.create(&msg).await;

        // Assert
        result.unwrap_err();
        assert_eq!(sut.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        // Arrange
        let sut = MemoryContactMessageRepository::default();
        let msg = message("Inquiry");
        sut.create(&msg).await.unwrap();

        // Act
        let first = sut.mark_read(msg.id).await.unwrap();
        let second = sut.mark_read(msg.id).await.unwrap();

        // Assert
        let expected = ContactMessage { read: true, ..msg };
        assert_eq!(first, Some(expected.clone()));
        assert_eq!(second, Some(expected.clone()));
        assert_eq!(sut.list().await.unwrap(), [expected]);
    }

    #[tokio::test]
    async fn mark_read_not_found() {
        // Arrange
        let sut = MemoryContactMessageRepository::default();
        sut.create(&message("Inquiry")).await.unwrap();

        // Act
        let result = sut.mark_read(Uuid::new_v4().into()).await.unwrap();

        // Assert
        assert_eq!(result, None);
    }

    fn message(subject: &str) -> ContactMessage {
        ContactMessage {
            id: Uuid::new_v4().into(),
            author: ContactMessageAuthor {
                name: "Jane Doe".try_into().unwrap(),
                email: "jane@example.com".parse().unwrap(),
            },
            company: None,
            position: None,
            subject: subject.try_into().unwrap(),
            content: "I would like to discuss a potential project with your team."
                .try_into()
                .unwrap(),
            read: false,
            created_at: "2024-05-06T07:08:09Z".parse().unwrap(),
        }
    }
}
