use std::sync::Arc;

use atelier_core_contact_contracts::{
    ContactFeatureService, ContactMarkReadError, ContactSubmitError,
};
use atelier_di::Build;
use atelier_email_contracts::{ContentType, Email, EmailService};
use atelier_models::{
    contact::{ContactMessage, ContactMessageId, ContactSubmission},
    email_address::EmailAddressWithName,
};
use atelier_persistence_contracts::contact::ContactMessageRepository;
use atelier_shared_contracts::{id::IdService, time::TimeService};
use tracing::warn;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Id, Time, ContactRepo, Email> {
    id: Id,
    time: Time,
    contact_repo: ContactRepo,
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub inbox: Arc<EmailAddressWithName>,
}

impl<Id, Time, ContactRepo, EmailS> ContactFeatureService
    for ContactFeatureServiceImpl<Id, Time, ContactRepo, EmailS>
where
    Id: IdService,
    Time: TimeService,
    ContactRepo: ContactMessageRepository,
    EmailS: EmailService,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactSubmitError> {
        let message = ContactMessage {
            id: self.id.generate(),
            author: submission.author,
            company: submission.company,
            position: submission.position,
            subject: submission.subject,
            content: submission.content,
            read: false,
            created_at: self.time.now(),
        };

        self.contact_repo.create(&message).await?;

        let mut body = format!(
            "Message from {} ({}):\n",
            *message.author.name,
            message.author.email.as_str()
        );
        if let Some(company) = &message.company {
            body.push_str(&format!("Company: {}\n", **company));
        }
        if let Some(position) = &message.position {
            body.push_str(&format!("Position: {}\n", **position));
        }
        body.push('\n');
        body.push_str(&message.content);

        let email = Email {
            recipient: (*self.config.inbox).clone(),
            subject: format!("[Contact Form] {}", *message.subject),
            body,
            content_type: ContentType::Text,
            reply_to: Some(
                message
                    .author
                    .email
                    .clone()
                    .with_name(message.author.name.clone().into_inner()),
            ),
        };

        match self.email.send(email).await {
            Ok(true) => Ok(message),
            Ok(false) => {
                warn!(message_id = %*message.id, "Failed to deliver contact notification email");
                Err(ContactSubmitError::Notify)
            }
            Err(err) => {
                warn!(message_id = %*message.id, "Failed to deliver contact notification email: {err}");
                Err(ContactSubmitError::Notify)
            }
        }
    }

    async fn list_messages(&self) -> anyhow::Result<Vec<ContactMessage>> {
        self.contact_repo.list().await
    }

    async fn mark_read(
        &self,
        message_id: ContactMessageId,
    ) -> Result<ContactMessage, ContactMarkReadError> {
        self.contact_repo
            .mark_read(message_id)
            .await?
            .ok_or(ContactMarkReadError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use atelier_email_contracts::MockEmailService;
    use atelier_models::contact::ContactMessageAuthor;
    use atelier_persistence_contracts::contact::MockContactMessageRepository;
    use atelier_shared_contracts::{id::MockIdService, time::MockTimeService};
    use atelier_utils::assert_matches;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    type Sut = ContactFeatureServiceImpl<
        MockIdService,
        MockTimeService,
        MockContactMessageRepository,
        MockEmailService,
    >;

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let config = config();
        let submission = submission();
        let expected = message(&submission);

        let id = MockIdService::new().with_generate(expected.id);
        let time = MockTimeService::new().with_now(expected.created_at);
        let contact_repo = MockContactMessageRepository::new().with_create(expected.clone());
        let email = MockEmailService::new().with_send(notification(&expected), true);

        let sut = ContactFeatureServiceImpl {
            id,
            time,
            contact_repo,
            email,
            config,
        };

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn submit_includes_company_and_position() {
        // Arrange
        let config = config();
        let submission = ContactSubmission {
            company: Some("Acme Corp".try_into().unwrap()),
            position: Some("CTO".try_into().unwrap()),
            ..submission()
        };
        let expected = message(&submission);

        let notification = Email {
            body: format!(
                "Message from Jane Doe (jane@example.com):\nCompany: Acme Corp\nPosition: CTO\n\n{CONTENT}"
            ),
            ..notification(&expected)
        };

        let id = MockIdService::new().with_generate(expected.id);
        let time = MockTimeService::new().with_now(expected.created_at);
        let contact_repo = MockContactMessageRepository::new().with_create(expected.clone());
        let email = MockEmailService::new().with_send(notification, true);

        let sut = ContactFeatureServiceImpl {
            id,
            time,
            contact_repo,
            email,
            config,
        };

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn submit_notification_rejected() {
        // Arrange
        let config = config();
        let submission = submission();
        let expected = message(&submission);

        let id = MockIdService::new().with_generate(expected.id);
        let time = MockTimeService::new().with_now(expected.created_at);
        let contact_repo = MockContactMessageRepository::new().with_create(expected.clone());
        let email = MockEmailService::new().with_send(notification(&expected), false);

        let sut = ContactFeatureServiceImpl {
            id,
            time,
            contact_repo,
            email,
            config,
        };

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Notify));
    }

    #[tokio::test]
    async fn submit_notification_transport_error() {
        // Arrange
        let config = config();
        let submission = submission();
        let expected = message(&submission);

        let id = MockIdService::new().with_generate(expected.id);
        let time = MockTimeService::new().with_now(expected.created_at);
        let contact_repo = MockContactMessageRepository::new().with_create(expected.clone());

        let mut email = MockEmailService::new();
        email
            .expect_send()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(anyhow!("connection reset")))));

        let sut = ContactFeatureServiceImpl {
            id,
            time,
            contact_repo,
            email,
            config,
        };

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Notify));
    }

    #[tokio::test]
    async fn submit_store_error() {
        // Arrange
        let config = config();
        let submission = submission();
        let expected = message(&submission);

        let id = MockIdService::new().with_generate(expected.id);
        let time = MockTimeService::new().with_now(expected.created_at);

        let mut contact_repo = MockContactMessageRepository::new();
        contact_repo
            .expect_create()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(anyhow!("store poisoned")))));

        // the notification must not be dispatched if the message was not stored
        let email = MockEmailService::new();

        let sut = ContactFeatureServiceImpl {
            id,
            time,
            contact_repo,
            email,
            config,
        };

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }

    #[tokio::test]
    async fn list_messages() {
        // Arrange
        let expected = vec![message(&submission())];

        let sut = sut_with_repo(MockContactMessageRepository::new().with_list(expected.clone()));

        // Act
        let result = sut.list_messages().await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn mark_read_ok() {
        // Arrange
        let expected = ContactMessage {
            read: true,
            ..message(&submission())
        };

        let sut = sut_with_repo(
            MockContactMessageRepository::new()
                .with_mark_read(expected.id, Some(expected.clone())),
        );

        // Act
        let result = sut.mark_read(expected.id).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn mark_read_not_found() {
        // Arrange
        let message_id = ContactMessageId::from(Uuid::new_v4());

        let sut = sut_with_repo(MockContactMessageRepository::new().with_mark_read(message_id, None));

        // Act
        let result = sut.mark_read(message_id).await;

        // Assert
        assert_matches!(result, Err(ContactMarkReadError::NotFound));
    }

    const CONTENT: &str = "I would like to discuss a potential project with your team.";

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            inbox: Arc::new("Atelier Studio <hello@atelier.studio>".parse().unwrap()),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            author: ContactMessageAuthor {
                name: "Jane Doe".try_into().unwrap(),
                email: "jane@example.com".parse().unwrap(),
            },
            company: None,
            position: None,
            subject: "Inquiry".try_into().unwrap(),
            content: CONTENT.try_into().unwrap(),
        }
    }

    fn message(submission: &ContactSubmission) -> ContactMessage {
        ContactMessage {
            id: Uuid::new_v4().into(),
            author: submission.author.clone(),
            company: submission.company.clone(),
            position: submission.position.clone(),
            subject: submission.subject.clone(),
            content: submission.content.clone(),
            read: false,
            created_at: "2024-05-06T07:08:09Z".parse::<DateTime<Utc>>().unwrap(),
        }
    }

    fn notification(message: &ContactMessage) -> Email {
        Email {
            recipient: "Atelier Studio <hello@atelier.studio>".parse().unwrap(),
            subject: format!("[Contact Form] {}", *message.subject),
            body: format!("Message from Jane Doe (jane@example.com):\n\n{CONTENT}"),
            content_type: ContentType::Text,
            reply_to: Some(
                message
                    .author
                    .email
                    .clone()
                    .with_name(message.author.name.clone().into_inner()),
            ),
        }
    }

    fn sut_with_repo(contact_repo: MockContactMessageRepository) -> Sut {
        ContactFeatureServiceImpl {
            id: MockIdService::new(),
            time: MockTimeService::new(),
            contact_repo,
            email: MockEmailService::new(),
            config: config(),
        }
    }
}
