use atelier_models::{
    contact::{
        CompanyName, CompanyNameError, ContactMessage, ContactMessageAuthor,
        ContactMessageAuthorName, ContactMessageAuthorNameError, ContactMessageContent,
        ContactMessageContentError, ContactMessageId, ContactMessageSubject,
        ContactMessageSubjectError, ContactSubmission, JobTitle, JobTitleError,
    },
    email_address::EmailAddress,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApiFieldError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactMessage {
    pub id: ContactMessageId,
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<JobTitle>,
    pub subject: ContactMessageSubject,
    pub message: ContactMessageContent,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ApiContactMessage {
    fn from(value: ContactMessage) -> Self {
        Self {
            id: value.id,
            name: value.author.name,
            email: value.author.email,
            company: value.company,
            position: value.position,
            subject: value.subject,
            message: value.content,
            read: value.read,
            created_at: value.created_at,
        }
    }
}

/// Raw contact form payload as sent by the client. All fields are optional at
/// the serde level so that [`ApiContactSubmission::validate`] can report every
/// missing or invalid field instead of failing on the first one.
#[derive(Debug, Default, Deserialize)]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiContactSubmission {
    /// Checks all fields against the contact message constraints and reports
    /// one error per violated field.
    pub fn validate(self) -> Result<ContactSubmission, Vec<ApiFieldError>> {
        let mut errors = Vec::new();

        let name = match ContactMessageAuthorName::try_new(self.name.unwrap_or_default()) {
            Ok(name) => Some(name),
            Err(ContactMessageAuthorNameError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("name", "Name is required"));
                None
            }
            Err(ContactMessageAuthorNameError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("name", "Name is too long"));
                None
            }
        };

        let email = match self.email.unwrap_or_default().trim().parse::<EmailAddress>() {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(ApiFieldError::new(
                    "email",
                    "Please enter a valid email address",
                ));
                None
            }
        };

        let company = match self.company.filter(|value| !value.trim().is_empty()) {
            Some(company) => match CompanyName::try_new(company) {
                Ok(company) => Some(company),
                Err(CompanyNameError::LenCharMaxViolated) => {
                    errors.push(ApiFieldError::new("company", "Company is too long"));
                    None
                }
            },
            None => None,
        };

        let position = match self.position.filter(|value| !value.trim().is_empty()) {
            Some(position) => match JobTitle::try_new(position) {
                Ok(position) => Some(position),
                Err(JobTitleError::LenCharMaxViolated) => {
                    errors.push(ApiFieldError::new("position", "Position is too long"));
                    None
                }
            },
            None => None,
        };

        let subject = match ContactMessageSubject::try_new(self.subject.unwrap_or_default()) {
            Ok(subject) => Some(subject),
            Err(ContactMessageSubjectError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("subject", "Subject is required"));
                None
            }
            Err(ContactMessageSubjectError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("subject", "Subject is too long"));
                None
            }
        };

        let content = match ContactMessageContent::try_new(self.message.unwrap_or_default()) {
            Ok(content) => Some(content),
            Err(ContactMessageContentError::LenCharMinViolated) => {
                errors.push(ApiFieldError::new(
                    "message",
                    "Message must be at least 20 characters",
                ));
                None
            }
            Err(ContactMessageContentError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("message", "Message is too long"));
                None
            }
        };

        let (Some(name), Some(email), Some(subject), Some(content)) =
            (name, email, subject, content)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactSubmission {
            author: ContactMessageAuthor { name, email },
            company,
            position,
            subject,
            content,
        })
    }
}
