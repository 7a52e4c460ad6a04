use chrono::{DateTime, Utc};

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
};

id!(ContactMessageId);

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub author: ContactMessageAuthor,
    pub company: Option<CompanyName>,
    pub position: Option<JobTitle>,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A validated contact form submission which has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub author: ContactMessageAuthor,
    pub company: Option<CompanyName>,
    pub position: Option<JobTitle>,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

nutype_string!(ContactMessageAuthorName(validate(not_empty, len_char_max = 128)));
nutype_string!(CompanyName(validate(len_char_max = 256)));
nutype_string!(JobTitle(validate(len_char_max = 256)));
nutype_string!(ContactMessageSubject(validate(not_empty, len_char_max = 256)));
nutype_string!(ContactMessageContent(validate(
    len_char_min = 20,
    len_char_max = 4096
)));
