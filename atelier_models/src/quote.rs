use crate::{email_address::EmailAddress, macros::nutype_string};

/// A validated quote request. Quote requests are relayed by email and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub business_type: QuoteBusinessType,
    pub goal: QuoteGoal,
    pub budget: QuoteBudget,
    pub urgency: QuoteUrgency,
    pub name: QuoteRequesterName,
    pub email: EmailAddress,
}

nutype_string!(QuoteBusinessType(validate(not_empty, len_char_max = 256)));
nutype_string!(QuoteGoal(validate(not_empty, len_char_max = 256)));
nutype_string!(QuoteBudget(validate(not_empty, len_char_max = 256)));
nutype_string!(QuoteUrgency(validate(not_empty, len_char_max = 256)));
nutype_string!(QuoteRequesterName(validate(not_empty, len_char_max = 128)));
