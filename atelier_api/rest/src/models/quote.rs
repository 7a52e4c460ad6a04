use atelier_models::{
    email_address::EmailAddress,
    quote::{
        QuoteBudget, QuoteBudgetError, QuoteBusinessType, QuoteBusinessTypeError, QuoteGoal,
        QuoteGoalError, QuoteRequest, QuoteRequesterName, QuoteRequesterNameError, QuoteUrgency,
        QuoteUrgencyError,
    },
};
use serde::{Deserialize, Serialize};

use super::ApiFieldError;

/// Raw quote request payload as sent by the client.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQuoteRequest {
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiQuoteAccepted {
    pub success: bool,
    pub message: &'static str,
}

impl ApiQuoteRequest {
    /// Checks all fields against the quote request constraints and reports one
    /// error per violated field.
    pub fn validate(self) -> Result<QuoteRequest, Vec<ApiFieldError>> {
        let mut errors = Vec::new();

        let business_type = match QuoteBusinessType::try_new(self.business_type.unwrap_or_default())
        {
            Ok(business_type) => Some(business_type),
            Err(QuoteBusinessTypeError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("businessType", "Business type is required"));
                None
            }
            Err(QuoteBusinessTypeError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("businessType", "Business type is too long"));
                None
            }
        };

        let goal = match QuoteGoal::try_new(self.goal.unwrap_or_default()) {
            Ok(goal) => Some(goal),
            Err(QuoteGoalError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("goal", "Goal is required"));
                None
            }
            Err(QuoteGoalError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("goal", "Goal is too long"));
                None
            }
        };

        let budget = match QuoteBudget::try_new(self.budget.unwrap_or_default()) {
            Ok(budget) => Some(budget),
            Err(QuoteBudgetError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("budget", "Budget is required"));
                None
            }
            Err(QuoteBudgetError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("budget", "Budget is too long"));
                None
            }
        };

        let urgency = match QuoteUrgency::try_new(self.urgency.unwrap_or_default()) {
            Ok(urgency) => Some(urgency),
            Err(QuoteUrgencyError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("urgency", "Timeline is required"));
                None
            }
            Err(QuoteUrgencyError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("urgency", "Timeline is too long"));
                None
            }
        };

        let name = match QuoteRequesterName::try_new(self.name.unwrap_or_default()) {
            Ok(name) => Some(name),
            Err(QuoteRequesterNameError::NotEmptyViolated) => {
                errors.push(ApiFieldError::new("name", "Name is required"));
                None
            }
            Err(QuoteRequesterNameError::LenCharMaxViolated) => {
                errors.push(ApiFieldError::new("name", "Name is too long"));
                None
            }
        };

        let email = match self.email.unwrap_or_default().trim().parse::<EmailAddress>() {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(ApiFieldError::new("email", "Valid email is required"));
                None
            }
        };

        match (business_type, goal, budget, urgency, name, email) {
            (
                Some(business_type),
                Some(goal),
                Some(budget),
                Some(urgency),
                Some(name),
                Some(email),
            ) if errors.is_empty() => Ok(QuoteRequest {
                business_type,
                goal,
                budget,
                urgency,
                name,
                email,
            }),
            _ => Err(errors),
        }
    }
}
