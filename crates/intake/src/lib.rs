// Lead intake: the contact-form data model, required-field validation,
// the pluggable submission boundary, and the single-use form state machine.

pub mod form;
pub mod submit;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use form::{FormState, LeadForm};
pub use submit::{AcceptAllSubmitter, HttpSubmitter, LeadSubmitter, ScriptedSubmitter, SubmissionReceipt};

/// A prospective client's submitted contact/case information.
///
/// Wire names are camelCase to match the generated form's field ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Lead {
    /// Names of required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }

    /// Basic required-field validation; no format checks beyond what the
    /// browser already enforces via input types.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IntakeError::MissingFields(missing))
        }
    }
}

#[derive(Debug)]
pub enum IntakeError {
    /// Required fields were empty; submission never started.
    MissingFields(Vec<&'static str>),
    /// The form is single-use and has already left the editing state.
    AlreadySubmitted,
    /// The submission collaborator reported a failure.
    Submission(String),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            IntakeError::AlreadySubmitted => write!(f, "Form has already been submitted"),
            IntakeError::Submission(msg) => write!(f, "Lead submission failed: {}", msg),
        }
    }
}

impl std::error::Error for IntakeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let lead = Lead {
            email: "jane@example.com".to_string(),
            ..Lead::default()
        };
        assert_eq!(lead.missing_fields(), vec!["name", "phone", "description"]);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let lead = Lead {
            name: "   ".to_string(),
            ..Lead::default()
        };
        assert!(lead.missing_fields().contains(&"name"));
    }

    #[test]
    fn test_complete_lead_validates() {
        let lead = Lead {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "7185550000".to_string(),
            description: "Rear-ended by a box truck on Flatbush Ave.".to_string(),
            ..Lead::default()
        };
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_lead_wire_names_are_camel_case() {
        let lead = Lead {
            name: "Jane Doe".to_string(),
            accident_date: "2025-06-01".parse().ok(),
            ..Lead::default()
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert!(json.get("accidentDate").is_some());
        assert!(json.get("accident_date").is_none());
    }
}
