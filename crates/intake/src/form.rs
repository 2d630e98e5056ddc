use crate::submit::{LeadSubmitter, SubmissionReceipt};
use crate::{IntakeError, Lead};

/// Lead-form lifecycle. Forward-only: once a submission starts there is
/// no way back to editing, making the form single-use per page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Submitted,
    /// The submission collaborator reported a failure after the form
    /// left the editing state. Terminal, like `Submitted`.
    Failed,
}

/// Single-use lead-capture form.
///
/// Validation runs before the submitting state is entered, so a lead
/// with missing required fields never reaches the boundary. The
/// exclusive borrow in `submit` plus the state check prevent a second
/// submission from starting before the first resolves.
pub struct LeadForm {
    lead: Lead,
    state: FormState,
}

impl LeadForm {
    /// New form in the editing state, optionally pre-filled with the
    /// page's service/location context.
    pub fn new(service: Option<String>, location: Option<String>) -> Self {
        LeadForm {
            lead: Lead {
                service,
                location,
                ..Lead::default()
            },
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether the submit affordance must be disabled.
    pub fn is_locked(&self) -> bool {
        self.state != FormState::Editing
    }

    pub fn lead(&self) -> &Lead {
        &self.lead
    }

    /// Update the editable fields. Ignored once the form has left the
    /// editing state.
    pub fn set_fields(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        description: &str,
    ) -> &mut Self {
        if self.state == FormState::Editing {
            self.lead.name = name.to_string();
            self.lead.email = email.to_string();
            self.lead.phone = phone.to_string();
            self.lead.description = description.to_string();
        }
        self
    }

    pub fn set_accident_date(&mut self, date: chrono::NaiveDate) -> &mut Self {
        if self.state == FormState::Editing {
            self.lead.accident_date = Some(date);
        }
        self
    }

    /// Drive the full submission: validate, enter `Submitting`, await the
    /// collaborator, land in `Submitted` or `Failed`.
    pub async fn submit(
        &mut self,
        submitter: &dyn LeadSubmitter,
    ) -> Result<SubmissionReceipt, IntakeError> {
        if self.state != FormState::Editing {
            return Err(IntakeError::AlreadySubmitted);
        }
        // Rejected before Submitting is ever entered.
        self.lead.validate()?;

        self.state = FormState::Submitting;
        match submitter.submit(&self.lead).await {
            Ok(receipt) => {
                self.state = FormState::Submitted;
                Ok(receipt)
            }
            Err(err) => {
                self.state = FormState::Failed;
                Err(IntakeError::Submission(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::ScriptedSubmitter;

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new(Some("Jackknife Accidents".to_string()), None);
        form.set_fields(
            "Jane Doe",
            "jane@example.com",
            "7185550000",
            "Jackknifed trailer crossed the median on the BQE.",
        );
        form
    }

    #[tokio::test]
    async fn test_happy_path_transitions() {
        let submitter = ScriptedSubmitter::new();
        submitter.script_ok("case-42");

        let mut form = filled_form();
        assert_eq!(form.state(), FormState::Editing);
        assert!(!form.is_locked());

        let receipt = form.submit(&submitter).await.unwrap();
        assert_eq!(receipt.id, "case-42");
        assert_eq!(form.state(), FormState::Submitted);
        assert!(form.is_locked());

        let submitted = submitter.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].service.as_deref(), Some("Jackknife Accidents"));
    }

    #[tokio::test]
    async fn test_empty_description_rejected_before_submitting() {
        let submitter = ScriptedSubmitter::new();
        let mut form = LeadForm::new(None, None);
        form.set_fields("Jane Doe", "jane@example.com", "7185550000", "");

        let err = form.submit(&submitter).await.unwrap_err();
        match err {
            IntakeError::MissingFields(fields) => assert_eq!(fields, vec!["description"]),
            other => panic!("unexpected error: {}", other),
        }

        // Still editable; the boundary never saw the lead.
        assert_eq!(form.state(), FormState::Editing);
        assert!(submitter.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_form_is_single_use() {
        let submitter = ScriptedSubmitter::new();
        let mut form = filled_form();
        form.submit(&submitter).await.unwrap();

        let err = form.submit(&submitter).await.unwrap_err();
        assert!(matches!(err, IntakeError::AlreadySubmitted));
        assert_eq!(submitter.submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_submission_failure_is_terminal() {
        let submitter = ScriptedSubmitter::new();
        submitter.script_err("intake endpoint returned 503");

        let mut form = filled_form();
        let err = form.submit(&submitter).await.unwrap_err();
        assert!(matches!(err, IntakeError::Submission(_)));
        assert_eq!(form.state(), FormState::Failed);

        // No silent retry path.
        let err = form.submit(&submitter).await.unwrap_err();
        assert!(matches!(err, IntakeError::AlreadySubmitted));
    }

    #[tokio::test]
    async fn test_fields_frozen_after_submission() {
        let submitter = ScriptedSubmitter::new();
        let mut form = filled_form();
        form.submit(&submitter).await.unwrap();

        form.set_fields("Someone Else", "x@example.com", "0000000000", "edited");
        assert_eq!(form.lead().name, "Jane Doe");
    }
}
