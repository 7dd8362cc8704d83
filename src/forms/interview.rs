//! Interview-parameters form: collects generation options and submits
//! them to the question-generation endpoint

use crate::config::ClientConfig;
use crate::schema::{FieldSpec, FormSpec, ValidValues};
use crate::service::{GenerateRequest, QuestionApi, ServiceError};
use crate::submit::{NavigationSink, NotificationSink, Route, SubmissionController, SubmitAction};
use async_trait::async_trait;

pub const INTERVIEW_TYPES: &[&str] = &["technical", "behavioral", "mixed"];
pub const EXPERIENCE_LEVELS: &[&str] = &["beginner", "intermediate", "senior"];

/// Field set and rules for the interview-parameters form
pub fn interview_spec() -> FormSpec {
    FormSpec::new(vec![
        FieldSpec::text("role", "Job Role").normalized(),
        FieldSpec::text("techstack", "Tech Stack").normalized(),
        FieldSpec::choice("type", "Interview Focus", INTERVIEW_TYPES),
        FieldSpec::choice("level", "Experience Level", EXPERIENCE_LEVELS),
        FieldSpec::number("amount", "Amount", 1),
        FieldSpec::text("userid", "User ID").required(),
    ])
}

/// Submission behavior of the interview-parameters form
pub struct InterviewAction<S> {
    service: S,
}

impl<S> InterviewAction<S> {
    fn build_request(values: &ValidValues) -> GenerateRequest {
        GenerateRequest {
            interview_type: values.text("type").unwrap_or("").to_string(),
            role: values.text("role").unwrap_or("").to_string(),
            level: values.text("level").unwrap_or("").to_string(),
            techstack: values.text("techstack").unwrap_or("").to_string(),
            // Validated to be >= 1; values past u32 saturate so the wire
            // contract's lower bound survives the narrowing.
            amount: u32::try_from(values.number("amount").unwrap_or(1).max(1))
                .unwrap_or(u32::MAX),
            userid: values.text("userid").unwrap_or("").to_string(),
        }
    }
}

#[async_trait]
impl<S: QuestionApi> SubmitAction for InterviewAction<S> {
    async fn dispatch(&mut self, values: &ValidValues) -> Result<(), ServiceError> {
        let request = Self::build_request(values);
        self.service.generate_questions(&request).await
    }

    fn success_message(&self) -> String {
        "Interview questions generated successfully".to_string()
    }

    fn failure_message(&self, _err: &ServiceError) -> String {
        // Transport faults and service rejections are deliberately not
        // distinguished in the user-visible message.
        "Sorry, something went wrong".to_string()
    }

    fn success_route(&self) -> Route {
        Route::Home
    }

    fn failure_route(&self) -> Option<Route> {
        // Failed generation still navigates home; kept as shipped.
        Some(Route::Home)
    }
}

/// Build an interview form controller with the user id pre-filled from
/// the current identity
pub fn interview_controller<S: QuestionApi>(
    user_id: &str,
    config: &ClientConfig,
    service: S,
    notifier: Box<dyn NotificationSink>,
    nav: Box<dyn NavigationSink>,
) -> SubmissionController<InterviewAction<S>> {
    let mut spec = interview_spec();
    if config.validate_on_change.unwrap_or(false) {
        spec = spec.with_validate_on_change();
    }
    let mut ctl = SubmissionController::new(spec, InterviewAction { service }, notifier, nav);
    ctl.form_mut().set_text("userid", user_id);
    ctl
}
