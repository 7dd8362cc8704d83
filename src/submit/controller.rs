//! Submission controller: one state machine per submission attempt

use super::outcome::{NavigationSink, NoticeKind, NotificationSink, Route};
use crate::schema::{validate, validate_field, FormSpec, ValidValues, ValidationResult};
use crate::service::ServiceError;
use crate::state::{FieldValue, FormState};
use async_trait::async_trait;

/// Phase of the current (or last) submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Per-form submission behavior: payload construction, the outbound
/// call, and the outcome dispatch configuration.
#[async_trait]
pub trait SubmitAction: Send {
    /// Build the payload from validated values and issue exactly one
    /// outbound call to the designated external service.
    async fn dispatch(&mut self, values: &ValidValues) -> Result<(), ServiceError>;

    fn success_message(&self) -> String;

    fn failure_message(&self, err: &ServiceError) -> String;

    /// Destination route after a successful submission
    fn success_route(&self) -> Route;

    /// Destination route after a failed submission, if any
    fn failure_route(&self) -> Option<Route>;
}

/// Orchestrates validate → payload → outbound call → outcome dispatch.
///
/// Owns the form state and the injected capabilities (service action,
/// notification sink, navigation sink) for one form instance. At most
/// one attempt is in flight at a time; a submit received while an
/// attempt is `Submitting` is ignored.
pub struct SubmissionController<A> {
    spec: FormSpec,
    form: FormState,
    action: A,
    notifier: Box<dyn NotificationSink>,
    nav: Box<dyn NavigationSink>,
    phase: SubmitPhase,
}

impl<A: SubmitAction> SubmissionController<A> {
    pub fn new(
        spec: FormSpec,
        action: A,
        notifier: Box<dyn NotificationSink>,
        nav: Box<dyn NavigationSink>,
    ) -> Self {
        let form = FormState::from_spec(&spec);
        Self {
            spec,
            form,
            action,
            notifier,
            nav,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Write a field value through the binding layer.
    ///
    /// Re-validates just that field when the spec opts into
    /// validate-on-change; otherwise errors stay untouched until submit.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.form.set(name, value);
        if self.spec.validate_on_change() {
            let snapshot = self.form.snapshot();
            match validate_field(&self.spec, name, &snapshot) {
                Some(message) => self.form.set_error(name, message),
                None => self.form.clear_error(name),
            }
        }
    }

    /// Run one submission attempt to completion.
    ///
    /// Snapshot → validate → (surface errors | call out → notify +
    /// navigate). Transport faults and service rejections are absorbed
    /// here; nothing propagates past this boundary.
    pub async fn submit(&mut self) -> SubmitPhase {
        if self.phase == SubmitPhase::Submitting {
            // No concurrent attempts per instance; resubmission must
            // come from a fresh user action after the outcome lands.
            tracing::debug!("submit ignored: attempt already in flight");
            return self.phase;
        }

        self.phase = SubmitPhase::Validating;
        let snapshot = self.form.snapshot();

        match validate(&self.spec, &snapshot) {
            ValidationResult::Invalid(errors) => {
                self.form.set_errors(errors);
                self.phase = SubmitPhase::Invalid;
            }
            ValidationResult::Valid(values) => {
                self.form.clear_errors();
                self.phase = SubmitPhase::Submitting;
                match self.action.dispatch(&values).await {
                    Ok(()) => {
                        self.notifier
                            .notify(NoticeKind::Success, &self.action.success_message());
                        self.nav.navigate(self.action.success_route());
                        self.form.reset(&self.spec);
                        self.phase = SubmitPhase::Succeeded;
                    }
                    Err(err) => {
                        tracing::warn!("submission failed: {err}");
                        self.notifier
                            .notify(NoticeKind::Error, &self.action.failure_message(&err));
                        if let Some(route) = self.action.failure_route() {
                            self.nav.navigate(route);
                        }
                        self.phase = SubmitPhase::Failed;
                    }
                }
            }
        }
        self.phase
    }
}
